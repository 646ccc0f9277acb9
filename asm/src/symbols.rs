use crate::error::Error;
use hack::symbol::BUILTINS;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Builtin,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub addr: u16,
    pub kind: SymbolKind,
    /// Source line (0-based) that introduced the symbol. `None` for built-ins.
    pub line: Option<usize>,
}

/// Symbol name to address mapping for one assembly run.
///
/// Seeded with the built-in names on construction. Bindings are never
/// overwritten: the first definition of a name wins.
#[derive(Debug, Clone)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    pub fn new() -> Self {
        let mut map = IndexMap::new();
        for (name, addr) in BUILTINS {
            map.insert(
                name.to_string(),
                Symbol {
                    addr,
                    kind: SymbolKind::Builtin,
                    line: None,
                },
            );
        }
        SymbolTable(map)
    }

    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|sym| sym.addr)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    /// Bind `name` to `addr`.
    ///
    /// Fails on a built-in name. If `name` is already bound the table is left
    /// untouched and the existing binding is returned.
    pub fn define(
        &mut self,
        name: &str,
        addr: u16,
        kind: SymbolKind,
        line: usize,
    ) -> Result<Option<&Symbol>, Error> {
        if let Some(prev) = self.0.get(name) {
            if prev.kind == SymbolKind::Builtin {
                return Err(Error::DuplicateBuiltinRedefinition(name.to_string()));
            }
        }
        if self.0.contains_key(name) {
            return Ok(self.0.get(name));
        }
        self.0.insert(
            name.to_string(),
            Symbol {
                addr,
                kind,
                line: Some(line),
            },
        );
        Ok(None)
    }

    /// Symbols in definition order: built-ins, then labels, then variables.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
