use crate::{
    error::{Error, LineError},
    parser::{Imm, Stmt},
    symbols::{SymbolKind, SymbolTable},
};
use hack::{
    symbol::{ADDR_MAX, VAR_BASE},
    Inst,
};

/// Second pass: resolve symbols and lower statements to instructions.
pub struct Codegen<'a> {
    symbols: &'a mut SymbolTable,
    next_var: u32,
}

impl<'a> Codegen<'a> {
    pub fn new(symbols: &'a mut SymbolTable) -> Self {
        Codegen {
            symbols,
            next_var: VAR_BASE as u32,
        }
    }

    pub fn run(mut self, stmts: &[(usize, Stmt)]) -> Result<Vec<(usize, Inst)>, LineError> {
        let mut code = vec![];
        for (idx, stmt) in stmts {
            let inst = match stmt {
                Stmt::Label(_) => continue,
                Stmt::A(imm) => {
                    let addr = self
                        .resolve(imm, *idx)
                        .map_err(|err| LineError::new(*idx, err))?;
                    Inst::A(addr)
                }
                Stmt::C(dest, comp, jump) => Inst::C {
                    dest: *dest,
                    comp: *comp,
                    jump: *jump,
                },
            };
            code.push((*idx, inst));
        }
        Ok(code)
    }

    fn resolve(&mut self, imm: &Imm, line: usize) -> Result<u16, Error> {
        let name = match imm {
            Imm::Literal(v) => return Ok(*v),
            Imm::Symbol(name) => name,
        };
        if let Some(addr) = self.symbols.lookup(name) {
            return Ok(addr);
        }
        let addr = u16::try_from(self.next_var)
            .ok()
            .filter(|addr| *addr <= ADDR_MAX)
            .ok_or_else(|| Error::OutOfRangeAddress(self.next_var.to_string()))?;
        self.symbols.define(name, addr, SymbolKind::Variable, line)?;
        self.next_var += 1;
        Ok(addr)
    }
}

pub fn generate(
    stmts: &[(usize, Stmt)],
    symbols: &mut SymbolTable,
) -> Result<Vec<(usize, Inst)>, LineError> {
    Codegen::new(symbols).run(stmts)
}
