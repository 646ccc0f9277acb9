use crate::error::{Error, Field, LineError};
use hack::{symbol::ADDR_MAX, Comp, Dest, Jump};

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `(NAME)`
    Label(String),
    /// `@value`
    A(Imm),
    /// `dest=comp;jump`
    C(Option<Dest>, Comp, Option<Jump>),
}

impl Stmt {
    /// Classify a cleaned line (no whitespace, no comment).
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        if code.starts_with('(') {
            return match code.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
                Some(name) if is_symbol(name) => Ok(Stmt::Label(name.to_string())),
                _ => Err(Error::MalformedLabel(code.to_string())),
            };
        }

        if let Some(value) = code.strip_prefix('@') {
            return Ok(Stmt::A(Imm::parse(value)?));
        }

        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Some(dest), rest),
            None => (None, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump)),
            None => (rest, None),
        };

        let dest = match dest {
            Some(name) => Some(Dest::parse(name).ok_or_else(|| unknown(Field::Dest, name))?),
            None => None,
        };
        let comp = Comp::parse(comp).ok_or_else(|| unknown(Field::Comp, comp))?;
        let jump = match jump {
            Some(name) => Some(Jump::parse(name).ok_or_else(|| unknown(Field::Jump, name))?),
            None => None,
        };
        Ok(Stmt::C(dest, comp, jump))
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Stmt::Label(_))
    }
}

fn unknown(field: Field, name: &str) -> Error {
    Error::UnknownMnemonic {
        field,
        name: name.to_string(),
    }
}

/// Parse every cleaned line, stopping at the first error.
pub fn parse(lines: &[(usize, String)]) -> Result<Vec<(usize, Stmt)>, LineError> {
    lines
        .iter()
        .map(|(idx, code)| {
            Stmt::parse(code)
                .map(|stmt| (*idx, stmt))
                .map_err(|err| LineError::new(*idx, err))
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Immidiate

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm {
    Literal(u16),
    Symbol(String),
}

impl Imm {
    fn parse(s: &str) -> Result<Imm, Error> {
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<u16>() {
                Ok(v) if v <= ADDR_MAX => Ok(Imm::Literal(v)),
                _ => Err(Error::OutOfRangeAddress(s.to_string())),
            };
        }
        if is_symbol(s) {
            Ok(Imm::Symbol(s.to_string()))
        } else {
            Err(Error::MalformedSymbol(s.to_string()))
        }
    }
}

/// Letters, digits, `_`, `.`, `$` and `:`, not starting with a digit.
pub fn is_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if !head.is_ascii_digit() && is_symbol_char(head) => {
            chars.all(is_symbol_char)
        }
        _ => false,
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}
