use crate::msg::Msg;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed label: `{0}`")]
    MalformedLabel(String),

    #[error("Malformed symbol: `{0}`")]
    MalformedSymbol(String),

    #[error("Unknown {field} mnemonic: `{name}`")]
    UnknownMnemonic { field: Field, name: String },

    #[error("Address out of range: `{0}` (max 32767)")]
    OutOfRangeAddress(String),

    #[error("Cannot redefine built-in symbol: `{0}`")]
    DuplicateBuiltinRedefinition(String),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// Which C-instruction table a mnemonic was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Dest,
    Comp,
    Jump,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Dest => write!(f, "destination"),
            Field::Comp => write!(f, "computation"),
            Field::Jump => write!(f, "jump"),
        }
    }
}

/// An assembly error tied to the source line (0-based) it was found on.
#[derive(Error, Debug)]
#[error("line {}: {}", .line + 1, .error)]
pub struct LineError {
    pub line: usize,
    #[source]
    pub error: Error,
}

impl LineError {
    pub fn new(line: usize, error: Error) -> Self {
        LineError { line, error }
    }

    /// Print error with the file location and the offending source line
    pub fn print_diag(&self, file: &str, raw: &[&str]) {
        let content = raw.get(self.line).copied().unwrap_or("");
        Msg::Error(self.error.to_string()).print(file, self.line, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LineError::new(
            4,
            Error::UnknownMnemonic {
                field: Field::Comp,
                name: "X".to_string(),
            },
        );
        assert_eq!(err.to_string(), "line 5: Unknown computation mnemonic: `X`");
        assert!(matches!(
            err.error,
            Error::UnknownMnemonic {
                field: Field::Comp,
                ..
            }
        ));
    }
}
