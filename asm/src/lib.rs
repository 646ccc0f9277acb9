pub mod clean;
pub mod codegen;
pub mod emit;
pub mod error;
pub mod label;
pub mod msg;
pub mod parser;
pub mod symbols;
pub mod util;

pub use error::{Error, LineError};

use hack::Inst;
use msg::Msg;
use parser::Stmt;
use symbols::SymbolTable;

/// Result of a successful assembly run.
#[derive(Debug)]
pub struct Assembly {
    /// Parsed program, each statement with its 0-based source line.
    pub stmts: Vec<(usize, Stmt)>,
    /// One instruction per executable statement. The index is its address.
    pub code: Vec<(usize, Inst)>,
    pub symbols: SymbolTable,
    /// Warnings and notes collected along the way.
    pub msgs: Vec<(usize, Msg)>,
}

impl Assembly {
    pub fn words(&self) -> Vec<u16> {
        self.code.iter().map(|(_, inst)| inst.to_bin()).collect()
    }
}

/// Assemble HACK source text.
///
/// Runs the preprocessor, the parser, the label pass and the code generation
/// pass in order. The first error aborts the run.
pub fn assemble(src: &str) -> Result<Assembly, LineError> {
    let lines = clean::clean(src);
    let stmts = parser::parse(&lines)?;

    let mut symbols = SymbolTable::new();
    let msgs = label::collect_labels(&stmts, &mut symbols)?;
    let code = codegen::generate(&stmts, &mut symbols)?;

    Ok(Assembly {
        stmts,
        code,
        symbols,
        msgs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{emit, Format};
    use hack::{Comp, Dest};

    const ADD: &str = "\
// Computes R0 = 2 + 3
@2
D=A
@3
D=D+A
@0
M=D
";

    const MAX: &str = "\
// Computes R2 = max(R0, R1)
   @R0
   D=M              // D = first number
   @R1
   D=D-M            // D = first number - second number
   @OUTPUT_FIRST
   D;JGT            // if D>0 (first is greater) goto output_first
   @R1
   D=M              // D = second number
   @OUTPUT_D
   0;JMP            // goto output_d
(OUTPUT_FIRST)
   @R0
   D=M              // D = first number
(OUTPUT_D)
   @R2
   M=D              // M[2] = D (greatest number)
(INFINITE_LOOP)
   @INFINITE_LOOP
   0;JMP            // infinite loop
";

    #[test]
    fn test_add() {
        let asm = assemble(ADD).unwrap();
        let words = asm.words();
        assert_eq!(words.len(), 6);
        assert_eq!(words[0], 0b0000000000000010);
        assert_eq!(
            asm.code[1].1,
            Inst::C {
                dest: Some(Dest::D),
                comp: Comp::A,
                jump: None
            }
        );
        assert_eq!(
            String::from_utf8(emit(&words, Format::Text)).unwrap(),
            "\
0000000000000010
1110110000010000
0000000000000011
1110000010010000
0000000000000000
1110001100001000
"
        );
        assert!(asm.msgs.is_empty());
        assert_eq!(asm.symbols.len(), hack::symbol::BUILTINS.len());
    }

    #[test]
    fn test_max() {
        let asm = assemble(MAX).unwrap();
        assert_eq!(asm.symbols.lookup("OUTPUT_FIRST"), Some(10));
        assert_eq!(asm.symbols.lookup("OUTPUT_D"), Some(12));
        assert_eq!(asm.symbols.lookup("INFINITE_LOOP"), Some(14));
        assert_eq!(
            asm.words(),
            vec![
                0b0000000000000000,
                0b1111110000010000,
                0b0000000000000001,
                0b1111010011010000,
                0b0000000000001010,
                0b1110001100000001,
                0b0000000000000001,
                0b1111110000010000,
                0b0000000000001100,
                0b1110101010000111,
                0b0000000000000000,
                0b1111110000010000,
                0b0000000000000010,
                0b1110001100001000,
                0b0000000000001110,
                0b1110101010000111,
            ]
        );
    }

    #[test]
    fn test_loop_label_counts_instructions() {
        let src = "// sum\n@i\nM=1\n\n(LOOP)\n  @i\n  M=M+1\n  @LOOP\n  0;JMP\n";
        let asm = assemble(src).unwrap();
        assert_eq!(asm.symbols.lookup("LOOP"), Some(2));
        assert_eq!(asm.symbols.lookup("i"), Some(16));
        assert_eq!(asm.words()[4], 2);
        // the line index of `@LOOP` is 7, its address is 4
        assert_eq!(asm.code[4].0, 7);
    }

    #[test]
    fn test_unknown_mnemonic_aborts() {
        let err = assemble("@1\nD=A\nD=X\n@2\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.error, Error::UnknownMnemonic { .. }));
    }

    #[test]
    fn test_bare_jump_rejected() {
        let err = assemble("(L)\nJMP\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.error, Error::UnknownMnemonic { .. }));
    }

    #[test]
    fn test_malformed_label_aborts() {
        let err = assemble("@1\n( )\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.error, Error::MalformedLabel(_)));
    }

    #[test]
    fn test_empty_program() {
        let asm = assemble("// nothing\n\n   \n").unwrap();
        assert!(asm.words().is_empty());
    }
}
