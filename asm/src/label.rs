use crate::{
    error::{Error, LineError},
    msg::Msg,
    parser::Stmt,
    symbols::{SymbolKind, SymbolTable},
};
use hack::symbol::ADDR_MAX;

/// First pass: bind every `(NAME)` to the address of the next instruction.
///
/// Label lines do not occupy an address. A name that is already bound keeps
/// its first binding; the redeclaration is reported as a warning.
pub fn collect_labels(
    stmts: &[(usize, Stmt)],
    symbols: &mut SymbolTable,
) -> Result<Vec<(usize, Msg)>, LineError> {
    let mut msgs = vec![];
    let mut pc: usize = 0;

    for (idx, stmt) in stmts {
        let name = match stmt {
            Stmt::Label(name) => name,
            _ => {
                pc += 1;
                continue;
            }
        };

        if let Some(prev) = symbols.get(name) {
            match prev.line {
                None => msgs.push((
                    *idx,
                    Msg::Warn(format!("Label `{}` is a built-in symbol, ignored", name)),
                )),
                Some(line) => {
                    msgs.push((*idx, Msg::Warn(format!("Re-defined label: `{}`", name))));
                    msgs.push((
                        line,
                        Msg::Note(format!(
                            "Already defined here as {}. The first definition is kept.",
                            prev.addr
                        )),
                    ));
                }
            }
            continue;
        }

        let addr = u16::try_from(pc)
            .ok()
            .filter(|addr| *addr <= ADDR_MAX)
            .ok_or_else(|| LineError::new(*idx, Error::OutOfRangeAddress(pc.to_string())))?;
        symbols
            .define(name, addr, SymbolKind::Label, *idx)
            .map_err(|err| LineError::new(*idx, err))?;
    }

    Ok(msgs)
}
