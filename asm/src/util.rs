use crate::{emit::to_bin_str, parser::Stmt, symbols::SymbolKind, Assembly};
use color_print::cformat;
use std::collections::HashMap;

pub fn print_dump(file: &str, raw: &[&str], asm: &Assembly) {
    let code: HashMap<usize, (usize, &hack::Inst)> = asm
        .code
        .iter()
        .enumerate()
        .map(|(pc, (idx, inst))| (*idx, (pc, inst)))
        .collect();
    let labels: HashMap<usize, &String> = asm
        .stmts
        .iter()
        .filter_map(|(idx, stmt)| match stmt {
            Stmt::Label(name) => Some((*idx, name)),
            _ => None,
        })
        .collect();

    println!(
        "{}+------[{}]{}",
        "-".repeat(24),
        file,
        "-".repeat(45usize.saturating_sub(file.len()))
    );
    for (idx, line) in raw.iter().enumerate() {
        let line_num = idx + 1;
        let body = if let Some((pc, inst)) = code.get(&idx) {
            format!(
                "[{:05}] {} | {:>4}:   {}",
                pc,
                to_bin_str(inst.to_bin()),
                line_num,
                inst.cformat()
            )
        } else if let Some(name) = labels.get(&idx) {
            let label = match asm.symbols.get(name) {
                Some(sym) if sym.line == Some(idx) => cformat!("<g>({})</> = {}", name, sym.addr),
                _ => cformat!("<y>({})</> ignored", name),
            };
            format!("{:24}| {:>4}: {}", "", line_num, label)
        } else {
            format!("{:24}| {:>4}: {}", "", line_num, line.trim())
        };
        println!("{}", body);
    }

    println!("{}+------[symbols]{}", "-".repeat(24), "-".repeat(38));
    for (name, sym) in asm.symbols.iter() {
        let kind = match sym.kind {
            SymbolKind::Builtin => continue,
            SymbolKind::Label => cformat!("<g>label</>   "),
            SymbolKind::Variable => cformat!("<c>variable</>"),
        };
        let line = sym.line.map(|l| l + 1).unwrap_or(0);
        println!("[{:05}] {:16} | {:>4}: {} {}", sym.addr, "", line, kind, name);
    }
    println!("{}+{}", "-".repeat(24), "-".repeat(53));
}
