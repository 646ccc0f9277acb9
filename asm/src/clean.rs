/// Strip comments and whitespace from one source line.
///
/// Returns `None` when nothing meaningful is left.
pub fn clean_line(raw: &str) -> Option<String> {
    let code = match raw.find("//") {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

/// Clean a whole source text, keeping each line's 0-based index.
pub fn clean(src: &str) -> Vec<(usize, String)> {
    src.lines()
        .enumerate()
        .filter_map(|(idx, raw)| clean_line(raw).map(|code| (idx, code)))
        .collect()
}
