/// Highest address an A-instruction can carry.
pub const ADDR_MAX: u16 = 0x7FFF;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

/// Predefined symbols. `SP`..`THAT` alias `R0`..`R4`.
pub const BUILTINS: [(&str, u16); 23] = [
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SCREEN", SCREEN),
    ("KBD", KBD),
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
];

pub fn is_builtin(name: &str) -> bool {
    BUILTINS.iter().any(|(key, _)| *key == name)
}

#[test]
fn test() {
    assert!(is_builtin("SCREEN"));
    assert!(is_builtin("R15"));
    assert!(!is_builtin("R16"));
    assert!(!is_builtin("sp"));
    assert_eq!(SCREEN, 16384);
    assert_eq!(KBD, 24576);
    assert!(BUILTINS.iter().all(|(_, addr)| *addr <= ADDR_MAX));
}
