use once_cell::sync::Lazy;
use std::collections::HashMap;

/// First RAM address handed out to variables.
pub const VARIABLE_BASE: u16 = 16;

/// Largest value an address instruction can carry (15 bits).
pub const ADDRESS_MAX: u16 = 0x7FFF;

/// Number of instruction words the ROM holds.
pub const ROM_SIZE: usize = 0x8000;

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

pub const PREDEFINED: [(&str, u16); 23] = [
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

static TABLE: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| PREDEFINED.into_iter().collect());

pub fn predefined(name: &str) -> Option<u16> {
    TABLE.get(name).copied()
}

/// Identifier grammar shared by labels and variables:
/// `[A-Za-z_.$:][A-Za-z0-9_.$:]*`
pub fn is_symbol(s: &str) -> bool {
    fn allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if allowed(head) && !head.is_ascii_digit() => chars.all(allowed),
        _ => false,
    }
}

#[test]
fn predefined_table() {
    assert_eq!(predefined("R0"), Some(0));
    assert_eq!(predefined("R15"), Some(15));
    assert_eq!(predefined("SCREEN"), Some(16384));
    assert_eq!(predefined("KBD"), Some(24576));
    assert_eq!(predefined("THAT"), Some(4));
    assert_eq!(predefined("R16"), None);
    assert_eq!(predefined("sp"), None);
}

#[test]
fn symbol_grammar() {
    assert!(is_symbol("LOOP"));
    assert!(is_symbol("sum"));
    assert!(is_symbol("Main.main$ret.1"));
    assert!(is_symbol("_tmp:0"));
    assert!(!is_symbol(""));
    assert!(!is_symbol("1abc"));
    assert!(!is_symbol("a-b"));
    assert!(!is_symbol("(LOOP)"));
}
