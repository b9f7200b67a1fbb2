use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Jump condition, tested against the ALU output.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    IntoPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn code(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    use strum::IntoEnumIterator;
    for (code, jump) in Jump::iter().enumerate() {
        assert_eq!(jump.code(), code as u16);
        assert_eq!(Jump::parse(&jump.to_string()), Some(jump));
    }
    assert_eq!(Jump::parse("jmp"), None);
    assert_eq!(Jump::parse("JUMP"), None);
}
