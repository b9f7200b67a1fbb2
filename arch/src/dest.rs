use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Registers a compute instruction stores its result into.
/// Bits are `A D M` from high to low.
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
pub enum Dest {
    #[default]
    #[strum(serialize = "")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn code(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Dest::parse(""), Some(Dest::Null));
    assert_eq!(Dest::parse("M"), Some(Dest::M));
    assert_eq!(Dest::parse("AMD"), Some(Dest::AMD));
    assert_eq!(Dest::parse("DM"), None);
    assert_eq!(Dest::parse("X"), None);
    assert_eq!(Dest::AD.code(), 0b110);
    assert_eq!(Dest::Null.to_string(), "");
}
