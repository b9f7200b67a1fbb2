use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Second ALU operand: the A register itself or the memory word it addresses.
/// Encoded as the a-bit (bit 12) of a compute instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Src {
    #[default]
    A,
    M,
}

impl Src {
    pub fn bit(self) -> u16 {
        match self {
            Src::A => 0,
            Src::M => 1,
        }
    }
}

/// ALU computations. The discriminant is the `zx nx zy ny f no` control word.
/// Mnemonics are spelled with `A`; the `M` forms share the code and differ
/// only in [`Src`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    IntoPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero = 0b101010,
    #[strum(serialize = "1")]
    One = 0b111111,
    #[strum(serialize = "-1")]
    NegOne = 0b111010,
    #[strum(serialize = "D")]
    D = 0b001100,
    #[strum(serialize = "A")]
    A = 0b110000,
    #[strum(serialize = "!D")]
    NotD = 0b001101,
    #[strum(serialize = "!A")]
    NotA = 0b110001,
    #[strum(serialize = "-D")]
    NegD = 0b001111,
    #[strum(serialize = "-A")]
    NegA = 0b110011,
    #[strum(serialize = "D+1")]
    IncD = 0b011111,
    #[strum(serialize = "A+1")]
    IncA = 0b110111,
    #[strum(serialize = "D-1")]
    DecD = 0b001110,
    #[strum(serialize = "A-1")]
    DecA = 0b110010,
    #[strum(serialize = "D+A")]
    Add = 0b000010,
    #[strum(serialize = "D-A")]
    SubDA = 0b010011,
    #[strum(serialize = "A-D")]
    SubAD = 0b000111,
    #[strum(serialize = "D&A")]
    And = 0b000000,
    #[strum(serialize = "D|A")]
    Or = 0b010101,
}

impl Comp {
    /// Resolve a computation field such as `D+M` into its operand source and
    /// computation. Every `M` is read as `A` with the a-bit set, so a field
    /// mixing `A` and `M` never matches.
    pub fn parse(field: &str) -> Option<(Src, Comp)> {
        if field.contains('M') {
            let field = field.replace('M', "A");
            field.parse::<Comp>().ok().map(|comp| (Src::M, comp))
        } else {
            field.parse::<Comp>().ok().map(|comp| (Src::A, comp))
        }
    }

    pub fn uses_a(self) -> bool {
        self.to_string().contains('A')
    }

    pub fn mnemonic(self, src: Src) -> String {
        match src {
            Src::M if self.uses_a() => self.to_string().replace('A', "M"),
            _ => self.to_string(),
        }
    }

    pub fn code(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn parse_selects_operand_source() {
    assert_eq!(Comp::parse("D+A"), Some((Src::A, Comp::Add)));
    assert_eq!(Comp::parse("D+M"), Some((Src::M, Comp::Add)));
    assert_eq!(Comp::parse("!M"), Some((Src::M, Comp::NotA)));
    assert_eq!(Comp::parse("-1"), Some((Src::A, Comp::NegOne)));
    assert_eq!(Comp::parse("0"), Some((Src::A, Comp::Zero)));
}

#[test]
fn parse_rejects_unknown_fields() {
    assert_eq!(Comp::parse("Q"), None);
    assert_eq!(Comp::parse(""), None);
    assert_eq!(Comp::parse("A+M"), None);
    assert_eq!(Comp::parse("M+D"), None);
    assert_eq!(Comp::parse("d+a"), None);
}

#[test]
fn mnemonics_round_trip_for_both_sources() {
    use strum::IntoEnumIterator;
    assert_eq!(Comp::iter().count(), 18);
    for comp in Comp::iter() {
        assert_eq!(Comp::parse(&comp.mnemonic(Src::A)), Some((Src::A, comp)));
        if comp.uses_a() {
            assert_eq!(Comp::parse(&comp.mnemonic(Src::M)), Some((Src::M, comp)));
        }
    }
}

#[test]
fn control_words_are_distinct_six_bit_values() {
    use strum::IntoEnumIterator;
    let mut codes: Vec<u16> = Comp::iter().map(Comp::code).collect();
    assert!(codes.iter().all(|c| *c < 0b1000000));
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 18);
}

#[test]
fn memory_source_only_renames_a_operands() {
    assert_eq!(Comp::Add.mnemonic(Src::M), "D+M");
    assert_eq!(Comp::D.mnemonic(Src::M), "D");
    assert!(!Comp::NegOne.uses_a());
}
