use crate::{
    alu::{Comp, Src},
    dest::Dest,
    jump::Jump,
    symbol::ADDRESS_MAX,
};

use color_print::cformat;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`: load a 15-bit constant into A.
    A(u16),
    /// `dest=comp;jump`
    C {
        src: Src,
        comp: Comp,
        dest: Dest,
        jump: Jump,
    },
}

impl Inst {
    pub fn to_bin(self) -> u16 {
        match self {
            Inst::A(value) => {
                debug_assert!(value <= ADDRESS_MAX, "address out of 15 bits: {}", value);
                value
            }
            Inst::C {
                src,
                comp,
                dest,
                jump,
            } => 0b111 << 13 | src.bit() << 12 | comp.code() << 6 | dest.code() << 3 | jump.code(),
        }
    }

    pub fn to_bin_string(self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<red>@</><yellow>{}</>", value),
            Inst::C {
                src,
                comp,
                dest,
                jump,
            } => {
                let dest = match dest {
                    Dest::Null => "".to_string(),
                    _ => cformat!("<blue>{}</>=", dest),
                };
                let jump = match jump {
                    Jump::Null => "".to_string(),
                    _ => cformat!(";<red>{}</>", jump),
                };
                cformat!("{}<green>{}</>{}", dest, comp.mnemonic(*src), jump)
            }
        }
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::A(value) => write!(f, "@{}", value),
            Inst::C {
                src,
                comp,
                dest,
                jump,
            } => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp.mnemonic(*src))?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn c(src: Src, comp: Comp, dest: Dest, jump: Jump) -> Inst {
        Inst::C {
            src,
            comp,
            dest,
            jump,
        }
    }

    #[test]
    fn address_instruction() {
        assert_eq!(Inst::A(2).to_bin_string(), "0000000000000010");
        assert_eq!(Inst::A(ADDRESS_MAX).to_bin_string(), "0111111111111111");
        assert_eq!(Inst::A(0).to_bin(), 0);
    }

    #[test]
    fn compute_instruction() {
        let d_eq_a = c(Src::A, Comp::A, Dest::D, Jump::Null);
        assert_eq!(d_eq_a.to_bin_string(), "1110110000010000");

        let m_eq_m_plus_1 = c(Src::M, Comp::IncA, Dest::M, Jump::Null);
        assert_eq!(m_eq_m_plus_1.to_bin_string(), "1111110111001000");

        let jump = c(Src::A, Comp::Zero, Dest::Null, Jump::JMP);
        assert_eq!(jump.to_bin_string(), "1110101010000111");

        let all = c(Src::A, Comp::And, Dest::AMD, Jump::JLE);
        assert_eq!(all.to_bin_string(), "1110000000111110");
    }

    #[test]
    fn display() {
        assert_eq!(Inst::A(17).to_string(), "@17");
        assert_eq!(c(Src::M, Comp::Add, Dest::D, Jump::Null).to_string(), "D=D+M");
        assert_eq!(c(Src::A, Comp::D, Dest::Null, Jump::JGT).to_string(), "D;JGT");
        assert_eq!(c(Src::M, Comp::DecA, Dest::AM, Jump::JNE).to_string(), "AM=M-1;JNE");
    }
}
