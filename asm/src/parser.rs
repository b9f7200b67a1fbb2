use arch::{
    alu::{Comp, Src},
    dest::Dest,
    inst::Inst,
    jump::Jump,
    symbol::{is_symbol, ADDRESS_MAX},
};

use crate::{error::Error, error::LineError, ident::Idents};

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone)]
pub struct Line {
    pub idx: usize,
    pub raw: String,
    pub code: String,
    pub comment: Option<String>,
    pub stmt: Option<Stmt>,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Self {
        let comment = raw
            .split_once("//")
            .map(|(_, comment)| comment.trim().to_string());
        let code = normalize(raw).unwrap_or_default();
        let stmt = Stmt::classify(&code);
        Line {
            idx,
            raw: raw.to_string(),
            code,
            comment,
            stmt,
        }
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn error(&self, error: Error) -> LineError {
        LineError {
            idx: self.idx,
            raw: self.raw.clone(),
            error,
        }
    }
}

/// Cut the line at `//` and drop every whitespace character.
/// Returns `None` when nothing is left.
pub fn normalize(raw: &str) -> Option<String> {
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

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `(name)`: binds `name` to the address of the next instruction.
    Label(String),
    /// Anything else occupies one instruction slot, even if it fails to encode.
    Code,
}

impl Stmt {
    pub fn classify(code: &str) -> Option<Stmt> {
        if code.is_empty() {
            return None;
        }
        if let Some(name) = code.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            if is_symbol(name) {
                return Some(Stmt::Label(name.to_string()));
            }
        }
        Some(Stmt::Code)
    }
}

// ----------------------------------------------------------------------------
// Operation

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    A(Imm),
    C {
        src: Src,
        comp: Comp,
        dest: Dest,
        jump: Jump,
    },
}

impl Code {
    pub fn parse(code: &str) -> Result<Code, Error> {
        if let Some(operand) = code.strip_prefix('@') {
            return Ok(Code::A(Imm::parse(operand)?));
        }

        // dest=comp;jump
        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (dest, rest),
            None => ("", code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, jump),
            None => (rest, ""),
        };

        let dest = Dest::parse(dest).ok_or_else(|| Error::UnresolvedDest(dest.to_string()))?;
        let (src, comp) = Comp::parse(comp).ok_or_else(|| Error::UnresolvedComp(comp.to_string()))?;
        let jump = Jump::parse(jump).ok_or_else(|| Error::UnresolvedJump(jump.to_string()))?;

        Ok(Code::C {
            src,
            comp,
            dest,
            jump,
        })
    }

    pub fn resolve(&self, idents: &mut Idents) -> Result<Inst, Error> {
        match self {
            Code::A(imm) => Ok(Inst::A(imm.resolve(idents)?)),
            Code::C {
                src,
                comp,
                dest,
                jump,
            } => Ok(Inst::C {
                src: *src,
                comp: *comp,
                dest: *dest,
                jump: *jump,
            }),
        }
    }
}

// ----------------------------------------------------------------------------
// Immediate

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm {
    Literal(u16),
    Ident(String),
}

impl Imm {
    /// A literal always wins over a symbol, so `@16` is the number even if
    /// something named `16` could exist.
    pub fn parse(s: &str) -> Result<Imm, Error> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return match s.parse::<i64>() {
                Ok(v) if (0..=ADDRESS_MAX as i64).contains(&v) => Ok(Imm::Literal(v as u16)),
                _ => Err(Error::AddressOutOfRange(s.to_string())),
            };
        }
        if is_symbol(s) {
            Ok(Imm::Ident(s.to_string()))
        } else {
            Err(Error::UndefinedReference(s.to_string()))
        }
    }

    pub fn resolve(&self, idents: &mut Idents) -> Result<u16, Error> {
        match self {
            Imm::Literal(v) => Ok(*v),
            Imm::Ident(name) => idents.get_or_alloc(name),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_strips_comments_and_whitespace() {
        assert_eq!(normalize("  D = D + A  // add"), Some("D=D+A".to_string()));
        assert_eq!(normalize("\t@ 2\r"), Some("@2".to_string()));
        assert_eq!(normalize("// only a comment"), None);
        assert_eq!(normalize("   \t "), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("0;JMP//x//y"), Some("0;JMP".to_string()));
    }

    #[test]
    fn classify() {
        assert_eq!(Stmt::classify(""), None);
        assert_eq!(Stmt::classify("(LOOP)"), Some(Stmt::Label("LOOP".into())));
        assert_eq!(Stmt::classify("(1LOOP)"), Some(Stmt::Code));
        assert_eq!(Stmt::classify("(LOOP"), Some(Stmt::Code));
        assert_eq!(Stmt::classify("@LOOP"), Some(Stmt::Code));
    }

    #[test]
    fn line_keeps_raw_text_and_comment() {
        let line = Line::new(3, "  (END) // stop here");
        assert_eq!(line.no(), 4);
        assert_eq!(line.code, "(END)");
        assert_eq!(line.comment.as_deref(), Some("stop here"));
        assert_eq!(line.stmt, Some(Stmt::Label("END".into())));
        assert_eq!(line.raw, "  (END) // stop here");
    }

    #[test]
    fn parse_address() {
        assert_eq!(Code::parse("@0").unwrap(), Code::A(Imm::Literal(0)));
        assert_eq!(Code::parse("@32767").unwrap(), Code::A(Imm::Literal(32767)));
        assert_eq!(Code::parse("@i").unwrap(), Code::A(Imm::Ident("i".into())));
        assert!(matches!(
            Code::parse("@32768"),
            Err(Error::AddressOutOfRange(_))
        ));
        assert!(matches!(Code::parse("@-1"), Err(Error::AddressOutOfRange(_))));
        assert!(matches!(
            Code::parse("@99999999999999999999"),
            Err(Error::AddressOutOfRange(_))
        ));
        assert!(matches!(Code::parse("@"), Err(Error::UndefinedReference(_))));
        assert!(matches!(
            Code::parse("@1abc"),
            Err(Error::UndefinedReference(_))
        ));
    }

    #[test]
    fn parse_compute_fields() {
        assert_eq!(
            Code::parse("AM=M-1;JNE").unwrap(),
            Code::C {
                src: Src::M,
                comp: Comp::DecA,
                dest: Dest::AM,
                jump: Jump::JNE,
            }
        );
        assert_eq!(
            Code::parse("0;JMP").unwrap(),
            Code::C {
                src: Src::A,
                comp: Comp::Zero,
                dest: Dest::Null,
                jump: Jump::JMP,
            }
        );
        assert_eq!(
            Code::parse("D").unwrap(),
            Code::C {
                src: Src::A,
                comp: Comp::D,
                dest: Dest::Null,
                jump: Jump::Null,
            }
        );
    }

    #[test]
    fn parse_compute_errors() {
        assert!(matches!(Code::parse("D=Q"), Err(Error::UnresolvedComp(f)) if f == "Q"));
        assert!(matches!(Code::parse("D;JXX"), Err(Error::UnresolvedJump(f)) if f == "JXX"));
        assert!(matches!(Code::parse("X=D"), Err(Error::UnresolvedDest(f)) if f == "X"));
        assert!(matches!(Code::parse("D=M;"), Ok(_)));
        assert!(matches!(Code::parse("M="), Err(Error::UnresolvedComp(f)) if f.is_empty()));
        assert!(matches!(Code::parse("D;JGT;JMP"), Err(Error::UnresolvedJump(_))));
    }
}
