use arch::inst::Inst;
use std::slice;

use crate::{
    error::LineError,
    ident::Idents,
    label::Labels,
    parser::{Code, Line, Stmt},
};

/// One encoded instruction and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub idx: usize,
    pub pc: u16,
    pub inst: Inst,
}

pub struct Assembler {
    lines: Vec<Line>,
    idents: Idents,
}

impl Assembler {
    /// Split `source` into lines and run the label pass over them.
    pub fn new(source: &str) -> Result<Self, LineError> {
        let lines: Vec<Line> = source
            .lines()
            .enumerate()
            .map(|(idx, raw)| Line::new(idx, raw))
            .collect();
        let labels = Labels::collect(&lines)?;
        Ok(Assembler {
            lines,
            idents: Idents::new(labels),
        })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn idents(&self) -> &Idents {
        &self.idents
    }

    /// Second pass. Yields words in program order and stops after the first
    /// line that fails to encode.
    pub fn encode(&mut self) -> Encode<'_> {
        Encode {
            lines: self.lines.iter(),
            idents: &mut self.idents,
            pc: 0,
            halted: false,
        }
    }
}

pub struct Encode<'a> {
    lines: slice::Iter<'a, Line>,
    idents: &'a mut Idents,
    pc: u16,
    halted: bool,
}

impl Iterator for Encode<'_> {
    type Item = Result<Word, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let line = self.lines.find(|line| line.stmt == Some(Stmt::Code))?;
        let pc = self.pc;
        self.pc += 1;
        let word = Code::parse(&line.code)
            .and_then(|code| code.resolve(self.idents))
            .map(|inst| Word {
                idx: line.idx,
                pc,
                inst,
            })
            .map_err(|error| line.error(error));
        self.halted = word.is_err();
        Some(word)
    }
}

/// Assemble a whole program with a fresh symbol context.
pub fn assemble(source: &str) -> Result<Vec<Word>, LineError> {
    let mut asm = Assembler::new(source)?;
    let words = asm.encode().collect::<Result<Vec<_>, _>>()?;
    Ok(words)
}

/// Assemble and render each word as a 16-character binary string.
pub fn assemble_to_strings(source: &str) -> Result<Vec<String>, LineError> {
    Ok(assemble(source)?
        .into_iter()
        .map(|word| word.inst.to_bin_string())
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;

    #[test]
    fn encode_stops_at_first_error() {
        let mut asm = Assembler::new("@1\nD=Q\n@2").unwrap();
        let mut words = asm.encode();
        assert_eq!(words.next().unwrap().unwrap().inst, Inst::A(1));
        let err = words.next().unwrap().unwrap_err();
        assert_eq!(err.idx, 1);
        assert_eq!(err.raw, "D=Q");
        assert!(matches!(err.error, Error::UnresolvedComp(_)));
        assert!(words.next().is_none());
    }

    #[test]
    fn words_carry_line_and_address() {
        let words = assemble("// c\n(X)\n@X\n\n  0;JMP").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!((words[0].idx, words[0].pc), (2, 0));
        assert_eq!((words[1].idx, words[1].pc), (4, 1));
        assert_eq!(words[0].inst, Inst::A(0));
    }
}
