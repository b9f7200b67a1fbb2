use arch::symbol::{predefined, ADDRESS_MAX, ROM_SIZE};
use indexmap::IndexMap;

use crate::{
    error::{Error, LineError},
    parser::{Line, Stmt},
};

/// Label name -> instruction address.
/// Built once by [`Labels::collect`] and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Labels(IndexMap<String, u16>);

impl Labels {
    /// First pass: bind every `(name)` to the address of the instruction that
    /// follows it. Empty lines and label lines do not take an address.
    pub fn collect(lines: &[Line]) -> Result<Labels, LineError> {
        let mut labels = IndexMap::new();
        let mut pc: usize = 0;
        for line in lines {
            match &line.stmt {
                None => {}
                Some(Stmt::Label(name)) => {
                    if predefined(name).is_some() || labels.contains_key(name) {
                        return Err(line.error(Error::RedefinedLabel(name.clone())));
                    }
                    // A label after the last ROM slot has no 15-bit address.
                    if pc > ADDRESS_MAX as usize {
                        return Err(line.error(Error::AddressOutOfRange(name.clone())));
                    }
                    labels.insert(name.clone(), pc as u16);
                }
                Some(Stmt::Code) => {
                    if pc >= ROM_SIZE {
                        return Err(line.error(Error::AddressOutOfRange(line.code.clone())));
                    }
                    pc += 1;
                }
            }
        }
        Ok(Labels(labels))
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.0.iter().map(|(name, pc)| (name.as_str(), *pc))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
