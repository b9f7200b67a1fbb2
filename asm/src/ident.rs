use arch::symbol::{predefined, ADDRESS_MAX, PREDEFINED, VARIABLE_BASE};
use indexmap::IndexMap;
use serde::Serialize;

use crate::{error::Error, label::Labels};

/// Symbol context of one assembler run: the fixed symbols, the labels from
/// the first pass, and the variables allocated while encoding.
#[derive(Debug, Clone)]
pub struct Idents {
    labels: Labels,
    variables: IndexMap<String, u16>,
    next: u16,
}

impl Idents {
    pub fn new(labels: Labels) -> Self {
        Idents {
            labels,
            variables: IndexMap::new(),
            next: VARIABLE_BASE,
        }
    }

    /// Predefined symbols shadow labels, labels shadow variables.
    pub fn get_val(&self, name: &str) -> Option<u16> {
        predefined(name)
            .or_else(|| self.labels.get_val(name))
            .or_else(|| self.variables.get(name).copied())
    }

    /// Resolve `name`, allocating it as the next variable if nothing is bound.
    pub fn get_or_alloc(&mut self, name: &str) -> Result<u16, Error> {
        if let Some(val) = self.get_val(name) {
            return Ok(val);
        }
        if self.next > ADDRESS_MAX {
            return Err(Error::AddressOutOfRange(name.to_string()));
        }
        let val = self.next;
        self.variables.insert(name.to_string(), val);
        self.next += 1;
        Ok(val)
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, u16)> {
        self.variables.iter().map(|(name, val)| (name.as_str(), *val))
    }

    pub fn symbols(&self) -> SymbolTable {
        SymbolTable {
            predefined: PREDEFINED.iter().map(|(n, v)| (n.to_string(), *v)).collect(),
            labels: self.labels.iter().map(|(n, v)| (n.to_string(), v)).collect(),
            variables: self.variables.clone(),
        }
    }
}

/// Snapshot of every bound symbol, in binding order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    pub predefined: IndexMap<String, u16>,
    pub labels: IndexMap<String, u16>,
    pub variables: IndexMap<String, u16>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::Line;

    fn idents(src: &str) -> Idents {
        let lines: Vec<Line> = src
            .lines()
            .enumerate()
            .map(|(idx, raw)| Line::new(idx, raw))
            .collect();
        Idents::new(Labels::collect(&lines).unwrap())
    }

    #[test]
    fn resolution_order() {
        let mut idents = idents("@0\n(LOOP)\n@1");
        assert_eq!(idents.get_val("KBD"), Some(24576));
        assert_eq!(idents.get_val("LOOP"), Some(1));
        assert_eq!(idents.get_val("x"), None);
        assert_eq!(idents.get_or_alloc("LOOP").unwrap(), 1);
        assert_eq!(idents.get_or_alloc("R3").unwrap(), 3);
        assert_eq!(idents.variables().count(), 0);
    }

    #[test]
    fn variables_are_allocated_in_first_use_order() {
        let mut idents = idents("");
        assert_eq!(idents.get_or_alloc("i").unwrap(), 16);
        assert_eq!(idents.get_or_alloc("sum").unwrap(), 17);
        assert_eq!(idents.get_or_alloc("i").unwrap(), 16);
        assert_eq!(idents.get_or_alloc("SPEED").unwrap(), 18);
        assert_eq!(idents.get_val("sum"), Some(17));
        let vars: Vec<_> = idents.variables().collect();
        assert_eq!(vars, vec![("i", 16), ("sum", 17), ("SPEED", 18)]);
    }

    #[test]
    fn allocation_stops_at_the_address_limit() {
        let mut idents = idents("");
        idents.next = ADDRESS_MAX;
        assert_eq!(idents.get_or_alloc("last").unwrap(), ADDRESS_MAX);
        assert!(matches!(
            idents.get_or_alloc("overflow"),
            Err(Error::AddressOutOfRange(_))
        ));
    }

    #[test]
    fn symbol_table_snapshot() {
        let mut idents = idents("(START)\n@x");
        idents.get_or_alloc("x").unwrap();
        let table = idents.symbols();
        assert_eq!(table.predefined.len(), 23);
        assert_eq!(table.labels.get("START"), Some(&0));
        assert_eq!(table.variables.get("x"), Some(&16));
    }
}
