pub mod assembler;
pub mod error;
pub mod ident;
pub mod label;
pub mod parser;
pub mod util;

pub use assembler::{assemble, assemble_to_strings, Assembler, Word};
pub use error::{Error, LineError};
