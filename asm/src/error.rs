use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Usage: {0}")]
    Usage(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to write symbol table: {0}")]
    SymbolDump(String, #[source] serde_yaml::Error),

    #[error("Undefined reference: `{0}`")]
    UndefinedReference(String),

    #[error("Unresolved computation: `{0}`")]
    UnresolvedComp(String),

    #[error("Unresolved jump: `{0}`")]
    UnresolvedJump(String),

    #[error("Unresolved destination: `{0}`")]
    UnresolvedDest(String),

    #[error("Address out of range: `{0}` does not fit in 15 bits")]
    AddressOutOfRange(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),
}

impl Error {
    /// Process exit code reported for this error.
    pub fn code(&self) -> i32 {
        match self {
            Error::Usage(_) => -1,
            Error::FileOpen(..) => -2,
            Error::FileCreate(..) | Error::FileWrite(..) | Error::SymbolDump(..) => -3,
            Error::UndefinedReference(_) => -4,
            Error::UnresolvedComp(_) => -5,
            Error::UnresolvedJump(_) => -6,
            Error::AddressOutOfRange(_) => -7,
            Error::RedefinedLabel(_) => -8,
            Error::UnresolvedDest(_) => -9,
        }
    }
}

/// An error tied to one source line. `raw` is the line as written, before
/// comment stripping.
#[derive(Error, Debug)]
#[error("line {}: {}", .idx + 1, .error)]
pub struct LineError {
    pub idx: usize,
    pub raw: String,
    pub error: Error,
}

impl LineError {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        cprintln!("<red,bold>error</>: {}", self.error);

        // idx is 0-based, display as 1-based
        let line_num = self.idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, self.raw);
        cprintln!("      <blue>|</>");
    }
}

#[test]
fn exit_codes() {
    let io = || std::io::Error::from(std::io::ErrorKind::NotFound);
    assert_eq!(Error::Usage("".into()).code(), -1);
    assert_eq!(Error::FileOpen("a.asm".into(), io()).code(), -2);
    assert_eq!(Error::FileCreate("a.hack".into(), io()).code(), -3);
    assert_eq!(Error::UndefinedReference("1x".into()).code(), -4);
    assert_eq!(Error::UnresolvedComp("Q".into()).code(), -5);
    assert_eq!(Error::UnresolvedJump("JXX".into()).code(), -6);
}
