use color_print::cprintln;
use sicxe::directive::Directive;
use thiserror::Error;

use crate::line::Source;
use crate::msg::Msg;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse `{operand}` as {radix} for {directive}")]
    ParseNumber {
        line: usize,
        directive: Directive,
        operand: String,
        radix: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Location counter overflow")]
    AddressOverflow { line: usize },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    /// Source line (0-based) the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::ParseNumber { line, .. } | Error::AddressOverflow { line } => Some(*line),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, src: &Source) {
        match self.line() {
            Some(idx) => Msg::Error(self.to_string()).diag(src, idx),
            None => {
                cprintln!("<red,bold>error</>: {}", self);
                cprintln!("     <blue>--></> <underline>{}</>", src.path);
            }
        }
    }
}

/// An error tagged with the source unit it aborted.
#[derive(Error, Debug)]
#[error("{unit}: {error}")]
pub struct UnitError {
    pub unit: String,
    #[source]
    pub error: Error,
}

impl UnitError {
    pub fn new(unit: &str, error: Error) -> Self {
        UnitError {
            unit: unit.to_string(),
            error,
        }
    }
}
