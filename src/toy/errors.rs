use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur within the toy machine and its console front end.
#[derive(Error, Debug)]
pub enum ToyError {
    /// Text that is not a hex word where one was expected.
    #[error("malformed value `{0}`")]
    MalformedInput(String),

    /// A well-formed number that does not fit where it is used.
    #[error("value `{value}` out of range (max {max:X})")]
    OutOfRange { value: String, max: u16 },

    /// Memory access (indirect load/store or fetch) outside 00..FF.
    #[error("illegal address {0:04X}")]
    IllegalAddress(u16),

    /// Debugger command given without its operand.
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("no breakpoint number {0}")]
    InvalidBreakpoint(usize),

    #[error("breakpoint table is full")]
    BreakpointTableFull,

    /// Program image or input file line that cannot be parsed.
    #[error("line {line}: {msg}")]
    Load { line: usize, msg: String },

    #[error("can't open `{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console input ended while the machine was waiting for a value.
    #[error("console input closed while waiting for a value")]
    InputClosed,
}
