//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
///
/// Either variant aborts the whole scan; no partial list of specifiers is returned.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Format string ends right after a `%`
    #[error("format string ends after '%' at offset {offset}")]
    #[diagnostic(
        code(fmtspec::malformed),
        help("escape a literal percent sign as '%%'")
    )]
    Malformed {
        /// Byte offset of the dangling `%`
        offset: usize,
    },

    /// Numeric literal or positional index is out of range
    #[error("numeric value at offset {offset} is out of range")]
    #[diagnostic(
        code(fmtspec::overflow),
        help("widths and precisions must fit in 32 bits and argument positions must be at most 127")
    )]
    Overflow {
        /// Byte offset of the first digit of the offending number
        offset: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
