//! Error types for scale and chord computation.

use thiserror::Error;

/// Failures raised by scale and chord computation.
///
/// All variants are deterministic input-validity errors, never transient:
/// callers are expected to report them, not retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The scale type is not one of the supported spellings.
    #[error("unsupported scale type: {0:?}")]
    UnsupportedScale(String),

    /// A note does not begin with a letter A-G.
    #[error("invalid note: {0:?}")]
    InvalidNote(String),

    /// A note cannot be located in either chromatic sequence, nor resolved
    /// to a canonical spelling that can.
    #[error("unknown note: {0:?}")]
    UnknownNote(String),

    /// No registered enharmonic equivalent matches the required letter.
    #[error("no enharmonic equivalent of {note:?} starting with {letter:?}")]
    EnharmonicNotFound {
        /// The note whose alternates were searched.
        note: String,
        /// The letter the equivalent was required to start with.
        letter: char,
    },
}
