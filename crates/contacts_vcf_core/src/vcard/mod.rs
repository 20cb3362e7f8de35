//! vCard 2.1 rendering.
//!
//! # Responsibility
//! - Assemble card records from contact aggregates.
//! - Escape free-text values for `ENCODING=QUOTED-PRINTABLE` properties.
//!
//! # Invariants
//! - Output is UTF-8 without byte-order mark.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod card;
pub mod encoding;

pub type FormatResult<T> = Result<T, FormatError>;

/// Card rendering error.
#[derive(Debug)]
pub enum FormatError {
    /// Contact has no name row and the policy forbids empty names.
    MissingName { lookup: String },
    /// Writing rendered cards to the sink failed.
    Io(std::io::Error),
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName { lookup } => write!(f, "contact `{lookup}` has no name"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingName { .. } => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for FormatError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
