//! SQLite source access for exported contacts databases.
//!
//! # Responsibility
//! - Open device database exports read-only.
//! - Register collations the Android schema depends on.
//! - Verify the source view exists before any scan.
//!
//! # Invariants
//! - The source database is never written.
//! - Connections are dropped right after the single full scan.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_source_db, prepare_source_connection, SOURCE_VIEW};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    MissingSourceView { name: &'static str },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingSourceView { name } => {
                write!(f, "source database has no table or view named `{name}`")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingSourceView { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
