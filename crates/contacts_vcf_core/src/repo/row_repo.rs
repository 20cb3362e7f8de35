//! Attribute row source contracts and SQLite implementation.
//!
//! # Responsibility
//! - Fetch the complete attribute row set in source iteration order.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The scan is unfiltered and never rejects a row; provenance filtering
//!   and key checks happen in the loader.

use crate::db::{DbError, SOURCE_VIEW};
use crate::model::row::{AttributeRow, PayloadField, PAYLOAD_COLUMNS};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ROW_COLUMNS: &str = "account_type,
    lookup,
    mimetype,
    data1,
    data2,
    data3,
    data4,
    data5,
    data6,
    data7,
    data8,
    data9,
    data10";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for attribute row fetches.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Source of attribute rows for one export run.
pub trait AttributeRowSource {
    fn fetch_rows(&self) -> RepoResult<Vec<AttributeRow>>;
}

/// In-memory rows, mainly for callers that already hold the data.
impl AttributeRowSource for Vec<AttributeRow> {
    fn fetch_rows(&self) -> RepoResult<Vec<AttributeRow>> {
        Ok(self.clone())
    }
}

/// SQLite-backed row source reading `view_data`.
pub struct SqliteAttributeRowSource<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAttributeRowSource<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AttributeRowSource for SqliteAttributeRowSource<'_> {
    fn fetch_rows(&self) -> RepoResult<Vec<AttributeRow>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {ROW_COLUMNS} FROM {SOURCE_VIEW};"))?;
        let mut rows = stmt.query([])?;
        let mut fetched = Vec::new();

        while let Some(row) = rows.next()? {
            fetched.push(parse_attribute_row(row)?);
        }

        Ok(fetched)
    }
}

fn parse_attribute_row(row: &Row<'_>) -> RepoResult<AttributeRow> {
    let mut data: [PayloadField; PAYLOAD_COLUMNS] = Default::default();
    for (index, slot) in data.iter_mut().enumerate() {
        *slot = payload_field(row.get_ref(format!("data{}", index + 1).as_str())?);
    }

    Ok(AttributeRow {
        account_type: row.get("account_type")?,
        lookup: row.get("lookup")?,
        mimetype: row.get("mimetype")?,
        data,
    })
}

fn payload_field(value: ValueRef<'_>) -> PayloadField {
    match value {
        ValueRef::Null => PayloadField::Null,
        ValueRef::Integer(value) => PayloadField::Integer(value),
        ValueRef::Real(value) => PayloadField::Real(value),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            PayloadField::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
