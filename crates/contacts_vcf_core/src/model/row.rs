//! Raw attribute row model.
//!
//! # Responsibility
//! - Mirror one row of the exported `view_data` view without interpreting it.
//! - Provide lenient text/integer accessors over generic payload columns.
//!
//! # Invariants
//! - Rows are immutable after being fetched from the source.
//! - Payload accessors never fail; absent or mistyped values read as `None`.

use serde::{Deserialize, Serialize};

/// Number of generic payload columns (`data1`..`data10`).
pub const PAYLOAD_COLUMNS: usize = 10;

/// One generic payload cell as stored by the contacts provider.
///
/// Android declares payload columns without a strict type, so the same
/// logical field can arrive as integer or as numeric text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadField {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl PayloadField {
    /// Returns the cell as text, or `None` for SQL `NULL`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Integer(value) => Some(value.to_string()),
            Self::Real(value) => Some(value.to_string()),
            Self::Text(value) => Some(value.clone()),
        }
    }

    /// Returns the cell as an integer type code.
    ///
    /// Numeric text is accepted after trimming; anything else is `None`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
            Self::Null | Self::Real(_) => None,
        }
    }
}

/// One typed fact about a contact, as exported by the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRow {
    /// Provenance tag (`account_type`). `NULL` for device-local contacts.
    pub account_type: Option<String>,
    /// Owner identifier (`lookup`) shared by all rows of one contact.
    /// `NULL` is kept as `None` so foreign rows never fail the fetch.
    pub lookup: Option<String>,
    /// Type discriminator (`mimetype`).
    pub mimetype: Option<String>,
    /// Payload cells `data1`..`data10`, zero-based.
    pub data: [PayloadField; PAYLOAD_COLUMNS],
}

impl AttributeRow {
    /// Creates a row with all payload cells set to `NULL`.
    pub fn new(
        account_type: Option<impl Into<String>>,
        lookup: impl Into<String>,
        mimetype: impl Into<String>,
    ) -> Self {
        Self {
            account_type: account_type.map(Into::into),
            lookup: Some(lookup.into()),
            mimetype: Some(mimetype.into()),
            data: Default::default(),
        }
    }

    /// Clears the owner identifier, as exported for orphaned rows.
    pub fn without_lookup(mut self) -> Self {
        self.lookup = None;
        self
    }

    /// Sets payload column `dataN` (one-based, matching the column name).
    ///
    /// Out-of-range columns are ignored.
    pub fn with_data(mut self, column: usize, value: PayloadField) -> Self {
        if let Some(slot) = column
            .checked_sub(1)
            .and_then(|index| self.data.get_mut(index))
        {
            *slot = value;
        }
        self
    }

    /// Shorthand for [`AttributeRow::with_data`] with a text cell.
    pub fn with_text(self, column: usize, value: impl Into<String>) -> Self {
        self.with_data(column, PayloadField::Text(value.into()))
    }

    /// Shorthand for [`AttributeRow::with_data`] with an integer cell.
    pub fn with_int(self, column: usize, value: i64) -> Self {
        self.with_data(column, PayloadField::Integer(value))
    }

    /// Reads `dataN` as text; `NULL` and out-of-range columns are `None`.
    pub fn text(&self, column: usize) -> Option<String> {
        self.cell(column).and_then(PayloadField::as_text)
    }

    /// Reads `dataN` as text, defaulting to the empty string.
    pub fn text_or_empty(&self, column: usize) -> String {
        self.text(column).unwrap_or_default()
    }

    /// Reads `dataN` as an integer type code.
    pub fn int(&self, column: usize) -> Option<i64> {
        self.cell(column).and_then(PayloadField::as_int)
    }

    fn cell(&self, column: usize) -> Option<&PayloadField> {
        column.checked_sub(1).and_then(|index| self.data.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeRow, PayloadField};

    #[test]
    fn type_codes_parse_from_integer_or_numeric_text() {
        let row = AttributeRow::new(Some("acct"), "L1", "m")
            .with_int(2, 3)
            .with_text(3, " 7 ")
            .with_text(4, "home");

        assert_eq!(row.int(2), Some(3));
        assert_eq!(row.int(3), Some(7));
        assert_eq!(row.int(4), None);
        assert_eq!(row.int(5), None);
    }

    #[test]
    fn out_of_range_columns_read_as_missing() {
        let row = AttributeRow::new(None::<String>, "L1", "m").with_text(11, "ignored");

        assert_eq!(row.text(0), None);
        assert_eq!(row.text(11), None);
        assert_eq!(row.text_or_empty(11), "");
        assert!(row.data.iter().all(|cell| *cell == PayloadField::Null));
    }
}
