//! Record loader: groups attribute rows into per-contact aggregates.
//!
//! # Invariants
//! - Rows outside the accepted provenance set have no side effect, whatever
//!   their other columns hold.
//! - Accepted rows create their owner's aggregate even when the mimetype is
//!   not recognized or `NULL`.
//! - Ignored rows are counted, never logged one by one.
//! - Aggregates are returned in first-seen owner order.

use crate::config::ExportConfig;
use crate::model::attribute::AttributeValue;
use crate::model::contact::ContactBook;
use crate::model::row::AttributeRow;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LoadResult<T> = Result<T, LoadError>;

/// Accepted row that cannot be grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Accepted row without owner identifier; `row_index` is zero-based.
    MissingLookup { row_index: usize },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLookup { row_index } => {
                write!(f, "accepted source row {row_index} has no lookup key")
            }
        }
    }
}

impl Error for LoadError {}

/// Row counters collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub total_rows: usize,
    pub skipped_provenance: usize,
    pub ignored_mimetype: usize,
    pub contacts: usize,
}

impl LoadStats {
    /// Rows that produced a typed attribute value.
    pub fn applied_rows(&self) -> usize {
        self.total_rows - self.skipped_provenance - self.ignored_mimetype
    }
}

/// Loader result: the contact book plus counters for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub book: ContactBook,
    pub stats: LoadStats,
}

/// Groups `rows` by owner identifier, keeping only accepted provenance.
///
/// # Errors
/// - `LoadError::MissingLookup` when an accepted row has a `NULL` lookup.
pub fn load_contacts<'a, I>(rows: I, config: &ExportConfig) -> LoadResult<LoadOutcome>
where
    I: IntoIterator<Item = &'a AttributeRow>,
{
    let mut book = ContactBook::new();
    let mut stats = LoadStats::default();

    for (row_index, row) in rows.into_iter().enumerate() {
        stats.total_rows += 1;
        if !config.accepts(row.account_type.as_deref()) {
            stats.skipped_provenance += 1;
            continue;
        }

        let lookup = row
            .lookup
            .as_deref()
            .ok_or(LoadError::MissingLookup { row_index })?;
        let contact = book.entry(lookup);
        match AttributeValue::from_row(row) {
            Some(value) => contact.apply(value),
            None => stats.ignored_mimetype += 1,
        }
    }

    stats.contacts = book.len();
    Ok(LoadOutcome { book, stats })
}

#[cfg(test)]
mod tests {
    use super::{load_contacts, LoadError};
    use crate::config::{ExportConfig, DEFAULT_ACCOUNT_TYPE};
    use crate::model::attribute::{MIMETYPE_NAME, MIMETYPE_NOTE, MIMETYPE_PHONE};
    use crate::model::row::AttributeRow;

    #[test]
    fn stats_partition_every_row() {
        let rows = vec![
            AttributeRow::new(Some(DEFAULT_ACCOUNT_TYPE), "a", MIMETYPE_PHONE).with_text(1, "1"),
            AttributeRow::new(Some("other"), "b", MIMETYPE_PHONE).with_text(1, "2"),
            AttributeRow::new(Some(DEFAULT_ACCOUNT_TYPE), "c", "vnd.android.cursor.item/photo"),
            AttributeRow::new(Some(DEFAULT_ACCOUNT_TYPE), "a", MIMETYPE_NOTE).with_text(1, "n"),
        ];

        let outcome = load_contacts(&rows, &ExportConfig::default()).unwrap();

        assert_eq!(outcome.stats.total_rows, 4);
        assert_eq!(outcome.stats.skipped_provenance, 1);
        assert_eq!(outcome.stats.ignored_mimetype, 1);
        assert_eq!(outcome.stats.applied_rows(), 2);
        assert_eq!(outcome.stats.contacts, 2);
        assert!(outcome.book.get("c").is_some());
        assert!(outcome.book.get("b").is_none());
    }

    #[test]
    fn foreign_row_without_lookup_is_skipped() {
        let rows = vec![
            AttributeRow::new(Some("com.google"), "", MIMETYPE_NAME).without_lookup(),
            AttributeRow::new(Some(DEFAULT_ACCOUNT_TYPE), "a", MIMETYPE_NAME).with_text(1, "A"),
        ];

        let outcome = load_contacts(&rows, &ExportConfig::default()).unwrap();

        assert_eq!(outcome.stats.skipped_provenance, 1);
        assert_eq!(outcome.book.len(), 1);
    }

    #[test]
    fn accepted_row_without_lookup_is_rejected() {
        let rows = vec![
            AttributeRow::new(Some(DEFAULT_ACCOUNT_TYPE), "a", MIMETYPE_NAME),
            AttributeRow::new(Some(DEFAULT_ACCOUNT_TYPE), "", MIMETYPE_PHONE).without_lookup(),
        ];

        let err = load_contacts(&rows, &ExportConfig::default()).unwrap_err();

        assert_eq!(err, LoadError::MissingLookup { row_index: 1 });
    }

    #[test]
    fn accepted_row_without_mimetype_is_counted_as_ignored() {
        let mut row = AttributeRow::new(Some(DEFAULT_ACCOUNT_TYPE), "a", MIMETYPE_NAME);
        row.mimetype = None;

        let outcome = load_contacts(&[row], &ExportConfig::default()).unwrap();

        assert_eq!(outcome.stats.ignored_mimetype, 1);
        assert!(outcome.book.get("a").is_some());
    }
}
