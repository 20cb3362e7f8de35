//! Core conversion logic for contacts_vcf.
//! Turns an Android contacts database export into a vCard 2.1 file.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod vcard;

pub use config::{ExportConfig, MissingNamePolicy};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget};
pub use model::attribute::{
    AddressInfo, AttributeKind, AttributeValue, EmailInfo, EventInfo, NameInfo, NoteInfo,
    PhoneInfo,
};
pub use model::contact::{ContactAggregate, ContactBook};
pub use model::row::{AttributeRow, PayloadField};
pub use repo::row_repo::{AttributeRowSource, RepoError, RepoResult, SqliteAttributeRowSource};
pub use service::export_service::{
    run_export, ExportError, ExportResult, ExportService, ExportSummary,
};
pub use service::loader::{load_contacts, LoadError, LoadOutcome, LoadResult, LoadStats};
pub use vcard::card::{check_names, render_card, render_cards, write_cards};
pub use vcard::encoding::{decode_escaped, encode_escaped, DecodeError};
pub use vcard::{FormatError, FormatResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
