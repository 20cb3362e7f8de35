//! Export use-case service.
//!
//! # Responsibility
//! - Run fetch, load, render and write as one sequential batch.
//! - Report counters for the finished run.
//!
//! # Invariants
//! - The output file is replaced in full; nothing is appended.
//! - Nothing is written when loading or rendering fails.
//! - Service layer stays storage-agnostic; SQLite is only touched by
//!   [`run_export`].

use crate::config::ExportConfig;
use crate::db::open_source_db;
use crate::repo::row_repo::{AttributeRowSource, RepoError, SqliteAttributeRowSource};
use crate::config::MissingNamePolicy;
use crate::service::loader::{load_contacts, LoadError, LoadOutcome, LoadStats};
use crate::vcard::card::{check_names, render_cards, write_cards};
use crate::vcard::FormatError;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type ExportResult<T> = Result<T, ExportError>;

/// Failure of an export run. Every variant is fatal for the run.
#[derive(Debug)]
pub enum ExportError {
    Repo(RepoError),
    Load(LoadError),
    Format(FormatError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Load(err) => write!(f, "{err}"),
            Self::Format(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Load(err) => Some(err),
            Self::Format(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for ExportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<LoadError> for ExportError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

impl From<FormatError> for ExportError {
    fn from(value: FormatError) -> Self {
        Self::Format(value)
    }
}

/// Counters describing a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub stats: LoadStats,
    pub bytes_written: usize,
    pub output_path: PathBuf,
}

/// Use-case service converting one row source into a card file.
pub struct ExportService<'cfg, S: AttributeRowSource> {
    source: S,
    config: &'cfg ExportConfig,
}

impl<'cfg, S: AttributeRowSource> ExportService<'cfg, S> {
    pub fn new(source: S, config: &'cfg ExportConfig) -> Self {
        Self { source, config }
    }

    /// Fetches and groups all accepted rows.
    pub fn load(&self) -> ExportResult<LoadOutcome> {
        let rows = self.source.fetch_rows()?;
        let outcome = load_contacts(&rows, self.config)?;
        info!(
            "event=contacts_load module=service status=ok rows={} skipped_provenance={} ignored_mimetype={} contacts={}",
            outcome.stats.total_rows,
            outcome.stats.skipped_provenance,
            outcome.stats.ignored_mimetype,
            outcome.stats.contacts
        );
        Ok(outcome)
    }

    /// Renders all accepted contacts without touching the file system.
    pub fn render(&self) -> ExportResult<(String, LoadStats)> {
        let outcome = self.load()?;
        let text = render_cards(&outcome.book, self.config.missing_name)?;
        Ok((text, outcome.stats))
    }

    /// Renders all accepted contacts and overwrites the configured output.
    pub fn export(&self) -> ExportResult<ExportSummary> {
        let outcome = self.load()?;
        write_output(&self.config.output_path, &outcome, self.config.missing_name)
    }
}

/// Opens the configured SQLite export and runs a full conversion.
///
/// The source connection is closed before the output file is written.
pub fn run_export(config: &ExportConfig) -> ExportResult<ExportSummary> {
    let outcome = load_from_sqlite(config)?;
    write_output(&config.output_path, &outcome, config.missing_name)
}

fn load_from_sqlite(config: &ExportConfig) -> ExportResult<LoadOutcome> {
    let conn = open_source_db(&config.input_path).map_err(RepoError::from)?;
    let service = ExportService::new(SqliteAttributeRowSource::new(&conn), config);
    service.load()
}

/// Replaces `path` with the rendered cards of `outcome`.
///
/// Names are checked before the file is created, so a strict-policy failure
/// leaves any previous output untouched.
///
/// # Side effects
/// - Emits `export_write` logging events with duration and status.
fn write_output(
    path: &Path,
    outcome: &LoadOutcome,
    policy: MissingNamePolicy,
) -> ExportResult<ExportSummary> {
    check_names(&outcome.book, policy)?;

    let started_at = Instant::now();
    let written = File::create(path)
        .map_err(FormatError::from)
        .and_then(|file| write_cards(&outcome.book, policy, &mut BufWriter::new(file)));
    let bytes_written = match written {
        Ok(bytes) => bytes,
        Err(FormatError::Io(source)) => {
            error!(
                "event=export_write module=service status=error duration_ms={} error_code=output_write_failed error={}",
                started_at.elapsed().as_millis(),
                source
            );
            return Err(ExportError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
        Err(err) => return Err(err.into()),
    };
    info!(
        "event=export_write module=service status=ok duration_ms={} bytes={} contacts={}",
        started_at.elapsed().as_millis(),
        bytes_written,
        outcome.stats.contacts
    );

    Ok(ExportSummary {
        stats: outcome.stats,
        bytes_written,
        output_path: path.to_path_buf(),
    })
}
