//! Connection bootstrap for contacts database exports.
//!
//! # Invariants
//! - File connections are opened with `SQLITE_OPEN_READ_ONLY`.
//! - Returned connections have the `PHONEBOOK` collation registered.
//! - Returned connections expose the `view_data` source view.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::cmp::Ordering;
use std::path::Path;
use std::time::{Duration, Instant};

/// Flattened contact data view queried by the exporter.
pub const SOURCE_VIEW: &str = "view_data";

/// Android declares `view_data` columns with `COLLATE PHONEBOOK`, a collation
/// that only exists inside the provider process.
const PHONEBOOK_COLLATION: &str = "PHONEBOOK";

/// Opens a contacts database export read-only and prepares it for scanning.
///
/// # Side effects
/// - Emits `source_open` logging events with duration and status.
pub fn open_source_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=source_open module=db status=start mode=read_only");

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = match Connection::open_with_flags(path, flags) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=source_open module=db status=error mode=read_only duration_ms={} error_code=source_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match prepare_source_connection(&conn) {
        Ok(()) => {
            info!(
                "event=source_open module=db status=ok mode=read_only duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=source_open module=db status=error mode=read_only duration_ms={} error_code=source_prepare_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Registers collations and checks for the source view on any connection.
///
/// Exposed so callers holding an in-memory connection can reuse the same
/// preparation as file-backed sources.
pub fn prepare_source_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.create_collation(PHONEBOOK_COLLATION, |_, _| Ordering::Equal)?;
    ensure_source_view(conn)
}

fn ensure_source_view(conn: &Connection) -> DbResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type IN ('table', 'view') AND name = ?1
        );",
        [SOURCE_VIEW],
        |row| row.get(0),
    )?;

    if exists == 0 {
        return Err(DbError::MissingSourceView { name: SOURCE_VIEW });
    }
    Ok(())
}
