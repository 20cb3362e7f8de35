//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the attribute row source contract used by the export service.
//! - Isolate SQLite query details from load and render stages.
//!
//! # Invariants
//! - Repository reads return rows in source iteration order.

pub mod row_repo;
