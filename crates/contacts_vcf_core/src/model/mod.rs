//! Contact domain model: raw rows, typed attributes and per-contact aggregates.
//!
//! # Responsibility
//! - Define the shapes flowing through load and render stages.
//! - Keep type-code tables isolated from rendering.
//!
//! # Invariants
//! - Every aggregate is identified by its stable owner identifier.
//! - Model values are never mutated after the load stage ends.

pub mod attribute;
pub mod contact;
pub mod row;
pub mod type_code;
