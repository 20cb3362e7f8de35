//! Core use-case services.
//!
//! # Responsibility
//! - Group attribute rows into contacts (`loader`).
//! - Orchestrate fetch, load, render and write into one export run.

pub mod export_service;
pub mod loader;
