//! # Export Module
//!
//! CSV serialization of engine output for sharing and spreadsheets.

pub mod csv;

pub use self::csv::{history_csv, session_csv, ExportError};
