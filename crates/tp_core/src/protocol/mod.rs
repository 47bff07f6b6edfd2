//! # Protocol Module
//!
//! Static definition of the testing protocol and its one stateful
//! sequencing rule.
//!
//! - `catalog` - The ordered series catalog per sub-test (56 series total)
//! - `strip` - Serve target-strip rotation rule
//! - `validate` - Structural validation of recorded series against the catalog

pub mod catalog;
pub mod strip;
pub mod validate;

pub use catalog::{
    catalog_for, category_target, CategoryTarget, SeriesKind, SeriesSpec, COMBINED_SERIES,
    GROUNDSTROKES_SERIES, RETURN_SERIES, SERVE_SERIES, SHOTS_PER_SERIES, TOTAL_SERIES, TOTAL_SHOTS,
    VOLLEY_SERIES,
};
pub use strip::{allowed_strips, is_strip_allowed, STRIPS};
pub use validate::{validate_complete_session, validate_series, ProtocolError};

#[cfg(test)]
pub mod tests;
