//! # Statistics Module
//!
//! Pure numeric transforms from raw series scores to aggregate statistics.
//!
//! - `formulas` - mean, standard deviation, radar polygon area, percent-of-ideal
//! - `stroke` - per-stroke score selection and aggregates
//! - `precision_time` - the 10-point precision-over-time series
//! - `results` - full per-session aggregation
//! - `stars` - percent-of-ideal to 1–5-star rating
//!
//! Everything here is deterministic and side-effect-free; inputs are value
//! snapshots and outputs are freshly allocated.

pub mod formulas;
pub mod precision_time;
pub mod results;
pub mod stars;
pub mod stroke;

pub use formulas::{mean, percent_of_ideal, radar_area, std_dev, IDEAL_AREA, RADAR_AXES};
pub use precision_time::{compute_precision_time, PrecisionTimePoint};
pub use results::{compute_session_results, SessionResults};
pub use stars::{percent_to_stars, render_stars, star_label};
pub use stroke::{compute_stroke_stats, StrokeName, StrokeStats};
