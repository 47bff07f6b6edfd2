//! Aggregation settings
//!
//! Two flags only. Both are passed explicitly into every aggregation call;
//! the engine holds no ambient configuration state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Standard-deviation divisor selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StdDevMode {
    /// Divisor n−1.
    #[default]
    Sample,
    /// Divisor n.
    Population,
}

/// Pairing scheme for the precision-time series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PrecisionTimeStrategy {
    /// Point i uses the i-th FH, BH and combined series directly.
    #[default]
    A,
    /// FH/BH pairs of consecutive series are averaged for the first
    /// `floor(fh_count / 2)` points, then falls back to direct indexing.
    B,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Settings {
    #[serde(default)]
    pub std_dev_mode: StdDevMode,
    #[serde(default)]
    pub precision_time_strategy: PrecisionTimeStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sample_and_strategy_a() {
        let settings = Settings::default();
        assert_eq!(settings.std_dev_mode, StdDevMode::Sample);
        assert_eq!(settings.precision_time_strategy, PrecisionTimeStrategy::A);
    }

    #[test]
    fn strategy_serializes_as_bare_letter() {
        assert_eq!(serde_json::to_string(&PrecisionTimeStrategy::A).unwrap(), "\"A\"");
        assert_eq!(serde_json::to_string(&PrecisionTimeStrategy::B).unwrap(), "\"B\"");
    }
}
