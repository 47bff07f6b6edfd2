//! Session and series models
//!
//! A `TestSession` is one recorded testing protocol run for one player:
//! 56 scored series across five sub-tests. Each recorded series is a
//! `SeriesResult`, a tagged variant per sub-test carrying only the fields
//! that sub-test actually uses.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The five sub-tests of the protocol, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TestType {
    Groundstrokes,
    Combined,
    Return,
    Serve,
    Volley,
}

impl TestType {
    pub const ALL: [TestType; 5] = [
        TestType::Groundstrokes,
        TestType::Combined,
        TestType::Return,
        TestType::Serve,
        TestType::Volley,
    ];

    /// Number of series the protocol requires for this sub-test.
    pub fn series_count(self) -> usize {
        match self {
            TestType::Groundstrokes => 20,
            TestType::Combined => 10,
            TestType::Return => 10,
            TestType::Serve => 6,
            TestType::Volley => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TestType::Groundstrokes => "Groundstrokes",
            TestType::Combined => "Combined",
            TestType::Return => "Return",
            TestType::Serve => "Servizio",
            TestType::Volley => "Volley",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Groundstroke series direction. Even series are forehand cross-court,
/// odd series backhand cross-court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GroundstrokeDirection {
    FhCross,
    BhCross,
}

/// Combined series direction: down-the-line or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CombinedDirection {
    Lungolinea,
    Diagonale,
}

/// Volley series direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VolleyDirection {
    FhVolley,
    BhVolley,
}

/// Court side for serve and return series (deuce = right, ad = left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CourtSide {
    Right,
    Left,
}

/// First or second serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServeType {
    Prima,
    Seconda,
}

/// Serve target strip inside the service box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TargetStrip {
    #[serde(rename = "T")]
    T,
    Body,
    Wide,
}

impl fmt::Display for TargetStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TargetStrip::T => "T",
            TargetStrip::Body => "body",
            TargetStrip::Wide => "wide",
        };
        f.write_str(s)
    }
}

/// Player category tested against (target zone sizes differ per category).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    U10U12,
    Terza,
    Seconda,
    Prima,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::U10U12, Category::Terza, Category::Seconda, Category::Prima];

    pub fn label(self) -> &'static str {
        match self {
            Category::U10U12 => "U10/U12",
            Category::Terza => "3ª Categoria",
            Category::Seconda => "2ª Categoria",
            Category::Prima => "1ª Categoria",
        }
    }

    /// Short badge label used in tables.
    pub fn short_label(self) -> &'static str {
        match self {
            Category::U10U12 => "U10/U12",
            Category::Terza => "3ª",
            Category::Seconda => "2ª",
            Category::Prima => "1ª",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded series: 10 shot attempts, `score` of them successful.
///
/// Tagged per sub-test so that a serve series cannot carry a groundstroke
/// direction and vice versa. The `test_type` tag matches the sub-test
/// identifiers used in stored session documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "test_type", rename_all = "snake_case")]
pub enum SeriesResult {
    Groundstrokes {
        series_index: u8,
        score: u8,
        direction: GroundstrokeDirection,
    },
    Combined {
        series_index: u8,
        score: u8,
        direction: CombinedDirection,
    },
    Return {
        series_index: u8,
        score: u8,
        side: CourtSide,
    },
    Serve {
        series_index: u8,
        score: u8,
        serve_type: ServeType,
        side: CourtSide,
        target_strip: TargetStrip,
    },
    Volley {
        series_index: u8,
        score: u8,
        direction: VolleyDirection,
    },
}

impl SeriesResult {
    pub fn test_type(&self) -> TestType {
        match self {
            SeriesResult::Groundstrokes { .. } => TestType::Groundstrokes,
            SeriesResult::Combined { .. } => TestType::Combined,
            SeriesResult::Return { .. } => TestType::Return,
            SeriesResult::Serve { .. } => TestType::Serve,
            SeriesResult::Volley { .. } => TestType::Volley,
        }
    }

    /// Position within the sub-test (not global across the session).
    pub fn series_index(&self) -> u8 {
        match self {
            SeriesResult::Groundstrokes { series_index, .. }
            | SeriesResult::Combined { series_index, .. }
            | SeriesResult::Return { series_index, .. }
            | SeriesResult::Serve { series_index, .. }
            | SeriesResult::Volley { series_index, .. } => *series_index,
        }
    }

    /// Successful shots out of 10 attempts.
    pub fn score(&self) -> u8 {
        match self {
            SeriesResult::Groundstrokes { score, .. }
            | SeriesResult::Combined { score, .. }
            | SeriesResult::Return { score, .. }
            | SeriesResult::Serve { score, .. }
            | SeriesResult::Volley { score, .. } => *score,
        }
    }
}

/// One complete recorded test session for one player.
///
/// Sessions are created complete at wizard-save time; there is no persisted
/// draft state. After creation a session is only ever replaced wholesale or
/// deleted by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TestSession {
    pub id: String,
    pub player_id: String,
    pub player_name: String,
    pub date: NaiveDate,
    pub category: Category,
    pub coach: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub series: Vec<SeriesResult>,
}

impl TestSession {
    /// New empty session with a generated id.
    pub fn new(
        player_id: impl Into<String>,
        player_name: impl Into<String>,
        date: NaiveDate,
        category: Category,
        coach: impl Into<String>,
    ) -> Self {
        TestSession {
            id: Uuid::new_v4().to_string(),
            player_id: player_id.into(),
            player_name: player_name.into(),
            date,
            category,
            coach: coach.into(),
            date_of_birth: None,
            note: None,
            completed: false,
            created_at: Utc::now(),
            series: Vec::new(),
        }
    }

    /// Strips chosen so far for this session's serve series, in serve order.
    pub fn serve_strips(&self) -> Vec<TargetStrip> {
        let mut serves: Vec<(u8, TargetStrip)> = self
            .series
            .iter()
            .filter_map(|s| match s {
                SeriesResult::Serve { series_index, target_strip, .. } => {
                    Some((*series_index, *target_strip))
                }
                _ => None,
            })
            .collect();
        serves.sort_by_key(|(idx, _)| *idx);
        serves.into_iter().map(|(_, strip)| strip).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_result_tag_round_trip() {
        let serve = SeriesResult::Serve {
            series_index: 2,
            score: 7,
            serve_type: ServeType::Prima,
            side: CourtSide::Right,
            target_strip: TargetStrip::T,
        };
        let json = serde_json::to_string(&serve).unwrap();
        assert!(json.contains("\"test_type\":\"serve\""), "got {json}");
        assert!(json.contains("\"target_strip\":\"T\""), "got {json}");
        let back: SeriesResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, serve);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::U10U12).unwrap();
        assert_eq!(json, "\"u10_u12\"");
        let json = serde_json::to_string(&Category::Seconda).unwrap();
        assert_eq!(json, "\"seconda\"");
    }

    #[test]
    fn serve_strips_are_ordered_by_series_index() {
        let mut session = TestSession::new(
            "p1",
            "Test Player",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            Category::Seconda,
            "Coach",
        );
        for (idx, strip) in [(4u8, TargetStrip::Wide), (0, TargetStrip::T), (2, TargetStrip::Body)]
        {
            session.series.push(SeriesResult::Serve {
                series_index: idx,
                score: 5,
                serve_type: ServeType::Prima,
                side: CourtSide::Right,
                target_strip: strip,
            });
        }
        assert_eq!(
            session.serve_strips(),
            vec![TargetStrip::T, TargetStrip::Body, TargetStrip::Wide]
        );
    }
}
