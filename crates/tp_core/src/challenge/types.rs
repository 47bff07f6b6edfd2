//! Shared comparison types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stats::StrokeName;

/// Which side took a stroke or a whole match. Ties award neither side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    SideA,
    SideB,
    Draw,
}

impl Winner {
    /// Strictly-greater comparison; equal values are a draw.
    pub fn from_values(a: f64, b: f64) -> Winner {
        if a > b {
            Winner::SideA
        } else if b > a {
            Winner::SideB
        } else {
            Winner::Draw
        }
    }
}

/// One row of the stroke comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrokeComparison {
    pub stroke: StrokeName,
    pub label: String,
    pub side_a: f64,
    pub side_b: f64,
    pub winner: Winner,
}

/// Outcome of a 1v1 or 2v2 challenge.
///
/// `winner` is decided by stroke-win count alone; the percent-of-ideal
/// fields are reported for display but never decide the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChallengeOutcome {
    pub name_a: String,
    pub name_b: String,
    pub rows: Vec<StrokeComparison>,
    pub strokes_a: u8,
    pub strokes_b: u8,
    pub winner: Winner,
    pub percent_a: f64,
    pub percent_b: f64,
}

/// Podium medal for the first three ranks of a standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Medal> {
        match rank {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

/// Build the comparison table and totals from two six-value stroke rows.
pub(crate) fn compare_stroke_values(
    values_a: &[(StrokeName, f64)],
    values_b: &[(StrokeName, f64)],
) -> (Vec<StrokeComparison>, u8, u8, Winner) {
    let rows: Vec<StrokeComparison> = values_a
        .iter()
        .zip(values_b)
        .map(|((stroke, a), (_, b))| StrokeComparison {
            stroke: *stroke,
            label: stroke.label().to_string(),
            side_a: *a,
            side_b: *b,
            winner: Winner::from_values(*a, *b),
        })
        .collect();
    let strokes_a = rows.iter().filter(|r| r.winner == Winner::SideA).count() as u8;
    let strokes_b = rows.iter().filter(|r| r.winner == Winner::SideB).count() as u8;
    let winner = Winner::from_values(f64::from(strokes_a), f64::from(strokes_b));
    (rows, strokes_a, strokes_b, winner)
}
