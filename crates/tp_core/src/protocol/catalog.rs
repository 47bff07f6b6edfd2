//! Series catalog
//!
//! The protocol requires a fixed, order-stable list of series per sub-test,
//! generated by alternation rules: 20 groundstroke series (FH/BH cross),
//! 10 combined (lungolinea/diagonale), 10 return (right/left), 6 serve
//! (1ª-destra / 2ª-sinistra) and 10 volley (FH/BH). 56 series, 560 shots.

use once_cell::sync::Lazy;

use crate::models::{
    Category, CombinedDirection, CourtSide, GroundstrokeDirection, SeriesResult, ServeType,
    TestType, VolleyDirection,
};

/// Shots attempted per series.
pub const SHOTS_PER_SERIES: u8 = 10;
/// Series across all five sub-tests.
pub const TOTAL_SERIES: usize = 56;
/// Shot attempts across a full session.
pub const TOTAL_SHOTS: usize = TOTAL_SERIES * SHOTS_PER_SERIES as usize;

/// What a catalog slot requires, minus the score the coach will record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Groundstrokes { direction: GroundstrokeDirection },
    Combined { direction: CombinedDirection },
    Return { side: CourtSide },
    Serve { serve_type: ServeType, side: CourtSide },
    Volley { direction: VolleyDirection },
}

impl SeriesKind {
    pub fn test_type(&self) -> TestType {
        match self {
            SeriesKind::Groundstrokes { .. } => TestType::Groundstrokes,
            SeriesKind::Combined { .. } => TestType::Combined,
            SeriesKind::Return { .. } => TestType::Return,
            SeriesKind::Serve { .. } => TestType::Serve,
            SeriesKind::Volley { .. } => TestType::Volley,
        }
    }
}

/// One required series slot in the protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub series_index: u8,
    pub kind: SeriesKind,
    pub label: String,
}

impl SeriesSpec {
    pub fn test_type(&self) -> TestType {
        self.kind.test_type()
    }

    /// Whether a recorded series fills this slot (index and variant fields
    /// both have to line up; score and target strip are not checked here).
    pub fn matches(&self, result: &SeriesResult) -> bool {
        if result.series_index() != self.series_index {
            return false;
        }
        match (&self.kind, result) {
            (
                SeriesKind::Groundstrokes { direction },
                SeriesResult::Groundstrokes { direction: d, .. },
            ) => direction == d,
            (SeriesKind::Combined { direction }, SeriesResult::Combined { direction: d, .. }) => {
                direction == d
            }
            (SeriesKind::Return { side }, SeriesResult::Return { side: s, .. }) => side == s,
            (
                SeriesKind::Serve { serve_type, side },
                SeriesResult::Serve { serve_type: t, side: s, .. },
            ) => serve_type == t && side == s,
            (SeriesKind::Volley { direction }, SeriesResult::Volley { direction: d, .. }) => {
                direction == d
            }
            _ => false,
        }
    }
}

pub static GROUNDSTROKES_SERIES: Lazy<Vec<SeriesSpec>> = Lazy::new(|| {
    (0..20)
        .map(|i| {
            let (direction, name) = if i % 2 == 0 {
                (GroundstrokeDirection::FhCross, "FH Incrociato")
            } else {
                (GroundstrokeDirection::BhCross, "BH Incrociato")
            };
            SeriesSpec {
                series_index: i as u8,
                kind: SeriesKind::Groundstrokes { direction },
                label: format!("Serie {} — {}", i + 1, name),
            }
        })
        .collect()
});

pub static COMBINED_SERIES: Lazy<Vec<SeriesSpec>> = Lazy::new(|| {
    (0..10)
        .map(|i| {
            let (direction, name) = if i % 2 == 0 {
                (CombinedDirection::Lungolinea, "Lungolinea")
            } else {
                (CombinedDirection::Diagonale, "Diagonale")
            };
            SeriesSpec {
                series_index: i as u8,
                kind: SeriesKind::Combined { direction },
                label: format!("Serie {} — {}", i + 1, name),
            }
        })
        .collect()
});

pub static RETURN_SERIES: Lazy<Vec<SeriesSpec>> = Lazy::new(|| {
    (0..10)
        .map(|i| {
            let (side, name) = if i % 2 == 0 {
                (CourtSide::Right, "Palla da Destra (deuce)")
            } else {
                (CourtSide::Left, "Palla da Sinistra (ad)")
            };
            SeriesSpec {
                series_index: i as u8,
                kind: SeriesKind::Return { side },
                label: format!("Serie {} — {}", i + 1, name),
            }
        })
        .collect()
});

/// 6 series: alternating 1ª-destra / 2ª-sinistra.
pub static SERVE_SERIES: Lazy<Vec<SeriesSpec>> = Lazy::new(|| {
    (0..6)
        .map(|i| {
            let (serve_type, side, name) = if i % 2 == 0 {
                (ServeType::Prima, CourtSide::Right, "1ª Servizio da Destra")
            } else {
                (ServeType::Seconda, CourtSide::Left, "2ª Servizio da Sinistra")
            };
            SeriesSpec {
                series_index: i as u8,
                kind: SeriesKind::Serve { serve_type, side },
                label: format!("Serie {} — {}", i + 1, name),
            }
        })
        .collect()
});

pub static VOLLEY_SERIES: Lazy<Vec<SeriesSpec>> = Lazy::new(|| {
    (0..10)
        .map(|i| {
            let (direction, name) = if i % 2 == 0 {
                (VolleyDirection::FhVolley, "Volee FH Incrociata")
            } else {
                (VolleyDirection::BhVolley, "Volee BH Incrociata")
            };
            SeriesSpec {
                series_index: i as u8,
                kind: SeriesKind::Volley { direction },
                label: format!("Serie {} — {}", i + 1, name),
            }
        })
        .collect()
});

/// The ordered catalog for one sub-test.
pub fn catalog_for(test_type: TestType) -> &'static [SeriesSpec] {
    match test_type {
        TestType::Groundstrokes => &GROUNDSTROKES_SERIES,
        TestType::Combined => &COMBINED_SERIES,
        TestType::Return => &RETURN_SERIES,
        TestType::Serve => &SERVE_SERIES,
        TestType::Volley => &VOLLEY_SERIES,
    }
}

/// Target-zone geometry for one category, as printed on instruction sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTarget {
    pub label: &'static str,
    pub groundstroke: &'static str,
    pub volley: &'static str,
    pub serve: &'static str,
    pub description: &'static str,
}

/// Target zones per category. U10/U12 sessions use the 3ª zones scaled on
/// court, so no dedicated entry exists for them.
pub fn category_target(category: Category) -> Option<&'static CategoryTarget> {
    const TERZA: CategoryTarget = CategoryTarget {
        label: "3ª Categoria",
        groundstroke: "1m × 1m",
        volley: "1.5m",
        serve: "2.06m + 2.06m + rif. 1m",
        description: "Zone ampie per principianti avanzati",
    };
    const SECONDA: CategoryTarget = CategoryTarget {
        label: "2ª Categoria",
        groundstroke: "1.5m × 2m",
        volley: "1.2m",
        serve: "1.2m × 3 strisce",
        description: "Zone intermedie per giocatori competitivi",
    };
    const PRIMA: CategoryTarget = CategoryTarget {
        label: "1ª Categoria",
        groundstroke: "2m × 3m",
        volley: "0.7m",
        serve: "0.7m × 3 strisce",
        description: "Zone precise per giocatori agonisti",
    };
    match category {
        Category::U10U12 => None,
        Category::Terza => Some(&TERZA),
        Category::Seconda => Some(&SECONDA),
        Category::Prima => Some(&PRIMA),
    }
}
