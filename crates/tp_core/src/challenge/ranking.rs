//! Leaderboards
//!
//! Within a category, completed sessions are ranked purely by
//! percent-of-ideal. The cross-category "generale" board takes each
//! player's best percent per category and ranks players by their single
//! best value anywhere. Players are keyed by `player_id`, never by display
//! name, so two different players sharing a name do not collide.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::challenge::types::Medal;
use crate::models::Category;
use crate::stats::SessionResults;

/// One row of a per-category leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LeaderboardEntry {
    pub session_id: String,
    pub player_id: String,
    pub player_name: String,
    pub category: Category,
    pub coach: String,
    pub percent_of_ideal: f64,
    pub medal: Option<Medal>,
}

/// One row of the cross-category "generale" board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OverallRow {
    pub player_id: String,
    pub player_name: String,
    /// Best percent-of-ideal achieved per category, only for categories the
    /// player has actually been tested in.
    pub best_by_category: BTreeMap<Category, f64>,
    pub medal: Option<Medal>,
}

impl OverallRow {
    /// The single best percent across every tested category.
    pub fn best_overall(&self) -> f64 {
        self.best_by_category.values().cloned().fold(0.0, f64::max)
    }
}

fn sort_by_percent_desc<T>(rows: &mut [T], percent: impl Fn(&T) -> f64) {
    rows.sort_by(|a, b| {
        percent(b).partial_cmp(&percent(a)).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Rank one category's completed sessions by percent-of-ideal.
pub fn category_leaderboard(
    results: &[SessionResults],
    category: Category,
) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<LeaderboardEntry> = results
        .iter()
        .filter(|r| r.session.completed && r.session.category == category)
        .map(|r| LeaderboardEntry {
            session_id: r.session.id.clone(),
            player_id: r.session.player_id.clone(),
            player_name: r.session.player_name.clone(),
            category: r.session.category,
            coach: r.session.coach.clone(),
            percent_of_ideal: r.percent_of_ideal,
            medal: None,
        })
        .collect();
    sort_by_percent_desc(&mut rows, |r| r.percent_of_ideal);
    for (rank, row) in rows.iter_mut().enumerate() {
        row.medal = Medal::for_rank(rank);
    }
    rows
}

/// Build the cross-category board from all completed sessions.
pub fn overall_leaderboard(results: &[SessionResults]) -> Vec<OverallRow> {
    let mut by_player: BTreeMap<String, OverallRow> = BTreeMap::new();

    for r in results.iter().filter(|r| r.session.completed) {
        let row = by_player.entry(r.session.player_id.clone()).or_insert_with(|| OverallRow {
            player_id: r.session.player_id.clone(),
            player_name: r.session.player_name.clone(),
            best_by_category: BTreeMap::new(),
            medal: None,
        });
        let best = row.best_by_category.entry(r.session.category).or_insert(f64::MIN);
        if r.percent_of_ideal > *best {
            *best = r.percent_of_ideal;
        }
    }

    let mut rows: Vec<OverallRow> = by_player.into_values().collect();
    sort_by_percent_desc(&mut rows, OverallRow::best_overall);
    for (rank, row) in rows.iter_mut().enumerate() {
        row.medal = Medal::for_rank(rank);
    }
    rows
}
