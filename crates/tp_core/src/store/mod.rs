//! # Store Module
//!
//! File-backed JSON document store for players, profiles, sessions and
//! settings. An explicit instance owned by the caller — the engine itself
//! never reads it, it only receives snapshots. Writes go through a temp
//! file and an atomic rename so a crash never leaves a half-written store.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Player, PlayerProfile, Settings, TestSession};
use crate::protocol::validate::{validate_series, ProtocolError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session {id} not found")]
    SessionNotFound { id: String },

    #[error("invalid session: {0}")]
    InvalidSession(#[from] ProtocolError),
}

/// Everything the application persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub player_profiles: Vec<PlayerProfile>,
    #[serde(default)]
    pub sessions: Vec<TestSession>,
    #[serde(default)]
    pub settings: Settings,
}

/// Owned handle on one store file.
pub struct SessionStore {
    path: PathBuf,
    state: AppState,
}

impl SessionStore {
    /// Open a store file, or start empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let state: AppState = serde_json::from_str(&contents)?;
            log::info!(
                "store loaded from {} ({} sessions, {} profiles)",
                path.display(),
                state.sessions.len(),
                state.player_profiles.len()
            );
            state
        } else {
            log::info!("no store at {}, starting empty", path.display());
            AppState::default()
        };
        Ok(SessionStore { path, state })
    }

    /// Persist the current state (temp file + rename).
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("store saved to {} ({} sessions)", self.path.display(), self.state.sessions.len());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> Settings {
        self.state.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.state.settings = settings;
    }

    // ── Sessions ──────────────────────────────────────────────────────────

    pub fn sessions(&self) -> &[TestSession] {
        &self.state.sessions
    }

    pub fn session(&self, id: &str) -> Option<&TestSession> {
        self.state.sessions.iter().find(|s| s.id == id)
    }

    pub fn sessions_for_player(&self, player_id: &str) -> Vec<&TestSession> {
        self.state.sessions.iter().filter(|s| s.player_id == player_id).collect()
    }

    /// Insert or replace a session by id. The series are validated against
    /// the protocol catalog first, so downstream consumers can trust every
    /// stored session to be well-formed.
    pub fn upsert_session(&mut self, session: TestSession) -> Result<(), StoreError> {
        validate_series(&session.series)?;
        match self.state.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(slot) => {
                log::debug!("replacing session {}", session.id);
                *slot = session;
            }
            None => self.state.sessions.push(session),
        }
        Ok(())
    }

    pub fn delete_session(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.state.sessions.len();
        self.state.sessions.retain(|s| s.id != id);
        if self.state.sessions.len() == before {
            return Err(StoreError::SessionNotFound { id: id.to_string() });
        }
        log::debug!("deleted session {id}");
        Ok(())
    }

    // ── Players & profiles ───────────────────────────────────────────────

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn upsert_player(&mut self, player: Player) {
        match self.state.players.iter_mut().find(|p| p.id == player.id) {
            Some(slot) => *slot = player,
            None => self.state.players.push(player),
        }
    }

    pub fn profiles(&self) -> &[PlayerProfile] {
        &self.state.player_profiles
    }

    pub fn profile(&self, id: &str) -> Option<&PlayerProfile> {
        self.state.player_profiles.iter().find(|p| p.id == id)
    }

    pub fn upsert_profile(&mut self, profile: PlayerProfile) {
        match self.state.player_profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(slot) => *slot = profile,
            None => self.state.player_profiles.push(profile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, GroundstrokeDirection, SeriesResult};
    use crate::testutil::session_with_strokes;
    use chrono::NaiveDate;

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("state.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_file_opens_empty() {
        let (_dir, store) = temp_store();
        assert!(store.sessions().is_empty());
        assert_eq!(store.settings(), Settings::default());
    }

    #[test]
    fn save_and_reopen_round_trips() {
        let (_dir, mut store) = temp_store();
        let session = session_with_strokes("Anna", [8, 7, 5, 4, 6, 9]);
        let id = session.id.clone();
        store.upsert_session(session).unwrap();
        store.save().unwrap();

        let reopened = SessionStore::open(store.path().to_path_buf()).unwrap();
        assert_eq!(reopened.sessions().len(), 1);
        assert_eq!(reopened.session(&id).unwrap().player_name, "Anna");
    }

    #[test]
    fn upsert_replaces_by_id() {
        let (_dir, mut store) = temp_store();
        let mut session = session_with_strokes("Anna", [8, 7, 5, 4, 6, 9]);
        store.upsert_session(session.clone()).unwrap();
        session.coach = "New Coach".to_string();
        store.upsert_session(session.clone()).unwrap();
        assert_eq!(store.sessions().len(), 1);
        assert_eq!(store.session(&session.id).unwrap().coach, "New Coach");
    }

    #[test]
    fn malformed_session_is_rejected() {
        let (_dir, mut store) = temp_store();
        let mut session = TestSession::new(
            "p1",
            "Bad",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            Category::Terza,
            "Coach",
        );
        session.series.push(SeriesResult::Groundstrokes {
            series_index: 0,
            score: 11,
            direction: GroundstrokeDirection::FhCross,
        });
        assert!(matches!(
            store.upsert_session(session),
            Err(StoreError::InvalidSession(_))
        ));
        assert!(store.sessions().is_empty());
    }

    #[test]
    fn delete_unknown_session_errors() {
        let (_dir, mut store) = temp_store();
        assert!(matches!(
            store.delete_session("nope"),
            Err(StoreError::SessionNotFound { .. })
        ));
    }

    #[test]
    fn sessions_filter_by_player() {
        let (_dir, mut store) = temp_store();
        store.upsert_session(session_with_strokes("Anna", [5; 6])).unwrap();
        store.upsert_session(session_with_strokes("Bruno", [6; 6])).unwrap();
        assert_eq!(store.sessions_for_player("player-anna").len(), 1);
        assert!(store.sessions_for_player("player-x").is_empty());
    }
}
