//! Player models
//!
//! `Player` is the minimal identity record sessions reference by id.
//! `PlayerProfile` is the richer coaching profile with contact details and
//! an optional 1–5-star initial assessment per stroke.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal player identity referenced by `TestSession::player_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { id: Uuid::new_v4().to_string(), name: name.into(), created_at: Utc::now() }
    }
}

/// Coach's first impression of a player, 1–5 stars per stroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InitialAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serve: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forehand: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backhand: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volley: Option<u8>,
    #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combined: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_date: Option<NaiveDate>,
}

/// Full coaching profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_ranking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_assessment: Option<InitialAssessment>,
    /// True for profiles auto-generated from quick tests.
    #[serde(default)]
    pub auto_created: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlayerProfile {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        PlayerProfile {
            id: Uuid::new_v4().to_string(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            phone: None,
            email: None,
            parent_name: None,
            club: None,
            fit_ranking: None,
            coach_name: None,
            notes: None,
            initial_assessment: None,
            auto_created: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_full_name_joins_first_and_last() {
        let profile =
            PlayerProfile::new("Marco", "Rossi", NaiveDate::from_ymd_opt(2010, 6, 15).unwrap());
        assert_eq!(profile.full_name(), "Marco Rossi");
        assert!(!profile.auto_created);
    }

    #[test]
    fn optional_profile_fields_are_omitted_from_json() {
        let profile =
            PlayerProfile::new("Anna", "Bianchi", NaiveDate::from_ymd_opt(2011, 3, 2).unwrap());
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("phone"));
        assert!(!json.contains("initial_assessment"));
    }
}
