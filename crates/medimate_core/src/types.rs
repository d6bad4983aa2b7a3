//! Shared data model: users, accounts, and the per-device history.
//!
//! Field names serialize as camelCase to stay byte-compatible with the JSON
//! layout documented in the storage contract (e.g. `joinDate`,
//! `totalQuestions`, `skinAnalyses`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::skin::ProductSet;

/// Current user identity, as exposed to everything past authentication.
///
/// Deliberately has no credential field: an [`Account`] is stripped down to
/// this before it is set as the current user or written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub join_date: DateTime<Utc>,
}

/// Stored account record: a [`User`] plus its credential secret.
///
/// Only the store module ever reads or writes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub join_date: DateTime<Utc>,
}

impl Account {
    /// Strip the secret, yielding the identity safe to hand out.
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            join_date: self.join_date,
        }
    }
}

/// Append-only record of past interactions with the rule engines.
///
/// One container per device; insertion order is chronological. Entries are
/// immutable once appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    pub symptoms: Vec<SymptomRecord>,
    pub reports: Vec<ReportRecord>,
    pub quizzes: Vec<QuizRecord>,
    pub skin_analyses: Vec<SkinRecord>,
}

impl History {
    /// Total count of the three dashboard-visible record kinds.
    pub fn activity_count(&self) -> usize {
        self.symptoms.len() + self.reports.len() + self.quizzes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub symptoms: Vec<String>,
    pub severity: u8,
    pub emotional_state: u8,
    pub duration: String,
    pub prediction: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub file_name: String,
    pub analysis: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub score: u32,
    pub total_questions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub skin_type: String,
    pub concerns: Vec<String>,
    pub score: i32,
    pub recommendations: ProductSet,
}

/// A submitted feedback form entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub category: String,
    pub rating: u8,
    pub message: String,
}

/// Feedback categories offered by the form.
pub const FEEDBACK_CATEGORIES: &[&str] = &[
    "General Feedback",
    "Symptom Checker",
    "Report Scanner",
    "Fun Activities",
    "User Experience",
    "Technical Issues",
    "Feature Request",
    "Other",
];

/// Discrete severity level inferred from the 1-10 discomfort scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityBand {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityBand {
    /// Classify a 1-10 severity scalar into a band.
    pub fn from_severity(severity: u8) -> Self {
        if severity >= 8 {
            SeverityBand::Critical
        } else if severity >= 6 {
            SeverityBand::High
        } else if severity >= 4 {
            SeverityBand::Medium
        } else {
            SeverityBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBand::Low => "Low",
            SeverityBand::Medium => "Medium",
            SeverityBand::High => "High",
            SeverityBand::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generate a time-based record identifier (milliseconds since epoch).
pub fn record_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(SeverityBand::from_severity(1), SeverityBand::Low);
        assert_eq!(SeverityBand::from_severity(3), SeverityBand::Low);
        assert_eq!(SeverityBand::from_severity(4), SeverityBand::Medium);
        assert_eq!(SeverityBand::from_severity(5), SeverityBand::Medium);
        assert_eq!(SeverityBand::from_severity(6), SeverityBand::High);
        assert_eq!(SeverityBand::from_severity(7), SeverityBand::High);
        assert_eq!(SeverityBand::from_severity(8), SeverityBand::Critical);
        assert_eq!(SeverityBand::from_severity(10), SeverityBand::Critical);
    }

    #[test]
    fn test_band_ordering() {
        assert!(SeverityBand::Low < SeverityBand::Medium);
        assert!(SeverityBand::High < SeverityBand::Critical);
    }

    #[test]
    fn test_account_to_user_strips_secret() {
        let account = Account {
            id: "1".to_string(),
            name: "Demo".to_string(),
            email: "demo@medimate.com".to_string(),
            password: "hunter2".to_string(),
            join_date: Utc::now(),
        };
        let user = account.to_user();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("joinDate"));
    }

    #[test]
    fn test_record_id_is_numeric() {
        let id = record_id();
        assert!(id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_history_serializes_camel_case() {
        let history = History::default();
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("skinAnalyses"));
    }
}
