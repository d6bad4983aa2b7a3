//! State store: the single shared mutable resource.
//!
//! Holds the current user and the per-device history, backed by key -> JSON
//! files under one data root. State is loaded once at construction and every
//! mutation writes the whole affected blob back synchronously (atomic temp
//! file + rename, so a file is never left half-written).
//!
//! Reads are fail-soft: a missing or malformed file is treated as absent and
//! never surfaced to the caller. Appends do not validate record shape - the
//! rule engines are trusted to produce well-formed records.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::paths;
use crate::types::{
    record_id, Account, FeedbackEntry, History, QuizRecord, ReportRecord, SkinRecord,
    SymptomRecord, User,
};

const CURRENT_USER_FILE: &str = "current_user.json";
const ACCOUNTS_FILE: &str = "accounts.json";
const HISTORY_FILE: &str = "history.json";
const FEEDBACK_FILE: &str = "feedback.json";

/// Write data to a file atomically using temp file + rename.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Read a JSON state file, treating missing or malformed content as absent.
fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("ignoring malformed state file {}: {}", path.display(), e);
            None
        }
    }
}

/// The state store. Constructed once and passed explicitly into every
/// feature that needs it; there is no global instance.
pub struct StateStore {
    root: PathBuf,
    user: Option<User>,
    history: History,
}

impl StateStore {
    /// Open the store at the default data directory.
    pub fn open() -> Self {
        Self::with_root(paths::data_dir())
    }

    /// Open the store at a custom root (used by tests and `--data-dir`).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let user = read_json(&root.join(CURRENT_USER_FILE));
        let history: History = read_json(&root.join(HISTORY_FILE)).unwrap_or_default();
        debug!(
            "state loaded from {}: user={}, {} history entries",
            root.display(),
            user.is_some(),
            history.activity_count() + history.skin_analyses.len()
        );
        Self { root, user, history }
    }

    /// The currently logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Attempt to log in. Succeeds iff a stored account matches both fields
    /// exactly (case-sensitive). On success the account's secret is stripped
    /// and the resulting identity is persisted as the current user.
    pub fn login(&mut self, email: &str, password: &str) -> Result<bool, StoreError> {
        let accounts = self.load_accounts();
        let found = accounts
            .iter()
            .find(|a| a.email == email && a.password == password);

        match found {
            Some(account) => {
                let user = account.to_user();
                self.write_json(CURRENT_USER_FILE, &user)?;
                self.user = Some(user);
                debug!("login ok for {}", email);
                Ok(true)
            }
            None => {
                debug!("login rejected for {}", email);
                Ok(false)
            }
        }
    }

    /// Create an account and log in immediately. Returns `Ok(false)` without
    /// touching the accounts collection when the email is already taken.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<bool, StoreError> {
        let mut accounts = self.load_accounts();
        if accounts.iter().any(|a| a.email == email) {
            debug!("signup rejected, email already registered: {}", email);
            return Ok(false);
        }

        let account = Account {
            id: record_id(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            join_date: chrono::Utc::now(),
        };
        accounts.push(account.clone());
        self.write_json(ACCOUNTS_FILE, &accounts)?;

        let user = account.to_user();
        self.write_json(CURRENT_USER_FILE, &user)?;
        self.user = Some(user);
        debug!("signup ok for {}", email);
        Ok(true)
    }

    /// Clear the current user identity. History is deliberately left in
    /// place: it is per-device, not per-account.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.user = None;
        let path = self.root.join(CURRENT_USER_FILE);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| StoreError::Io { path, source })?;
        }
        Ok(())
    }

    pub fn add_symptom_record(&mut self, record: SymptomRecord) -> Result<(), StoreError> {
        self.history.symptoms.push(record);
        self.persist_history()
    }

    pub fn add_report_record(&mut self, record: ReportRecord) -> Result<(), StoreError> {
        self.history.reports.push(record);
        self.persist_history()
    }

    pub fn add_quiz_record(&mut self, record: QuizRecord) -> Result<(), StoreError> {
        self.history.quizzes.push(record);
        self.persist_history()
    }

    pub fn add_skin_record(&mut self, record: SkinRecord) -> Result<(), StoreError> {
        self.history.skin_analyses.push(record);
        self.persist_history()
    }

    /// Append a feedback entry to the stored feedback sequence.
    pub fn add_feedback(&self, entry: FeedbackEntry) -> Result<(), StoreError> {
        let mut entries = self.feedback_entries();
        entries.push(entry);
        self.write_json(FEEDBACK_FILE, &entries)
    }

    pub fn feedback_entries(&self) -> Vec<FeedbackEntry> {
        read_json(&self.root.join(FEEDBACK_FILE)).unwrap_or_default()
    }

    fn load_accounts(&self) -> Vec<Account> {
        read_json(&self.root.join(ACCOUNTS_FILE)).unwrap_or_default()
    }

    fn persist_history(&self) -> Result<(), StoreError> {
        self.write_json(HISTORY_FILE, &self.history)
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let path = self.root.join(file);
        let content = serde_json::to_string_pretty(value)?;
        atomic_write(&path, content.as_bytes())
            .map_err(|source| StoreError::Io { path, source })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn symptom_record() -> SymptomRecord {
        SymptomRecord {
            id: record_id(),
            date: Utc::now(),
            symptoms: vec!["Cough".to_string()],
            severity: 5,
            emotional_state: 5,
            duration: "1-3-days".to_string(),
            prediction: "General Health Concern".to_string(),
            recommendations: vec!["Stay hydrated and get adequate rest".to_string()],
        }
    }

    #[test]
    fn test_signup_then_login() {
        let temp = TempDir::new().unwrap();
        let mut store = StateStore::with_root(temp.path());

        assert!(store.signup("Demo", "demo@medimate.com", "secret").unwrap());
        assert_eq!(store.user().unwrap().email, "demo@medimate.com");

        store.logout().unwrap();
        assert!(store.user().is_none());

        assert!(store.login("demo@medimate.com", "secret").unwrap());
        assert_eq!(store.user().unwrap().name, "Demo");
    }

    #[test]
    fn test_duplicate_email_signup_rejected_without_mutation() {
        let temp = TempDir::new().unwrap();
        let mut store = StateStore::with_root(temp.path());

        assert!(store.signup("Demo", "demo@medimate.com", "secret").unwrap());
        let before = std::fs::read_to_string(temp.path().join("accounts.json")).unwrap();

        assert!(!store.signup("Other", "demo@medimate.com", "other").unwrap());
        let after = std::fs::read_to_string(temp.path().join("accounts.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_login_wrong_password_leaves_user_unset() {
        let temp = TempDir::new().unwrap();
        let mut store = StateStore::with_root(temp.path());
        store.signup("Demo", "demo@medimate.com", "secret").unwrap();
        store.logout().unwrap();

        assert!(!store.login("demo@medimate.com", "wrong").unwrap());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_login_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        let mut store = StateStore::with_root(temp.path());
        store.signup("Demo", "demo@medimate.com", "Secret").unwrap();
        store.logout().unwrap();

        assert!(!store.login("Demo@medimate.com", "Secret").unwrap());
        assert!(!store.login("demo@medimate.com", "secret").unwrap());
        assert!(store.login("demo@medimate.com", "Secret").unwrap());
    }

    #[test]
    fn test_current_user_file_never_contains_secret() {
        let temp = TempDir::new().unwrap();
        let mut store = StateStore::with_root(temp.path());
        store.signup("Demo", "demo@medimate.com", "s3cr3t-value").unwrap();

        let content = std::fs::read_to_string(temp.path().join("current_user.json")).unwrap();
        assert!(!content.contains("s3cr3t-value"));
        assert!(!content.contains("password"));
    }

    #[test]
    fn test_logout_clears_user_but_keeps_history() {
        let temp = TempDir::new().unwrap();
        let mut store = StateStore::with_root(temp.path());
        store.signup("Demo", "demo@medimate.com", "secret").unwrap();
        store.add_symptom_record(symptom_record()).unwrap();

        store.logout().unwrap();
        assert!(store.user().is_none());
        assert_eq!(store.history().symptoms.len(), 1);

        // History also survives a full reload after logout
        let reloaded = StateStore::with_root(temp.path());
        assert!(reloaded.user().is_none());
        assert_eq!(reloaded.history().symptoms.len(), 1);
    }

    #[test]
    fn test_reload_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = StateStore::with_root(temp.path());
        store.signup("Demo", "demo@medimate.com", "secret").unwrap();
        store.add_symptom_record(symptom_record()).unwrap();
        store
            .add_quiz_record(QuizRecord {
                id: record_id(),
                date: Utc::now(),
                score: 4,
                total_questions: 5,
            })
            .unwrap();

        let first = StateStore::with_root(temp.path());
        let second = StateStore::with_root(temp.path());
        assert_eq!(first.user(), second.user());
        assert_eq!(first.history(), second.history());
        assert_eq!(store.history(), second.history());
    }

    #[test]
    fn test_malformed_state_treated_as_absent() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("history.json"), "{not json").unwrap();
        std::fs::write(temp.path().join("current_user.json"), "[]").unwrap();

        let store = StateStore::with_root(temp.path());
        assert!(store.user().is_none());
        assert_eq!(store.history(), &History::default());
    }

    #[test]
    fn test_missing_state_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let store = StateStore::with_root(temp.path().join("does-not-exist-yet"));
        assert!(store.user().is_none());
        assert_eq!(store.history(), &History::default());
    }

    #[test]
    fn test_appends_preserve_insertion_order() {
        let temp = TempDir::new().unwrap();
        let mut store = StateStore::with_root(temp.path());

        for severity in [3u8, 6, 9] {
            let mut record = symptom_record();
            record.severity = severity;
            store.add_symptom_record(record).unwrap();
        }

        let reloaded = StateStore::with_root(temp.path());
        let severities: Vec<u8> = reloaded.history().symptoms.iter().map(|r| r.severity).collect();
        assert_eq!(severities, vec![3, 6, 9]);
    }

    #[test]
    fn test_feedback_appends() {
        let temp = TempDir::new().unwrap();
        let store = StateStore::with_root(temp.path());

        let entry = FeedbackEntry {
            id: record_id(),
            timestamp: Utc::now(),
            name: "Demo".to_string(),
            email: "demo@medimate.com".to_string(),
            category: "General Feedback".to_string(),
            rating: 5,
            message: "Works great".to_string(),
        };
        store.add_feedback(entry.clone()).unwrap();
        store.add_feedback(entry).unwrap();

        assert_eq!(store.feedback_entries().len(), 2);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        atomic_write(&path, b"{}").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temp.path().join("state.tmp").exists());
    }
}
