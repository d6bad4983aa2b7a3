//! Feedback subcommand. Works signed out; name and email prefill from the
//! current session when signed in.

use anyhow::{bail, Result};
use chrono::Utc;
use medimate_core::types::{record_id, FeedbackEntry, FEEDBACK_CATEGORIES};
use medimate_core::StateStore;
use owo_colors::OwoColorize;

use crate::output;

pub fn run(
    store: &StateStore,
    name: Option<String>,
    email: Option<String>,
    category: Option<String>,
    rating: Option<u8>,
    message: Option<String>,
) -> Result<()> {
    let name = match name.or_else(|| store.user().map(|u| u.name.clone())) {
        Some(n) => n,
        None => output::ask_text("Your name:")?,
    };
    if name.trim().is_empty() {
        bail!("name cannot be empty");
    }

    let email = match email.or_else(|| store.user().map(|u| u.email.clone())) {
        Some(e) => e,
        None => output::ask_text("Your email:")?,
    };
    if email.trim().is_empty() {
        bail!("email cannot be empty");
    }

    let category = match category {
        Some(c) => {
            if !FEEDBACK_CATEGORIES.contains(&c.as_str()) {
                bail!(
                    "unknown category {:?}; expected one of: {}",
                    c,
                    FEEDBACK_CATEGORIES.join(", ")
                );
            }
            c
        }
        None => output::ask_single("Feedback category:", FEEDBACK_CATEGORIES)?,
    };

    let rating = match rating {
        Some(n) if (1..=5).contains(&n) => n,
        Some(n) => bail!("rating must be 1-5, got {}", n),
        None => output::ask_scale("How would you rate MediMate?", 1, 5)?,
    };

    let message = match message {
        Some(m) => m,
        None => output::ask_text("Your feedback:")?,
    };

    if message.trim().is_empty() {
        bail!("feedback message cannot be empty");
    }

    store.add_feedback(FeedbackEntry {
        id: record_id(),
        timestamp: Utc::now(),
        name,
        email,
        category,
        rating,
        message,
    })?;

    println!("{} Thank you for your feedback!", "+".bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn all_flags(name: &str, email: &str, message: &str) -> (StateStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = StateStore::with_root(dir.path());
        let result = run(
            &store,
            Some(name.to_string()),
            Some(email.to_string()),
            Some("General Feedback".to_string()),
            Some(5),
            Some(message.to_string()),
        );
        assert_eq!(result.is_ok(), !name.trim().is_empty() && !email.trim().is_empty());
        (store, dir)
    }

    #[test]
    fn test_empty_name_or_email_rejected_without_persisting() {
        let (store, _dir) = all_flags("", "demo@medimate.com", "hi");
        assert!(store.feedback_entries().is_empty());

        let (store, _dir) = all_flags("Demo", "  ", "hi");
        assert!(store.feedback_entries().is_empty());
    }

    #[test]
    fn test_complete_submission_persists() {
        let (store, _dir) = all_flags("Demo", "demo@medimate.com", "Works great");
        let entries = store.feedback_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Demo");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::with_root(dir.path());
        let result = run(
            &store,
            Some("Demo".to_string()),
            Some("demo@medimate.com".to_string()),
            Some("Nonsense".to_string()),
            Some(5),
            Some("hi".to_string()),
        );
        assert!(result.is_err());
        assert!(store.feedback_entries().is_empty());
    }
}
