//! Dashboard subcommand: activity counts, engagement score, recent history.

use anyhow::Result;
use chrono::{DateTime, Utc};
use medimate_core::StateStore;
use owo_colors::OwoColorize;

use crate::output;

pub fn run(store: &StateStore) -> Result<()> {
    match store.user() {
        Some(user) => println!("Welcome back, {}!", user.name.bright_white()),
        None => println!("{}", "Not signed in - showing history stored on this device.".dimmed()),
    }

    let history = store.history();
    let symptoms = history.symptoms.len();
    let reports = history.reports.len();
    let quizzes = history.quizzes.len();
    let skin = history.skin_analyses.len();

    output::header("Activity");
    println!("  Symptom checks:  {}", symptoms);
    println!("  Report scans:    {}", reports);
    println!("  Quizzes taken:   {}", quizzes);
    println!("  Skin analyses:   {}", skin);

    // Capped at 100: ten activities count as fully engaged.
    let engagement = (history.activity_count() * 10).min(100);
    println!();
    println!("  Engagement score: {}/100", engagement.to_string().bright_yellow());

    let recent = recent_activity(store, 5);
    if !recent.is_empty() {
        output::header("Recent activity");
        for (date, line) in recent {
            println!("  {}  {}", date.format("%Y-%m-%d %H:%M").dimmed(), line);
        }
    }

    Ok(())
}

/// Merge the three dashboard-visible record kinds, newest first.
fn recent_activity(store: &StateStore, limit: usize) -> Vec<(DateTime<Utc>, String)> {
    let history = store.history();
    let mut items: Vec<(DateTime<Utc>, String)> = Vec::new();

    for r in &history.symptoms {
        items.push((r.date, format!("Symptom check: {}", r.prediction)));
    }
    for r in &history.reports {
        items.push((r.date, format!("Report scan: {}", r.file_name)));
    }
    for r in &history.quizzes {
        items.push((r.date, format!("Quiz: {}/{}", r.score, r.total_questions)));
    }

    items.sort_by(|a, b| b.0.cmp(&a.0));
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use medimate_core::types::{record_id, QuizRecord, ReportRecord, SymptomRecord};
    use tempfile::TempDir;

    fn symptom_record(prediction: &str) -> SymptomRecord {
        SymptomRecord {
            id: record_id(),
            date: Utc::now(),
            symptoms: vec!["Fever".to_string()],
            severity: 5,
            emotional_state: 5,
            duration: "1-3 days".to_string(),
            prediction: prediction.to_string(),
            recommendations: vec![],
        }
    }

    #[test]
    fn test_recent_activity_merges_and_limits() {
        let dir = TempDir::new().unwrap();
        let mut store = StateStore::with_root(dir.path());
        store.signup("Test", "t@example.com", "pw").unwrap();

        for i in 0..4 {
            store.add_symptom_record(symptom_record(&format!("Check {}", i))).unwrap();
        }
        store
            .add_report_record(ReportRecord {
                id: record_id(),
                date: Utc::now(),
                file_name: "panel.pdf".to_string(),
                analysis: "ok".to_string(),
                recommendations: vec![],
            })
            .unwrap();
        store
            .add_quiz_record(QuizRecord {
                id: record_id(),
                date: Utc::now(),
                score: 4,
                total_questions: 5,
            })
            .unwrap();

        let recent = recent_activity(&store, 5);
        assert_eq!(recent.len(), 5);
        // Newest first
        for pair in recent.windows(2) {
            assert!(pair[0].0 >= pair[1].0);
        }
    }

    #[test]
    fn test_recent_activity_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::with_root(dir.path());
        assert!(recent_activity(&store, 5).is_empty());
    }
}
