//! Symptom checker subcommand.

use anyhow::{bail, Result};
use chrono::Utc;
use medimate_core::symptom::{self, SymptomInput};
use medimate_core::types::{record_id, SymptomRecord};
use medimate_core::StateStore;
use owo_colors::OwoColorize;

use crate::output;
use crate::spinner;

pub async fn run(
    store: &mut StateStore,
    symptoms: Vec<String>,
    severity: Option<u8>,
    emotional_state: Option<u8>,
    duration: Option<String>,
    no_wait: bool,
) -> Result<()> {
    let symptoms = if symptoms.is_empty() {
        pick_symptoms()?
    } else {
        let mut deduped: Vec<String> = Vec::new();
        for s in symptoms {
            if !deduped.contains(&s) {
                deduped.push(s);
            }
        }
        deduped
    };

    if symptoms.is_empty() {
        bail!("select at least one symptom");
    }

    let severity = match severity {
        Some(n) if (1..=10).contains(&n) => n,
        Some(n) => bail!("severity must be 1-10, got {}", n),
        None => output::ask_scale("How severe are your symptoms?", 1, 10)?,
    };

    let emotional_state = match emotional_state {
        Some(n) if (1..=10).contains(&n) => n,
        Some(n) => bail!("emotional state must be 1-10, got {}", n),
        None => output::ask_scale("How is your emotional state?", 1, 10)?,
    };

    let duration = match duration {
        Some(d) => d,
        None => output::ask_single("How long have you had these symptoms?", symptom::DURATIONS)?,
    };

    let input = SymptomInput {
        symptoms: symptoms.clone(),
        severity,
        emotional_state,
        duration: duration.clone(),
    };

    spinner::think("Analyzing your symptoms...", 2, no_wait).await;
    let analysis = symptom::analyze(&input);

    output::header(&analysis.condition);
    println!(
        "Severity: {}   Confidence: {}%",
        analysis.severity.as_str().bright_yellow(),
        analysis.confidence
    );
    println!();
    for line in output::wrap_text(&analysis.description, 72) {
        println!("{}", line);
    }

    output::header("Recommendations");
    output::bullet_list(&analysis.recommendations);

    output::header("Suggested tests");
    output::bullet_list(&analysis.suggested_tests);

    output::header("Lifestyle");
    output::bullet_list(&analysis.lifestyle);

    if store.user().is_some() {
        store.add_symptom_record(SymptomRecord {
            id: record_id(),
            date: Utc::now(),
            symptoms,
            severity,
            emotional_state,
            duration,
            prediction: analysis.condition.clone(),
            recommendations: analysis.recommendations.clone(),
        })?;
        println!();
        println!("{}", "Saved to your health history.".dimmed());
    } else {
        println!();
        println!("{}", "Sign in to save results to your history.".dimmed());
    }

    Ok(())
}

fn pick_symptoms() -> Result<Vec<String>> {
    let mut selected = Vec::new();
    for (category, options) in symptom::SYMPTOM_CATEGORIES {
        let picks = output::ask_multi(&format!("{} symptoms:", category), options)?;
        for pick in picks {
            if !selected.contains(&pick) {
                selected.push(pick);
            }
        }
    }

    let custom = output::ask_text("Any other symptom? (leave empty to skip)")?;
    if !custom.is_empty() && !selected.contains(&custom) {
        selected.push(custom);
    }

    Ok(selected)
}
