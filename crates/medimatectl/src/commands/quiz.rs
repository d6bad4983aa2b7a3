//! Health quiz and daily wellness tip subcommands.

use anyhow::Result;
use chrono::{Local, Utc};
use medimate_core::types::{record_id, QuizRecord};
use medimate_core::{quiz, wellness, StateStore};
use owo_colors::OwoColorize;

use crate::output;
use crate::spinner;

pub async fn run(store: &mut StateStore, no_wait: bool) -> Result<()> {
    output::header("Health Knowledge Quiz");

    let mut answers: Vec<Option<usize>> = Vec::with_capacity(quiz::QUESTIONS.len());

    for (i, q) in quiz::QUESTIONS.iter().enumerate() {
        let chosen = output::ask_single(
            &format!("Question {}/{}: {}", i + 1, quiz::QUESTIONS.len(), q.question),
            q.options,
        )?;
        let index = q.options.iter().position(|o| *o == chosen);
        answers.push(index);

        if index == Some(q.correct) {
            println!("   {} Correct!", "+".bright_green());
        } else {
            println!(
                "   {} The answer is: {}",
                "x".red(),
                q.options[q.correct].bright_white()
            );
        }
        for line in output::wrap_text(q.explanation, 68) {
            println!("   {}", line.dimmed());
        }
    }

    spinner::think("Tallying your score...", 2, no_wait).await;

    let score = quiz::score_quiz(&answers);
    let total = quiz::QUESTIONS.len();

    output::header("Results");
    println!("Score: {}/{}", score.to_string().bright_yellow(), total);
    println!("{}", quiz::verdict(score, total).bright_white());

    if store.user().is_some() {
        store.add_quiz_record(QuizRecord {
            id: record_id(),
            date: Utc::now(),
            score: score as u32,
            total_questions: total as u32,
        })?;
        println!();
        println!("{}", "Saved to your health history.".dimmed());
    } else {
        println!();
        println!("{}", "Sign in to save results to your history.".dimmed());
    }

    Ok(())
}

/// Print today's wellness tip. Rotates by day of month.
pub fn tip() -> Result<()> {
    let today = Local::now().date_naive();
    println!(
        "{} {}",
        "Tip of the day:".bright_cyan(),
        wellness::daily_tip(today).bright_white()
    );
    Ok(())
}
