//! Skin analysis questionnaire subcommand.

use anyhow::Result;
use chrono::Utc;
use medimate_core::skin::{self, Answer, Product, QuestionKind, SkinAnswers};
use medimate_core::types::{record_id, SkinRecord};
use medimate_core::StateStore;
use owo_colors::OwoColorize;

use crate::output;
use crate::spinner;

pub async fn run(store: &mut StateStore, no_wait: bool) -> Result<()> {
    let mut answers = SkinAnswers::new();

    for q in skin::QUESTIONS {
        let answer = match q.kind {
            QuestionKind::Single => Answer::One(output::ask_single(q.question, q.options)?),
            QuestionKind::Multiple => Answer::Many(output::ask_multi(q.question, q.options)?),
            QuestionKind::Scale => {
                Answer::One(output::ask_scale(q.question, 1, 10)?.to_string())
            }
        };
        answers.insert(q.id, answer);
    }

    spinner::think("Analyzing your answers...", 2, no_wait).await;
    let analysis = skin::analyze(&answers);

    output::header("Your skin profile");
    println!("Skin type: {}", analysis.skin_type.bright_white());
    if !analysis.primary_concerns.is_empty() {
        println!("Concerns: {}", analysis.primary_concerns.join(", "));
    }
    println!("Skin care score: {}/100", analysis.skin_score.to_string().bright_yellow());

    output::header("Recommended products");
    print_product("Cleanser", &analysis.recommendations.cleanser);
    print_product("Toner", &analysis.recommendations.toner);
    print_product("Serum", &analysis.recommendations.serum);
    print_product("Moisturizer", &analysis.recommendations.moisturizer);
    print_product("Sunscreen", &analysis.recommendations.sunscreen);

    output::header("Morning routine");
    for s in &analysis.routine.morning {
        println!("  {}. {} - {}", s.step, s.product.bright_white(), s.instruction);
    }

    output::header("Evening routine");
    for s in &analysis.routine.evening {
        println!("  {}. {} - {}", s.step, s.product.bright_white(), s.instruction);
    }

    output::header("Tips");
    output::bullet_list(&analysis.tips);

    output::header("Getting started");
    for line in analysis.schedule.lines() {
        println!("  {}", line);
    }

    if store.user().is_some() {
        store.add_skin_record(SkinRecord {
            id: record_id(),
            date: Utc::now(),
            skin_type: analysis.skin_type.clone(),
            concerns: analysis.primary_concerns.clone(),
            score: analysis.skin_score,
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

fn print_product(slot: &str, product: &Product) {
    println!("  {} {}", format!("{}:", slot).cyan(), product.name.bright_white());
    for line in output::wrap_text(&product.description, 68) {
        println!("      {}", line);
    }
    for line in output::wrap_text(&product.usage, 68) {
        println!("      {}", line.dimmed());
    }
}
