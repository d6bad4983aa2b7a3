//! Report scanner subcommand. The analysis is a demo: the file is
//! validated (type and size) but never parsed, and the findings are the
//! same canned panel for every upload.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use medimate_core::report::{self, FindingStatus};
use medimate_core::types::{record_id, ReportRecord};
use medimate_core::StateStore;
use owo_colors::OwoColorize;

use crate::output;
use crate::spinner;

pub async fn run(store: &mut StateStore, file: &Path, no_wait: bool) -> Result<()> {
    report::validate_upload(file)?;

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    spinner::think("Scanning report...", 3, no_wait).await;
    let analysis = report::mock_analysis(&file_name);

    println!(
        "{}",
        "Demo analysis - findings are illustrative, not read from your file."
            .yellow()
    );

    output::header(&analysis.test_type);
    println!("File: {}", analysis.file_name.dimmed());
    println!("Severity: {}", analysis.severity.as_str().bright_yellow());
    println!();
    for line in output::wrap_text(&analysis.overall_assessment, 72) {
        println!("{}", line);
    }

    output::header("Key findings");
    for f in &analysis.key_findings {
        let status = match f.status {
            FindingStatus::Normal => f.status.as_str().green().to_string(),
            _ => f.status.as_str().red().to_string(),
        };
        println!(
            "  {} {} {} (normal {}) - {}",
            f.parameter.bright_white(),
            f.value,
            f.unit,
            f.normal_range,
            status
        );
        for line in output::wrap_text(&f.explanation, 68) {
            println!("      {}", line.dimmed());
        }
    }

    output::header("Recommendations");
    output::bullet_list(&analysis.recommendations);

    output::header("Suggested follow-up tests");
    output::bullet_list(&analysis.suggested_tests);

    output::header("Risk factors");
    output::bullet_list(&analysis.risk_factors);

    if store.user().is_some() {
        store.add_report_record(ReportRecord {
            id: record_id(),
            date: Utc::now(),
            file_name,
            analysis: analysis.overall_assessment.clone(),
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
