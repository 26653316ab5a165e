use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::advisor;
use crate::error::Result;
use crate::fmt::{hex_rgb, pct};
use crate::score::{self, ScoreBand, ScoreResult, BASE_SCORE, MAX_SCORE};

use super::resolve_expenses;

fn band_colored(text: &str, band: &ScoreBand) -> String {
    match hex_rgb(band.color) {
        Some((r, g, b)) => text.truecolor(r, g, b).bold().to_string(),
        None => text.bold().to_string(),
    }
}

/// Color a factor value like the score screen: strong green, middling amber,
/// weak red.
fn factor_cell(value: f64) -> String {
    let text = pct(value);
    if value > 0.7 {
        text.green().to_string()
    } else if value > 0.4 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

pub(crate) fn render_report(result: &ScoreResult) {
    let band = score::classify_score(result.score);

    println!(
        "Your TCS Score: {}  {} ({}–{})",
        band_colored(&result.score.to_string(), band),
        band_colored(band.label, band),
        band.min,
        band.max
    );
    println!("{}", band.description.dimmed());
    println!("{}", format!("Range: {BASE_SCORE}–{MAX_SCORE}").dimmed());

    let mut table = Table::new();
    table.set_header(vec!["Factor", "Weight", "Value"]);
    for (detail, value) in advisor::factor_values(&result.factors) {
        table.add_row(vec![
            Cell::new(detail.name),
            Cell::new(detail.weight),
            Cell::new(factor_cell(value)),
        ]);
    }
    println!("\nScore Factors\n{table}");

    println!("\nSuggestions");
    for suggestion in advisor::suggestions_for(result.score) {
        println!("  • {suggestion}");
    }

    let recommendations = advisor::recommendations(result.score, &result.factors);
    if !recommendations.is_empty() {
        println!("\nPersonalized Recommendations");
        for (i, rec) in recommendations.iter().enumerate() {
            println!("  {}. {rec}", i + 1);
        }
    }
}

pub fn run(file: Option<String>, json: bool) -> Result<()> {
    let expenses = resolve_expenses(file.as_deref())?;
    let result = score::calculate_score(&expenses);

    if json {
        let band = score::classify_score(result.score);
        let recommendations = advisor::recommendations(result.score, &result.factors);
        let report = serde_json::json!({
            "score": result.score,
            "status": band.label,
            "color": band.color,
            "factors": result.factors,
            "recommendations": recommendations,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render_report(&result);
    Ok(())
}

pub fn factors(file: Option<String>) -> Result<()> {
    let expenses = resolve_expenses(file.as_deref())?;
    let result = score::calculate_score(&expenses);

    let mut table = Table::new();
    table.set_header(vec!["Factor", "Weight", "Value", "What it measures", "Tip"]);
    for (detail, value) in advisor::factor_values(&result.factors) {
        table.add_row(vec![
            Cell::new(detail.name),
            Cell::new(detail.weight),
            Cell::new(factor_cell(value)),
            Cell::new(detail.description),
            Cell::new(detail.tip),
        ]);
    }
    println!("Score Factors\n{table}");
    Ok(())
}
