use colored::Colorize;

use crate::error::Result;
use crate::ledger::sample_expenses;
use crate::score::calculate_score;

use super::{expenses, score};

/// Walk the sample expense history end to end so a new user sees every
/// surface: register, totals, breakdown, score, advice.
pub fn run() -> Result<()> {
    println!("{}", "TCS demo — five sample expenses".bold());
    println!();

    let sample = sample_expenses();
    let rows: Vec<_> = sample.iter().collect();
    expenses::render_register(&rows);
    expenses::render_summary(&sample);

    println!();
    let result = calculate_score(&sample);
    score::render_report(&result);

    println!();
    println!(
        "{}",
        "Try `tcs track` to edit this list interactively, or `tcs score --file \
your-expenses.csv` to score your own records."
            .dimmed()
    );
    Ok(())
}
