use std::path::Path;

use crate::error::Result;
use crate::importer::load_expenses;
use crate::ledger::sample_expenses;
use crate::reports::breakdown_by_type;
use crate::score::{calculate_score, classify_score};
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();

    println!(
        "User:           {}",
        if settings.user_name.is_empty() { "(not set)" } else { &settings.user_name }
    );

    let expenses = match settings.expenses_file.as_deref() {
        Some(file) if Path::new(file).exists() => {
            println!("Expenses file:  {file}");
            load_expenses(Path::new(file))?
        }
        Some(file) => {
            println!("Expenses file:  {file} (missing — using sample data)");
            sample_expenses()
        }
        None => {
            println!("Expenses file:  (none — using sample data)");
            sample_expenses()
        }
    };

    let result = calculate_score(&expenses);
    let band = classify_score(result.score);

    println!();
    println!("Expenses:       {}", expenses.len());
    println!("Distinct types: {}", breakdown_by_type(&expenses).len());
    println!("TCS score:      {} ({})", result.score, band.label);

    Ok(())
}
