pub mod advisor;
pub mod demo;
pub mod expenses;
pub mod init;
pub mod score;
pub mod status;
pub mod track;

use std::path::Path;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::error::Result;
use crate::importer::load_expenses;
use crate::ledger::sample_expenses;
use crate::models::ExpenseRecord;
use crate::settings::{load_settings, shellexpand_path};

/// Resolve the expense history for a command: an explicit --file wins, then
/// the configured default, then the built-in sample data (with a note, so
/// nobody mistakes the sample for their own records).
pub(crate) fn resolve_expenses(file: Option<&str>) -> Result<Vec<ExpenseRecord>> {
    if let Some(file) = file {
        return load_expenses(Path::new(&shellexpand_path(file)));
    }
    let settings = load_settings();
    if let Some(file) = settings.expenses_file {
        return load_expenses(Path::new(&file));
    }
    eprintln!(
        "{}",
        "No expense file configured — using built-in sample data.".yellow()
    );
    Ok(sample_expenses())
}

#[derive(Parser)]
#[command(name = "tcs", about = "Trust & Credit Score tracker for household expenses.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute and display the TCS score for an expense history.
    Score {
        /// Expense file (.csv or .json)
        #[arg(long)]
        file: Option<String>,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Factor-by-factor breakdown with weights and tips.
    Factors {
        /// Expense file (.csv or .json)
        #[arg(long)]
        file: Option<String>,
    },
    /// Expense register with summary totals.
    Expenses {
        /// Expense file (.csv or .json)
        #[arg(long)]
        file: Option<String>,
        /// Filter by status: paid, pending, overdue
        #[arg(long)]
        status: Option<String>,
        /// Filter by expense type label
        #[arg(long = "type")]
        expense_type: Option<String>,
    },
    /// Interactive expense tracker with a live score gauge.
    Track {
        /// Expense file (.csv or .json) to start the session from
        #[arg(long)]
        file: Option<String>,
    },
    /// Chat with the score advisor.
    Advisor,
    /// Ask the advisor a single question.
    Ask {
        /// The question text
        question: Vec<String>,
    },
    /// Walk through the sample expense history: register, score, advice.
    Demo,
    /// Set your name and default expense file.
    Init {
        /// Your display name
        #[arg(long)]
        name: Option<String>,
        /// Default expense file for commands run without --file
        #[arg(long)]
        file: Option<String>,
    },
    /// Show current settings and the score at a glance.
    Status,
}
