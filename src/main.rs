mod advisor;
mod cli;
mod error;
mod fmt;
mod importer;
mod ledger;
mod models;
mod reports;
mod score;
mod settings;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score { file, json } => cli::score::run(file, json),
        Commands::Factors { file } => cli::score::factors(file),
        Commands::Expenses {
            file,
            status,
            expense_type,
        } => cli::expenses::run(file, status, expense_type),
        Commands::Track { file } => cli::track::run(file),
        Commands::Advisor => cli::advisor::run(),
        Commands::Ask { question } => cli::advisor::ask(&question.join(" ")),
        Commands::Demo => cli::demo::run(),
        Commands::Init { name, file } => cli::init::run(name, file),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
