use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(name: Option<String>, file: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(name) = name {
        settings.user_name = name;
    }
    if let Some(file) = file {
        let expanded = shellexpand_path(&file);
        if !Path::new(&expanded).exists() {
            eprintln!(
                "{}",
                format!("Warning: {expanded} does not exist yet").yellow()
            );
        }
        settings.expenses_file = Some(expanded);
    }

    save_settings(&settings)?;
    println!("Settings saved.");
    println!(
        "User:           {}",
        if settings.user_name.is_empty() { "(not set)" } else { &settings.user_name }
    );
    println!(
        "Expenses file:  {}",
        settings.expenses_file.as_deref().unwrap_or("(none — sample data)")
    );
    Ok(())
}
