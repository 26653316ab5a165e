use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::models::{type_icon, ExpenseRecord, ExpenseStatus};
use crate::reports;

use super::resolve_expenses;

fn status_cell(status: ExpenseStatus) -> String {
    match status {
        ExpenseStatus::Paid => "paid".green().to_string(),
        ExpenseStatus::Pending => "pending".yellow().to_string(),
        ExpenseStatus::Overdue => "overdue".red().to_string(),
    }
}

pub(crate) fn render_register(expenses: &[&ExpenseRecord]) {
    if expenses.is_empty() {
        println!("No expenses found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Type", "Amount", "Status", "Note"]);
    for e in expenses {
        table.add_row(vec![
            Cell::new(e.id),
            Cell::new(&e.date),
            Cell::new(format!("{} {}", type_icon(&e.expense_type), e.expense_type)),
            Cell::new(money(e.amount)),
            Cell::new(status_cell(e.status)),
            Cell::new(e.description.as_deref().unwrap_or("")),
        ]);
    }
    println!("Expenses ({})\n{table}", expenses.len());
}

pub(crate) fn render_summary(expenses: &[ExpenseRecord]) {
    let summary = reports::summarize(expenses);
    println!(
        "\nTotal: {}   Paid: {}   Pending: {}   Overdue: {}",
        money(summary.total).bold(),
        money(summary.paid).green(),
        money(summary.pending).yellow(),
        money(summary.overdue).red(),
    );

    let breakdown = reports::breakdown_by_type(expenses);
    if breakdown.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Type", "Count", "Total", "Recurring"]);
    for row in &breakdown {
        table.add_row(vec![
            Cell::new(&row.expense_type),
            Cell::new(row.count),
            Cell::new(money(row.total)),
            Cell::new(if row.recurring { "yes" } else { "" }),
        ]);
    }
    println!("\nBy Type\n{table}");
}

pub fn run(
    file: Option<String>,
    status: Option<String>,
    expense_type: Option<String>,
) -> Result<()> {
    let expenses = resolve_expenses(file.as_deref())?;
    let status = status.map(|s| ExpenseStatus::parse(&s)).transpose()?;

    let rows = reports::filter(&expenses, status, expense_type.as_deref());
    render_register(&rows);

    // Summary covers the full history; filters narrow the register only.
    if status.is_none() && expense_type.is_none() {
        render_summary(&expenses);
    }
    Ok(())
}
