use std::path::Path;

use regex::Regex;

use crate::error::{Result, TcsError};
use crate::models::{ExpenseRecord, ExpenseStatus};

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.replace(',', "").replace('"', "").replace('₹', "").replace('$', "");
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return -inner.trim().parse::<f64>().unwrap_or(0.0);
    }
    s.parse().unwrap_or(0.0)
}

pub fn parse_date_mdy(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let m: u32 = parts[0].parse().ok()?;
    let d: u32 = parts[1].parse().ok()?;
    let y: i32 = parts[2].parse().ok()?;
    chrono::NaiveDate::from_ymd_opt(y, m, d).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Pass ISO dates through, convert M/D/Y, and leave anything else untouched
/// (dates are display-only; scoring never reads them).
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    let is_iso = Regex::new(r"^\d{4}-\d{2}-\d{2}$")
        .map(|re| re.is_match(raw))
        .unwrap_or(false);
    if is_iso {
        return raw.to_string();
    }
    parse_date_mdy(raw).unwrap_or_else(|| raw.to_string())
}

// ---------------------------------------------------------------------------
// Expense file loading
// ---------------------------------------------------------------------------

/// Load an expense list from a caller-supplied file. The format is chosen by
/// extension: `.csv` (header row with at least type, amount, status) or
/// `.json` (array of records).
pub fn load_expenses(path: &Path) -> Result<Vec<ExpenseRecord>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        _ => Err(TcsError::UnknownFormat(path.display().to_string())),
    }
}

fn load_csv(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let (type_col, amount_col, status_col) = match (col("type"), col("amount"), col("status")) {
        (Some(t), Some(a), Some(s)) => (t, a, s),
        _ => {
            return Err(TcsError::Other(format!(
                "{}: expense CSV needs type, amount and status columns",
                path.display()
            )))
        }
    };
    let id_col = col("id");
    let date_col = col("date");
    let description_col = col("description");

    let field = |record: &csv::StringRecord, idx: Option<usize>| {
        idx.and_then(|i| record.get(i)).unwrap_or("").to_string()
    };

    let mut expenses = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let id = field(&record, id_col)
            .parse::<u32>()
            .unwrap_or(row as u32 + 1);
        let description = match field(&record, description_col) {
            d if d.is_empty() => None,
            d => Some(d),
        };
        expenses.push(ExpenseRecord {
            id,
            expense_type: field(&record, Some(type_col)),
            amount: parse_amount(&field(&record, Some(amount_col))),
            date: normalize_date(&field(&record, date_col)),
            status: ExpenseStatus::parse(&field(&record, Some(status_col)))?,
            description,
        });
    }
    Ok(expenses)
}

fn load_json(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
