use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, ExpenseStatus};

// ---------------------------------------------------------------------------
// Summary totals
// ---------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
}

pub fn summarize(expenses: &[ExpenseRecord]) -> ExpenseSummary {
    let mut summary = ExpenseSummary::default();
    for e in expenses {
        summary.count += 1;
        summary.total += e.amount;
        match e.status {
            ExpenseStatus::Paid => summary.paid += e.amount,
            ExpenseStatus::Pending => summary.pending += e.amount,
            ExpenseStatus::Overdue => summary.overdue += e.amount,
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Per-type breakdown
// ---------------------------------------------------------------------------

pub struct TypeBreakdown {
    pub expense_type: String,
    pub count: usize,
    pub total: f64,
    /// 2+ entries of a type mark it as a regular habit.
    pub recurring: bool,
}

pub fn breakdown_by_type(expenses: &[ExpenseRecord]) -> Vec<TypeBreakdown> {
    let mut groups: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for e in expenses {
        let entry = groups.entry(e.expense_type.as_str()).or_default();
        entry.0 += 1;
        entry.1 += e.amount;
    }

    let mut rows: Vec<TypeBreakdown> = groups
        .into_iter()
        .map(|(name, (count, total))| TypeBreakdown {
            expense_type: name.to_string(),
            count,
            total,
            recurring: count >= 2,
        })
        .collect();
    rows.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

/// Filter the register view by status and/or type label (case-insensitive).
pub fn filter<'a>(
    expenses: &'a [ExpenseRecord],
    status: Option<ExpenseStatus>,
    expense_type: Option<&str>,
) -> Vec<&'a ExpenseRecord> {
    expenses
        .iter()
        .filter(|e| status.map_or(true, |s| e.status == s))
        .filter(|e| {
            expense_type.map_or(true, |t| e.expense_type.to_lowercase() == t.to_lowercase())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, expense_type: &str, amount: f64, status: ExpenseStatus) -> ExpenseRecord {
        ExpenseRecord {
            id,
            expense_type: expense_type.to_string(),
            amount,
            date: "2024-01-15".to_string(),
            status,
            description: None,
        }
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            record(1, "Mobile Recharge", 399.0, ExpenseStatus::Paid),
            record(2, "Electricity Bill", 1250.0, ExpenseStatus::Paid),
            record(3, "House Rent", 15000.0, ExpenseStatus::Overdue),
            record(4, "Mobile Recharge", 399.0, ExpenseStatus::Pending),
        ]
    }

    #[test]
    fn test_summarize_totals_by_status() {
        let summary = summarize(&sample());
        assert_eq!(summary.count, 4);
        assert_eq!(summary.total, 17048.0);
        assert_eq!(summary.paid, 1649.0);
        assert_eq!(summary.pending, 399.0);
        assert_eq!(summary.overdue, 15000.0);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), ExpenseSummary::default());
    }

    #[test]
    fn test_breakdown_sorted_by_total_desc() {
        let rows = breakdown_by_type(&sample());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].expense_type, "House Rent");
        assert_eq!(rows[1].expense_type, "Electricity Bill");
        assert_eq!(rows[2].expense_type, "Mobile Recharge");
        assert_eq!(rows[2].count, 2);
        assert!(rows[2].recurring);
        assert!(!rows[0].recurring);
    }

    #[test]
    fn test_filter_by_status_and_type() {
        let expenses = sample();
        let paid = filter(&expenses, Some(ExpenseStatus::Paid), None);
        assert_eq!(paid.len(), 2);

        let mobile = filter(&expenses, None, Some("mobile recharge"));
        assert_eq!(mobile.len(), 2);

        let both = filter(&expenses, Some(ExpenseStatus::Pending), Some("Mobile Recharge"));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, 4);
    }
}
