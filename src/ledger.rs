use chrono::Local;

use crate::models::{ExpenseRecord, ExpenseStatus};

/// In-memory expense list for an interactive session. Nothing here touches
/// disk; the session owns the records and the score is derived on demand.
pub struct Ledger {
    expenses: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new(expenses: Vec<ExpenseRecord>) -> Self {
        Self { expenses }
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    fn next_id(&self) -> u32 {
        self.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Add a new expense dated today. New entries start out pending.
    pub fn add(&mut self, expense_type: &str, amount: f64, description: Option<String>) -> u32 {
        let id = self.next_id();
        self.expenses.push(ExpenseRecord {
            id,
            expense_type: expense_type.to_string(),
            amount,
            date: Local::now().format("%Y-%m-%d").to_string(),
            status: ExpenseStatus::Pending,
            description,
        });
        id
    }

    /// Advance the status of an entry (paid -> pending -> overdue -> paid).
    pub fn cycle_status(&mut self, id: u32) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == id) {
            Some(e) => {
                e.status = e.status.cycle();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() < before
    }
}

/// The starter data set used when no expense file is supplied.
pub fn sample_expenses() -> Vec<ExpenseRecord> {
    let rows = [
        (1, "Mobile Recharge", 399.0, "2024-01-15", ExpenseStatus::Paid),
        (2, "Electricity Bill", 1250.0, "2024-01-10", ExpenseStatus::Paid),
        (3, "House Rent", 15000.0, "2024-01-01", ExpenseStatus::Paid),
        (4, "Internet Bill", 899.0, "2024-01-08", ExpenseStatus::Paid),
        (5, "Water Bill", 450.0, "2024-01-20", ExpenseStatus::Pending),
    ];
    rows.into_iter()
        .map(|(id, expense_type, amount, date, status)| ExpenseRecord {
            id,
            expense_type: expense_type.to_string(),
            amount,
            date: date.to_string(),
            status,
            description: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_incrementing_ids() {
        let mut ledger = Ledger::new(sample_expenses());
        let id = ledger.add("Gas Bill", 600.0, None);
        assert_eq!(id, 6);
        let id = ledger.add("Gas Bill", 650.0, Some("winter".to_string()));
        assert_eq!(id, 7);
        assert_eq!(ledger.len(), 7);
    }

    #[test]
    fn test_add_starts_pending_and_dated_today() {
        let mut ledger = Ledger::new(Vec::new());
        let id = ledger.add("Insurance", 2000.0, None);
        assert_eq!(id, 1);
        let e = &ledger.expenses()[0];
        assert_eq!(e.status, ExpenseStatus::Pending);
        assert_eq!(e.date, Local::now().format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_cycle_status_by_id() {
        let mut ledger = Ledger::new(sample_expenses());
        assert!(ledger.cycle_status(1));
        assert_eq!(ledger.expenses()[0].status, ExpenseStatus::Pending);
        assert!(!ledger.cycle_status(99));
    }

    #[test]
    fn test_remove_by_id() {
        let mut ledger = Ledger::new(sample_expenses());
        assert!(ledger.remove(3));
        assert_eq!(ledger.len(), 4);
        assert!(ledger.expenses().iter().all(|e| e.id != 3));
        assert!(!ledger.remove(3));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut ledger = Ledger::new(sample_expenses());
        ledger.remove(5);
        // Highest surviving id is 4, so the next is 5 again. Acceptable for a
        // session-scoped list, but removing a middle id must not shift others.
        ledger.remove(2);
        let id = ledger.add("Other", 10.0, None);
        assert_eq!(id, 5);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_sample_data_shape() {
        let sample = sample_expenses();
        assert_eq!(sample.len(), 5);
        assert!(sample.iter().filter(|e| e.status == ExpenseStatus::Paid).count() == 4);
        assert_eq!(sample[4].expense_type, "Water Bill");
    }
}
