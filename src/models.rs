use serde::{Deserialize, Serialize};

use crate::error::{Result, TcsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Paid,
    Pending,
    Overdue,
}

impl ExpenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "pending" => Ok(Self::Pending),
            "overdue" => Ok(Self::Overdue),
            _ => Err(TcsError::UnknownStatus(raw.to_string())),
        }
    }

    /// Next status when toggling in the tracker: paid -> pending -> overdue -> paid.
    pub fn cycle(&self) -> Self {
        match self {
            Self::Paid => Self::Pending,
            Self::Pending => Self::Overdue,
            Self::Overdue => Self::Paid,
        }
    }
}

/// One tracked bill/payment. `date` is display-only; scoring never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: u32,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub amount: f64,
    pub date: String,
    pub status: ExpenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Expense-type palette offered by the interactive add flow. Types are
/// free-text everywhere else; this is a convenience, not an enum.
pub const EXPENSE_TYPES: &[(&str, &str)] = &[
    ("Mobile Recharge", "📱"),
    ("Electricity Bill", "💡"),
    ("House Rent", "🏠"),
    ("Internet Bill", "🌐"),
    ("Water Bill", "💧"),
    ("Gas Bill", "🔥"),
    ("Insurance", "🛡"),
    ("Other", "📄"),
];

pub fn type_icon(expense_type: &str) -> &'static str {
    EXPENSE_TYPES
        .iter()
        .find(|(name, _)| *name == expense_type)
        .map(|(_, icon)| *icon)
        .unwrap_or("📄")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(ExpenseStatus::parse("paid").unwrap(), ExpenseStatus::Paid);
        assert_eq!(ExpenseStatus::parse(" Pending ").unwrap(), ExpenseStatus::Pending);
        assert_eq!(ExpenseStatus::parse("OVERDUE").unwrap(), ExpenseStatus::Overdue);
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        let err = ExpenseStatus::parse("late").unwrap_err();
        assert!(err.to_string().contains("late"));
    }

    #[test]
    fn test_status_cycle_covers_all_three() {
        let s = ExpenseStatus::Paid;
        assert_eq!(s.cycle(), ExpenseStatus::Pending);
        assert_eq!(s.cycle().cycle(), ExpenseStatus::Overdue);
        assert_eq!(s.cycle().cycle().cycle(), ExpenseStatus::Paid);
    }

    #[test]
    fn test_record_serializes_type_field() {
        let rec = ExpenseRecord {
            id: 1,
            expense_type: "House Rent".to_string(),
            amount: 15000.0,
            date: "2024-01-01".to_string(),
            status: ExpenseStatus::Paid,
            description: None,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains(r#""type":"House Rent""#));
        assert!(json.contains(r#""status":"paid""#));
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_record_deserializes_without_description() {
        let json = r#"{"id":2,"type":"Water Bill","amount":450,"date":"2024-01-20","status":"pending"}"#;
        let rec: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.expense_type, "Water Bill");
        assert_eq!(rec.status, ExpenseStatus::Pending);
        assert!(rec.description.is_none());
    }

    #[test]
    fn test_type_icon_falls_back_for_unknown() {
        assert_eq!(type_icon("Electricity Bill"), "💡");
        assert_eq!(type_icon("Totally Custom"), "📄");
    }
}
