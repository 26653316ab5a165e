use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ExpenseRecord, ExpenseStatus};

pub const BASE_SCORE: u32 = 300;
pub const MAX_SCORE: u32 = 850;

/// Distinct expense types needed for the full diversity bonus.
pub const DIVERSITY_SATURATION: usize = 8;

pub const PAYMENT_HISTORY_WEIGHT: f64 = 0.35;
pub const CONSISTENCY_WEIGHT: f64 = 0.25;
pub const STABILITY_WEIGHT: f64 = 0.25;
pub const DIVERSITY_WEIGHT: f64 = 0.15;

// ---------------------------------------------------------------------------
// Factors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFactors {
    pub payment_history: f64,
    pub expense_consistency: f64,
    pub amount_stability: f64,
    pub diversity_bonus: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub factors: ScoreFactors,
}

fn amounts_by_type(expenses: &[ExpenseRecord]) -> BTreeMap<&str, Vec<f64>> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for e in expenses {
        groups.entry(e.expense_type.as_str()).or_default().push(e.amount);
    }
    groups
}

/// Share of paid entries, with overdue entries penalized at twice the weight
/// of a paid reward. Pending entries are neutral. Floored at 0.
fn payment_history(expenses: &[ExpenseRecord]) -> f64 {
    if expenses.is_empty() {
        return 0.0;
    }
    let total = expenses.len() as f64;
    let paid = expenses.iter().filter(|e| e.status == ExpenseStatus::Paid).count() as f64;
    let overdue = expenses.iter().filter(|e| e.status == ExpenseStatus::Overdue).count() as f64;
    (paid / total - (overdue / total) * 2.0).max(0.0)
}

/// Share of distinct types that recur (2+ entries). Breadth of recurring
/// behavior, not volume.
fn expense_consistency(expenses: &[ExpenseRecord]) -> f64 {
    let groups = amounts_by_type(expenses);
    if groups.is_empty() {
        return 0.0;
    }
    let recurring = groups.values().filter(|amounts| amounts.len() >= 2).count();
    recurring as f64 / groups.len() as f64
}

/// Average per-type stability, where stability = max(0, 1 - cv) and cv is the
/// population coefficient of variation of that type's amounts. Types with a
/// single entry carry no signal and are excluded. Falls back to a neutral 0.5
/// when nothing qualifies. A zero mean yields 0 stability for that type.
fn amount_stability(expenses: &[ExpenseRecord]) -> f64 {
    if expenses.len() < 2 {
        return 0.5;
    }

    let mut stability_sum = 0.0;
    let mut qualifying = 0usize;

    for amounts in amounts_by_type(expenses).values() {
        if amounts.len() < 2 {
            continue;
        }
        let n = amounts.len() as f64;
        let mean = amounts.iter().sum::<f64>() / n;
        if mean == 0.0 {
            qualifying += 1;
            continue;
        }
        let variance = amounts.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n;
        let cv = variance.sqrt() / mean;
        stability_sum += (1.0 - cv).max(0.0);
        qualifying += 1;
    }

    if qualifying > 0 {
        stability_sum / qualifying as f64
    } else {
        0.5
    }
}

/// Linear ramp on distinct type count, saturating at 8 types.
fn diversity_bonus(expenses: &[ExpenseRecord]) -> f64 {
    let distinct = amounts_by_type(expenses).len();
    (distinct as f64 / DIVERSITY_SATURATION as f64).min(1.0)
}

fn calculate_factors(expenses: &[ExpenseRecord]) -> ScoreFactors {
    if expenses.is_empty() {
        return ScoreFactors {
            payment_history: 0.0,
            expense_consistency: 0.0,
            amount_stability: 0.0,
            diversity_bonus: 0.0,
        };
    }
    ScoreFactors {
        payment_history: payment_history(expenses),
        expense_consistency: expense_consistency(expenses),
        amount_stability: amount_stability(expenses),
        diversity_bonus: diversity_bonus(expenses),
    }
}

/// Compute the TCS score for an expense history. Pure and total: any input,
/// including the empty list, yields a score in [300, 850].
pub fn calculate_score(expenses: &[ExpenseRecord]) -> ScoreResult {
    let factors = calculate_factors(expenses);

    let weighted = factors.payment_history * PAYMENT_HISTORY_WEIGHT
        + factors.expense_consistency * CONSISTENCY_WEIGHT
        + factors.amount_stability * STABILITY_WEIGHT
        + factors.diversity_bonus * DIVERSITY_WEIGHT;

    let range = (MAX_SCORE - BASE_SCORE) as f64;
    let raw = (BASE_SCORE as f64 + weighted * range).round() as i64;
    let score = raw.clamp(BASE_SCORE as i64, MAX_SCORE as i64) as u32;

    ScoreResult { score, factors }
}

// ---------------------------------------------------------------------------
// Classification bands
// ---------------------------------------------------------------------------

pub struct ScoreBand {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub const BANDS: &[ScoreBand] = &[
    ScoreBand { min: 750, max: 850, label: "Excellent", color: "#10b981", description: "Outstanding financial behavior" },
    ScoreBand { min: 700, max: 749, label: "Very Good", color: "#22c55e", description: "Great payment history" },
    ScoreBand { min: 650, max: 699, label: "Good", color: "#84cc16", description: "Good financial habits" },
    ScoreBand { min: 600, max: 649, label: "Fair", color: "#eab308", description: "Room for improvement" },
    ScoreBand { min: 550, max: 599, label: "Poor", color: "#f59e0b", description: "Needs attention" },
    ScoreBand { min: 300, max: 549, label: "Very Poor", color: "#ef4444", description: "Requires immediate action" },
];

/// Map a score to its band. Scores below 300 (possible only if the clamp in
/// `calculate_score` is bypassed) fall into the lowest band.
pub fn classify_score(score: u32) -> &'static ScoreBand {
    BANDS
        .iter()
        .find(|band| score >= band.min)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}
