use crate::score::ScoreFactors;

// ---------------------------------------------------------------------------
// Factor recommendations
// ---------------------------------------------------------------------------

/// Threshold-driven improvement tips. Each condition is evaluated
/// independently, in fixed order; several can fire at once.
pub fn recommendations(score: u32, factors: &ScoreFactors) -> Vec<&'static str> {
    let mut out = Vec::new();

    if factors.payment_history < 0.8 {
        out.push("Pay your bills on time to improve payment history");
    }
    if factors.expense_consistency < 0.6 {
        out.push("Make regular payments for consistent expense tracking");
    }
    if factors.amount_stability < 0.6 {
        out.push("Try to maintain consistent payment amounts");
    }
    if factors.diversity_bonus < 0.5 {
        out.push("Track more types of expenses to show financial responsibility");
    }
    if score >= 750 {
        out.push("Excellent! Keep maintaining your payment habits");
    }

    out
}

/// Band-level action list shown under the score report.
pub fn suggestions_for(score: u32) -> &'static [&'static str] {
    if score >= 750 {
        &[
            "Excellent! You're in the top tier of TCS scores",
            "Keep maintaining your consistent payment habits",
            "Continue diversifying your tracked expenses",
            "Your score puts you ahead of 90% of users",
        ]
    } else if score >= 700 {
        &[
            "Very good! You're close to excellent territory",
            "Focus on payment consistency to reach 750+",
            "Track more expense types for the diversity bonus",
            "Maintain timely payments for the next 2-3 months",
        ]
    } else if score >= 650 {
        &[
            "Good progress! You're on the right track",
            "Pay all bills before due dates this month",
            "Add more regular expenses like mobile recharge",
            "Include rent and utility payments consistently",
        ]
    } else if score >= 600 {
        &[
            "Fair score - significant improvement possible",
            "Focus on eliminating any overdue payments",
            "Track at least 5 different expense types",
            "Set payment reminders to avoid late payments",
        ]
    } else if score >= 550 {
        &[
            "Poor score - immediate action needed",
            "Clear any overdue payments immediately",
            "Start with 2-3 regular monthly payments",
            "Keep payment amounts steady month to month",
        ]
    } else {
        &[
            "Very poor - urgent improvement required",
            "Address all overdue payments first",
            "Begin by tracking just 1-2 regular expenses",
            "Build a streak of on-time payments",
        ]
    }
}

// ---------------------------------------------------------------------------
// Factor display metadata
// ---------------------------------------------------------------------------

pub struct FactorDetail {
    pub name: &'static str,
    pub weight: &'static str,
    pub description: &'static str,
    pub tip: &'static str,
}

pub const FACTOR_DETAILS: &[FactorDetail] = &[
    FactorDetail {
        name: "Payment History",
        weight: "35%",
        description: "Your track record of paying bills on time",
        tip: "Always pay bills before due date to maintain good history",
    },
    FactorDetail {
        name: "Expense Consistency",
        weight: "25%",
        description: "Regular pattern of expense payments",
        tip: "Make regular payments for utilities and subscriptions",
    },
    FactorDetail {
        name: "Amount Stability",
        weight: "25%",
        description: "Consistency in payment amounts",
        tip: "Maintain similar payment amounts for recurring expenses",
    },
    FactorDetail {
        name: "Expense Diversity",
        weight: "15%",
        description: "Variety of different expense types",
        tip: "Track different types of expenses to show financial responsibility",
    },
];

/// Pair each factor's display metadata with its current value.
pub fn factor_values(factors: &ScoreFactors) -> [(&'static FactorDetail, f64); 4] {
    [
        (&FACTOR_DETAILS[0], factors.payment_history),
        (&FACTOR_DETAILS[1], factors.expense_consistency),
        (&FACTOR_DETAILS[2], factors.amount_stability),
        (&FACTOR_DETAILS[3], factors.diversity_bonus),
    ]
}

// ---------------------------------------------------------------------------
// Canned replies
// ---------------------------------------------------------------------------

pub const GREETING: &str = "Hi! I'm the TCS advisor. I can help you understand your score and how \
to improve it. Ask a question, pick a numbered one, or type 'quit' to leave.";

pub const QUICK_QUESTIONS: &[&str] = &[
    "How can I improve my TCS score?",
    "Which expenses should I track?",
    "Why is my score low?",
    "What affects payment history?",
    "How often is my score updated?",
];

struct ReplyRule {
    /// Every keyword must appear in the lowercased message.
    all: &'static [&'static str],
    /// At least one must appear (ignored when empty).
    any: &'static [&'static str],
    reply: &'static str,
}

const REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        all: &["improve", "score"],
        any: &[],
        reply: "To improve your TCS score:\n\n  1. Pay every bill on time, every month\n  2. Track more of your recurring expenses (electricity, mobile, rent)\n  3. Keep payment amounts steady for recurring bills\n  4. Maintain regular payment patterns\n  5. Diversify the expense types you track\n\nPayment history carries the most weight at 35%.",
    },
    ReplyRule {
        all: &[],
        any: &["document", "upload", "track", "which expense"],
        reply: "The expense types that strengthen a TCS score:\n\n  mobile recharges, electricity bills, house rent, internet bills,\n  water bills, gas bills, insurance premiums\n\nRecurring entries of the same type count the most — two or more\npayments of a type mark it as a regular habit.",
    },
    ReplyRule {
        all: &[],
        any: &["low", "poor"],
        reply: "If your score is low, work the plan in this order:\n\n  1. Clear any overdue payments — they cost double\n  2. Get at least 3 recent bills marked paid\n  3. Keep a consistent payment schedule\n  4. Add more expense categories over time\n\nA score can climb 100+ points in a few months of steady habits.",
    },
    ReplyRule {
        all: &["payment", "history"],
        any: &[],
        reply: "Payment history is 35% of your TCS score — the most important factor.\n\nWhat helps: paying before due dates, zero overdue entries, regular\nmonthly patterns.\nWhat hurts: late or missed payments.\n\nAn overdue entry outweighs a paid one two to one, so clear overdue\nbills before anything else.",
    },
    ReplyRule {
        all: &[],
        any: &["update", "often"],
        reply: "The score is recomputed from your full expense history every time the\nlist changes — there is no caching and no schedule. Add or update an\nexpense and the new score shows immediately.",
    },
    ReplyRule {
        all: &[],
        any: &["hello", "hi"],
        reply: "Hello! Ask me about:\n\n  - improving your TCS score\n  - which expenses to track\n  - payment strategies\n  - what affects payment history\n\nWhat would you like to know?",
    },
];

const DEFAULT_REPLY: &str = "I can help with TCS score questions. Common topics:\n\n  - score improvement strategies\n  - which expense types to track\n  - understanding the score factors\n  - payment best practices\n\nCould you be more specific about what you'd like to know?";

fn rule_matches(message: &str, rule: &ReplyRule) -> bool {
    rule.all.iter().all(|kw| message.contains(kw))
        && (rule.any.is_empty() || rule.any.iter().any(|kw| message.contains(kw)))
}

/// Look up the canned reply for a message. First matching rule wins;
/// unmatched messages get the generic prompt for more detail.
pub fn reply_to(message: &str) -> &'static str {
    let message = message.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|rule| rule_matches(&message, rule))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(ph: f64, ec: f64, st: f64, div: f64) -> ScoreFactors {
        ScoreFactors {
            payment_history: ph,
            expense_consistency: ec,
            amount_stability: st,
            diversity_bonus: div,
        }
    }

    #[test]
    fn test_strong_factors_below_750_yield_no_recommendations() {
        let recs = recommendations(740, &factors(0.9, 0.9, 0.9, 0.9));
        assert!(recs.is_empty());
    }

    #[test]
    fn test_weak_factors_fire_in_fixed_order() {
        let recs = recommendations(400, &factors(0.1, 0.1, 0.1, 0.1));
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("on time"));
        assert!(recs[1].contains("regular payments"));
        assert!(recs[2].contains("consistent payment amounts"));
        assert!(recs[3].contains("more types"));
    }

    #[test]
    fn test_high_score_message_can_coexist_with_tips() {
        // High score but low diversity: both the praise and the tip fire.
        let recs = recommendations(800, &factors(1.0, 1.0, 1.0, 0.3));
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("more types"));
        assert!(recs[1].starts_with("Excellent"));
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Values exactly at the thresholds do not fire.
        let recs = recommendations(700, &factors(0.8, 0.6, 0.6, 0.5));
        assert!(recs.is_empty());
    }

    #[test]
    fn test_suggestions_cover_every_band() {
        for score in [850, 750, 700, 650, 600, 550, 300] {
            assert_eq!(suggestions_for(score).len(), 4);
        }
        assert!(suggestions_for(750)[0].starts_with("Excellent"));
        assert!(suggestions_for(749)[0].starts_with("Very good"));
        assert!(suggestions_for(300)[0].starts_with("Very poor"));
    }

    #[test]
    fn test_reply_improve_score() {
        let reply = reply_to("How can I improve my TCS score?");
        assert!(reply.starts_with("To improve your TCS score"));
    }

    #[test]
    fn test_reply_tracking_question() {
        let reply = reply_to("Which expenses should I track?");
        assert!(reply.contains("expense types that strengthen"));
    }

    #[test]
    fn test_reply_low_score_plan() {
        let reply = reply_to("Why is my score low?");
        assert!(reply.contains("work the plan"));
    }

    #[test]
    fn test_reply_payment_history_beats_greeting() {
        // "history" contains "hi"; the payment-history rule is ordered first.
        let reply = reply_to("What affects payment history?");
        assert!(reply.contains("35% of your TCS score"));
    }

    #[test]
    fn test_reply_greeting() {
        assert!(reply_to("hello there").starts_with("Hello!"));
    }

    #[test]
    fn test_reply_falls_back_to_default() {
        let reply = reply_to("what is the meaning of life?");
        assert!(reply.contains("more specific"));
    }

    #[test]
    fn test_factor_values_order_matches_details() {
        let vals = factor_values(&factors(0.1, 0.2, 0.3, 0.4));
        assert_eq!(vals[0].0.name, "Payment History");
        assert_eq!(vals[0].1, 0.1);
        assert_eq!(vals[3].0.name, "Expense Diversity");
        assert_eq!(vals[3].1, 0.4);
    }
}
