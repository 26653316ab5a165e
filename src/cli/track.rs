use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};

use crate::advisor;
use crate::error::Result;
use crate::fmt::money;
use crate::ledger::Ledger;
use crate::models::{type_icon, ExpenseRecord, EXPENSE_TYPES};
use crate::reports;
use crate::score::{self, ScoreResult, BASE_SCORE, MAX_SCORE};
use crate::tui::{
    hex_color, money_span, run_view, status_color, wrap_text, View, ViewAction, FOOTER_STYLE,
    HEADER_STYLE, SELECTED_STYLE,
};

enum TrackerState {
    List,
    PickType,
    EnterAmount,
}

struct Tracker {
    ledger: Ledger,
    result: ScoreResult,
    state: TrackerState,
    selection: usize,
    type_selection: usize,
    amount_input: String,
}

impl Tracker {
    fn new(expenses: Vec<ExpenseRecord>) -> Self {
        let result = score::calculate_score(&expenses);
        Self {
            ledger: Ledger::new(expenses),
            result,
            state: TrackerState::List,
            selection: 0,
            type_selection: 0,
            amount_input: String::new(),
        }
    }

    fn rescore(&mut self) {
        self.result = score::calculate_score(self.ledger.expenses());
    }

    fn selected_id(&self) -> Option<u32> {
        self.ledger.expenses().get(self.selection).map(|e| e.id)
    }

    fn clamp_selection(&mut self) {
        if self.selection >= self.ledger.len() {
            self.selection = self.ledger.len().saturating_sub(1);
        }
    }

    fn draw_list(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines: Vec<Line> = Vec::new();
        for (i, e) in self.ledger.expenses().iter().enumerate() {
            let row = Line::from(vec![
                Span::raw(format!(" {:>3}  {:10}  ", e.id, e.date)),
                Span::raw(format!(
                    "{} {:<18}",
                    type_icon(&e.expense_type),
                    e.expense_type
                )),
                money_span(e.amount, e.status),
                Span::raw("  "),
                Span::styled(e.status.as_str(), Style::default().fg(status_color(e.status))),
            ]);
            if i == self.selection {
                lines.push(row.style(SELECTED_STYLE));
            } else {
                lines.push(row);
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                " No expenses yet — press 'a' to add one.",
                FOOTER_STYLE,
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_type_picker(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines: Vec<Line> = vec![Line::from(Span::styled("Expense type:", HEADER_STYLE))];
        for (i, (name, icon)) in EXPENSE_TYPES.iter().enumerate() {
            let row = Line::from(format!("  {icon} {name}"));
            if i == self.type_selection {
                lines.push(row.style(SELECTED_STYLE));
            } else {
                lines.push(row);
            }
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_amount_input(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let (name, icon) = EXPENSE_TYPES[self.type_selection];
        let lines = vec![
            Line::from(Span::styled("New expense:", HEADER_STYLE)),
            Line::from(format!("  {icon} {name}")),
            Line::from(format!("  Amount: ₹{}▏", self.amount_input)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl View for Tracker {
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, gauge_area, summary_area, body_area, recs_area, hints_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(area);

        let band = score::classify_score(self.result.score);

        // Header
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("TCS Expense Tracker", HEADER_STYLE))),
            header_area,
        );

        // Live score gauge
        let ratio = (self.result.score - BASE_SCORE) as f64 / (MAX_SCORE - BASE_SCORE) as f64;
        let gauge = LineGauge::default()
            .label(format!("{} {}", self.result.score, band.label))
            .ratio(ratio)
            .filled_style(Style::default().fg(hex_color(band.color)).bold())
            .unfilled_style(FOOTER_STYLE)
            .line_set(ratatui::symbols::line::THICK);
        frame.render_widget(gauge, gauge_area);

        // Summary
        let summary = reports::summarize(self.ledger.expenses());
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(format!("{} expenses   ", summary.count)),
                Span::raw(format!("Total {}   ", money(summary.total))),
                Span::styled(format!("Paid {}   ", money(summary.paid)), Style::default().fg(hex_color("#10b981"))),
                Span::styled(format!("Pending {}   ", money(summary.pending)), Style::default().fg(hex_color("#f59e0b"))),
                Span::styled(format!("Overdue {}", money(summary.overdue)), Style::default().fg(hex_color("#ef4444"))),
            ])),
            summary_area,
        );

        match self.state {
            TrackerState::List => self.draw_list(frame, body_area),
            TrackerState::PickType => self.draw_type_picker(frame, body_area),
            TrackerState::EnterAmount => self.draw_amount_input(frame, body_area),
        }

        // Recommendations
        let recommendations =
            advisor::recommendations(self.result.score, &self.result.factors);
        if !recommendations.is_empty() {
            let (wrapped, _) = wrap_text(
                &recommendations.join("  •  "),
                recs_area.width.saturating_sub(2) as usize,
            );
            frame.render_widget(
                Paragraph::new(wrapped).style(Style::default().fg(hex_color("#eab308"))),
                recs_area,
            );
        }

        let hints = match self.state {
            TrackerState::List => "↑/↓ select   a add   s cycle status   d delete   q quit",
            TrackerState::PickType => "↑/↓ choose type   Enter next   Esc cancel",
            TrackerState::EnterAmount => "type an amount   Enter add   Esc cancel",
        };
        frame.render_widget(Paragraph::new(hints).style(FOOTER_STYLE), hints_area);
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        match self.state {
            TrackerState::List => match code {
                KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selection = self.selection.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selection + 1 < self.ledger.len() {
                        self.selection += 1;
                    }
                }
                KeyCode::Char('a') => {
                    self.type_selection = 0;
                    self.state = TrackerState::PickType;
                }
                KeyCode::Char('s') | KeyCode::Char(' ') => {
                    if let Some(id) = self.selected_id() {
                        self.ledger.cycle_status(id);
                        self.rescore();
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(id) = self.selected_id() {
                        self.ledger.remove(id);
                        self.clamp_selection();
                        self.rescore();
                    }
                }
                _ => {}
            },
            TrackerState::PickType => match code {
                KeyCode::Esc => self.state = TrackerState::List,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.type_selection = self.type_selection.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.type_selection + 1 < EXPENSE_TYPES.len() {
                        self.type_selection += 1;
                    }
                }
                KeyCode::Enter => {
                    self.amount_input.clear();
                    self.state = TrackerState::EnterAmount;
                }
                _ => {}
            },
            TrackerState::EnterAmount => match code {
                KeyCode::Esc => self.state = TrackerState::List,
                KeyCode::Backspace => {
                    self.amount_input.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                    self.amount_input.push(c);
                }
                KeyCode::Enter => {
                    if let Ok(amount) = self.amount_input.parse::<f64>() {
                        if amount > 0.0 {
                            let (name, _) = EXPENSE_TYPES[self.type_selection];
                            self.ledger.add(name, amount, None);
                            self.selection = self.ledger.len() - 1;
                            self.rescore();
                            self.state = TrackerState::List;
                        }
                    }
                }
                _ => {}
            },
        }
        ViewAction::Continue
    }
}

pub fn run(file: Option<String>) -> Result<()> {
    let expenses = super::resolve_expenses(file.as_deref())?;
    let mut tracker = Tracker::new(expenses);
    run_view(&mut tracker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::sample_expenses;
    use crate::models::ExpenseStatus;

    fn press(tracker: &mut Tracker, code: KeyCode) {
        tracker.handle_key(code);
    }

    #[test]
    fn test_add_flow_creates_pending_expense() {
        let mut tracker = Tracker::new(sample_expenses());
        press(&mut tracker, KeyCode::Char('a'));
        press(&mut tracker, KeyCode::Down);
        press(&mut tracker, KeyCode::Down);
        press(&mut tracker, KeyCode::Enter);
        for c in "600".chars() {
            press(&mut tracker, KeyCode::Char(c));
        }
        press(&mut tracker, KeyCode::Enter);

        assert_eq!(tracker.ledger.len(), 6);
        let added = tracker.ledger.expenses().last().unwrap();
        assert_eq!(added.expense_type, "House Rent");
        assert_eq!(added.amount, 600.0);
        assert_eq!(added.status, ExpenseStatus::Pending);
        assert!(matches!(tracker.state, TrackerState::List));
    }

    #[test]
    fn test_add_flow_rejects_empty_amount() {
        let mut tracker = Tracker::new(sample_expenses());
        press(&mut tracker, KeyCode::Char('a'));
        press(&mut tracker, KeyCode::Enter);
        press(&mut tracker, KeyCode::Enter);
        // Still collecting an amount; nothing was added.
        assert!(matches!(tracker.state, TrackerState::EnterAmount));
        assert_eq!(tracker.ledger.len(), 5);
    }

    #[test]
    fn test_cycle_status_rescores() {
        let mut tracker = Tracker::new(sample_expenses());
        let before = tracker.result.score;
        // First row is paid; two presses make it overdue.
        press(&mut tracker, KeyCode::Char('s'));
        press(&mut tracker, KeyCode::Char('s'));
        assert_eq!(
            tracker.ledger.expenses()[0].status,
            ExpenseStatus::Overdue
        );
        assert!(tracker.result.score < before);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut tracker = Tracker::new(sample_expenses());
        for _ in 0..4 {
            press(&mut tracker, KeyCode::Down);
        }
        assert_eq!(tracker.selection, 4);
        press(&mut tracker, KeyCode::Char('d'));
        assert_eq!(tracker.ledger.len(), 4);
        assert_eq!(tracker.selection, 3);
    }

    #[test]
    fn test_escape_backs_out_of_add() {
        let mut tracker = Tracker::new(sample_expenses());
        press(&mut tracker, KeyCode::Char('a'));
        assert!(matches!(tracker.state, TrackerState::PickType));
        press(&mut tracker, KeyCode::Esc);
        assert!(matches!(tracker.state, TrackerState::List));
    }
}
