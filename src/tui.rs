use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::Frame;

use crate::error::Result;
use crate::fmt::money;
use crate::models::ExpenseStatus;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

/// Band/status hex color as a ratatui color, gray when malformed.
pub fn hex_color(hex: &str) -> Color {
    match crate::fmt::hex_rgb(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::DarkGray,
    }
}

pub fn status_color(status: ExpenseStatus) -> Color {
    match status {
        ExpenseStatus::Paid => hex_color("#10b981"),
        ExpenseStatus::Pending => hex_color("#f59e0b"),
        ExpenseStatus::Overdue => hex_color("#ef4444"),
    }
}

/// Format an amount as a Span colored by its payment status.
pub fn money_span(amount: f64, status: ExpenseStatus) -> Span<'static> {
    Span::styled(money(amount), Style::default().fg(status_color(status)))
}

/// Wrap text to a given width. Returns (wrapped_string, line_count).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let lines = wrapped.lines().count().max(1) as u16;
    (wrapped, lines)
}

// ---------------------------------------------------------------------------
// View infrastructure
// ---------------------------------------------------------------------------

pub enum ViewAction {
    Continue,
    Close,
}

pub trait View {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, code: KeyCode) -> ViewAction;
}

/// Run an interactive ratatui view. Sets up the terminal, event loop, and
/// panic hook, then restores the terminal on exit.
pub fn run_view(view: &mut dyn View) -> Result<()> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| view.draw(frame)) {
            break Err(e.into());
        }

        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break Ok(());
                }
                match view.handle_key(key.code) {
                    ViewAction::Close => break Ok(()),
                    ViewAction::Continue => {}
                }
            }
            _ => {}
        }
    };

    drop(terminal);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses_band_colors() {
        assert_eq!(hex_color("#10b981"), Color::Rgb(0x10, 0xb9, 0x81));
        assert_eq!(hex_color("#ef4444"), Color::Rgb(0xef, 0x44, 0x44));
    }

    #[test]
    fn test_hex_color_falls_back_on_garbage() {
        assert_eq!(hex_color("red"), Color::DarkGray);
        assert_eq!(hex_color("#zzzzzz"), Color::DarkGray);
        assert_eq!(hex_color(""), Color::DarkGray);
    }

    #[test]
    fn test_wrap_text_counts_lines() {
        let (wrapped, lines) = wrap_text("one two three four five six seven eight", 10);
        assert!(lines > 1);
        assert!(wrapped.lines().all(|l| l.len() <= 10));
    }

    #[test]
    fn test_wrap_text_zero_width_passthrough() {
        let (wrapped, lines) = wrap_text("hello", 0);
        assert_eq!(wrapped, "hello");
        assert_eq!(lines, 1);
    }
}
