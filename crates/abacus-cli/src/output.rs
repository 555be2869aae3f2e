//! Rendering of sessions, history and the keypad

use abacus::core::format::format_number;
use abacus::core::history::History;
use abacus::{CalculatorSession, Keypad};
use console::style;

/// Width of the display line
const DISPLAY_WIDTH: usize = 24;

/// Turns engine state into terminal text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether to use colors
    pub use_color: bool,
}

impl Renderer {
    /// Create a new renderer
    #[must_use]
    pub const fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// The display, right-aligned, with a status line when anything is set
    #[must_use]
    pub fn session(&self, session: &CalculatorSession) -> String {
        let text = format!("{:>DISPLAY_WIDTH$}", session.display());
        let mut display = style(text).force_styling(self.use_color).bold();
        if session.is_error() {
            display = display.red();
        } else if session.dark_mode() {
            display = display.white().on_black();
        }

        let status = Self::status(session);
        if status.is_empty() {
            display.to_string()
        } else {
            let status = style(format!("{status:>DISPLAY_WIDTH$}"))
                .force_styling(self.use_color)
                .dim();
            format!("{status}\n{display}")
        }
    }

    fn status(session: &CalculatorSession) -> String {
        let mut parts = Vec::new();
        if let (Some(lhs), Some(op)) = (session.accumulator(), session.pending_operator()) {
            parts.push(format!("{} {}", format_number(lhs), op.symbol()));
        }
        if let Some(memory) = session.memory() {
            parts.push(format!("M {}", format_number(memory)));
        }
        if !session.sound_enabled() {
            parts.push("muted".to_string());
        }
        if session.dark_mode() {
            parts.push("dark".to_string());
        }
        parts.join("  ")
    }

    /// History entries, numbered newest first
    #[must_use]
    pub fn history(&self, history: &History) -> String {
        if history.is_empty() {
            return style("(no history)")
                .force_styling(self.use_color)
                .dim()
                .to_string();
        }
        history
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let index = style(format!("{:>2}.", i + 1))
                    .force_styling(self.use_color)
                    .dim();
                format!("{index} {entry}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The keypad grid
    #[must_use]
    pub fn keypad(&self, keypad: &Keypad) -> String {
        keypad
            .rows()
            .map(|row| {
                row.iter()
                    .map(|button| {
                        let label = style(format!("{:^4}", button.label))
                            .force_styling(self.use_color)
                            .cyan();
                        format!("[{label}]")
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use abacus::Calculator;

    fn session_after(keys: &str) -> CalculatorSession {
        let mut calc = Calculator::new();
        for key in keys.split_whitespace() {
            calc.submit_key(key).unwrap();
        }
        calc.current_state().clone()
    }

    #[test]
    fn test_plain_session() {
        let out = Renderer::new(false).session(&session_after("4 2"));
        assert_eq!(out.trim(), "42");
        assert_eq!(out.len(), DISPLAY_WIDTH);
    }

    #[test]
    fn test_status_line() {
        let out = Renderer::new(false).session(&session_after("3 M+ 5 + sound"));
        let lines: Vec<_> = out.lines().map(str::trim).collect();
        assert_eq!(lines, ["35 +  M 3  muted", "35"]);
    }

    #[test]
    fn test_error_session() {
        let out = Renderer::new(false).session(&session_after("1 / 0 ="));
        assert_eq!(out.trim(), "Error");
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let out = Renderer::new(true).session(&session_after("7"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_history() {
        let renderer = Renderer::new(false);
        assert_eq!(renderer.history(&History::new()), "(no history)");

        let session = session_after("1 + 1 = * 3 =");
        let out = renderer.history(session.history());
        assert_eq!(out, " 1. 2 * 3 = 6\n 2. 1 + 1 = 2");
    }

    #[test]
    fn test_keypad() {
        let out = Renderer::new(false).keypad(&Keypad::new());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[ MR ] [ M+ ] [ M- ] [ C  ]");
        assert_eq!(lines[5], "[ 0  ] [ .  ] [copy] [ =  ]");
    }
}
