//! Key vocabulary.
//!
//! Button labels and keyboard key names both map to an [`Event`]. Word
//! tokens are case-insensitive; symbols match exactly.

use crate::core::Operator;
use crate::event::Event;

/// Maps a key token to its event, or `None` if the token is not a key
#[must_use]
pub fn parse_key(token: &str) -> Option<Event> {
    let token = token.trim();
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(event) = parse_char(c) {
            return Some(event);
        }
    }

    let event = match token.to_ascii_lowercase().as_str() {
        "enter" | "return" => Event::Equals,
        "c" | "esc" | "escape" => Event::Clear,
        "ac" => Event::AllClear,
        "+/-" | "neg" => Event::ToggleSign,
        "m+" => Event::MemoryAdd,
        "m-" => Event::MemorySubtract,
        "mr" => Event::MemoryRecall,
        "copy" | "ctrl+c" => Event::CopyRequest,
        "sound" => Event::ToggleSound,
        "theme" | "dark" => Event::ToggleTheme,
        _ => return None,
    };
    Some(event)
}

fn parse_char(c: char) -> Option<Event> {
    if let Some(d) = c.to_digit(10) {
        // to_digit(10) is at most 9
        return u8::try_from(d).ok().map(Event::Digit);
    }
    match c {
        '.' | ',' => Some(Event::Decimal),
        '=' => Some(Event::Equals),
        '%' => Some(Event::Percent),
        '±' => Some(Event::ToggleSign),
        _ => Operator::from_char(c).map(Event::Operator),
    }
}
