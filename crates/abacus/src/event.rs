//! Input events accepted by the engine.

use crate::core::Operator;

/// A discrete key or button press.
///
/// Pointer clicks and keyboard keys both resolve to one of these before
/// reaching the engine (see [`crate::keymap`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A digit 0-9. Values above 9 are ignored.
    Digit(u8),
    /// The decimal point
    Decimal,
    /// A binary operator
    Operator(Operator),
    /// Resolve the pending operation
    Equals,
    /// Reset entry and pending operation
    Clear,
    /// [`Event::Clear`] plus history
    AllClear,
    /// Negate the display
    ToggleSign,
    /// Divide the display by 100
    Percent,
    /// `M+`
    MemoryAdd,
    /// `M-`
    MemorySubtract,
    /// `MR`
    MemoryRecall,
    /// Ask for the display to be copied
    CopyRequest,
    /// Flip the sound preference
    ToggleSound,
    /// Flip the dark-mode preference
    ToggleTheme,
}

impl Event {
    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
            Self::MemoryAdd => "M+".to_string(),
            Self::MemorySubtract => "M-".to_string(),
            Self::MemoryRecall => "MR".to_string(),
            Self::CopyRequest => "copy".to_string(),
            Self::ToggleSound => "sound".to_string(),
            Self::ToggleTheme => "theme".to_string(),
        }
    }

    /// True for events that read or write numbers.
    ///
    /// These are the events that dead-end while the display shows an error.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        !matches!(
            self,
            Self::Clear
                | Self::AllClear
                | Self::CopyRequest
                | Self::ToggleSound
                | Self::ToggleTheme
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_labels() {
        assert_eq!(Event::Digit(7).label(), "7");
        assert_eq!(Event::Decimal.label(), ".");
        assert_eq!(Event::Operator(Operator::Multiply).label(), "×");
        assert_eq!(Event::ToggleSign.label(), "+/-");
        assert_eq!(Event::AllClear.label(), "AC");
        assert_eq!(Event::MemoryRecall.label(), "MR");
    }

    #[test]
    fn test_event_is_arithmetic() {
        assert!(Event::Digit(1).is_arithmetic());
        assert!(Event::Equals.is_arithmetic());
        assert!(Event::MemoryRecall.is_arithmetic());
        assert!(!Event::Clear.is_arithmetic());
        assert!(!Event::CopyRequest.is_arithmetic());
        assert!(!Event::ToggleTheme.is_arithmetic());
    }
}
