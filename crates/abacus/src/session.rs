//! The calculator session: everything the engine owns.

use crate::core::format::ERROR_DISPLAY;
use crate::core::history::History;
use crate::core::Operator;

/// Input mode of the session.
///
/// Each variant carries only the data that is valid in it, so a pending
/// operator can never exist without its left operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// Nothing pending, display shows `0`
    Idle,
    /// Nothing pending, a number is being typed
    OperandEntry,
    /// Nothing pending, the display holds a settled value (after `=` or
    /// `MR`); the next digit starts a new number
    AwaitingOperand,
    /// An operator waits for its right-hand operand
    OperationPending {
        /// Left-hand operand
        accumulator: f64,
        /// Operator to apply
        operator: Operator,
        /// True until the first digit of the right operand is typed
        awaiting_operand: bool,
    },
    /// The display shows the error sentinel; only a clear leaves this state
    Error,
}

impl InputState {
    /// The resting state for a display with nothing pending
    #[must_use]
    pub fn entry(display: &str) -> Self {
        if display == "0" {
            Self::Idle
        } else {
            Self::OperandEntry
        }
    }

    /// True if the next digit replaces the display
    #[must_use]
    pub const fn awaiting_fresh_operand(&self) -> bool {
        match self {
            Self::AwaitingOperand | Self::Error => true,
            Self::OperationPending {
                awaiting_operand, ..
            } => *awaiting_operand,
            Self::Idle | Self::OperandEntry => false,
        }
    }
}

/// One running calculator.
///
/// Sessions are values: the engine never edits one in place where a
/// caller can see it, it produces the next session from the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    pub(crate) display: String,
    pub(crate) state: InputState,
    pub(crate) memory: Option<f64>,
    pub(crate) history: History,
    pub(crate) sound_enabled: bool,
    pub(crate) dark_mode: bool,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Creates a fresh session showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            state: InputState::Idle,
            memory: None,
            history: History::new(),
            sound_enabled: true,
            dark_mode: false,
        }
    }

    /// The exact text on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The input mode
    #[must_use]
    pub const fn state(&self) -> InputState {
        self.state
    }

    /// Left operand of the pending operation
    #[must_use]
    pub const fn accumulator(&self) -> Option<f64> {
        match self.state {
            InputState::OperationPending { accumulator, .. } => Some(accumulator),
            _ => None,
        }
    }

    /// Operator waiting for its right operand
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        match self.state {
            InputState::OperationPending { operator, .. } => Some(operator),
            _ => None,
        }
    }

    /// True if the next digit starts a new number
    #[must_use]
    pub const fn awaiting_fresh_operand(&self) -> bool {
        self.state.awaiting_fresh_operand()
    }

    /// True while the display shows the error sentinel
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.state, InputState::Error)
    }

    /// Memory register
    #[must_use]
    pub const fn memory(&self) -> Option<f64> {
        self.memory
    }

    /// Completed operations, newest first
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Sound preference
    #[must_use]
    pub const fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Dark-mode preference
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub(crate) fn show_error(&mut self) {
        self.display = ERROR_DISPLAY.to_string();
        self.state = InputState::Error;
    }
}
