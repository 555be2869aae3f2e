//! The keypad state machine.
//!
//! [`transition`] is the whole engine: a pure function from the current
//! session and one event to the next session plus the effect intents the
//! caller must run. [`Calculator`] holds a session and swaps it per event.

use crate::core::format::{format_number, format_outcome, parse_display};
use crate::core::Operator;
use crate::effect::{Effect, SoundCue};
use crate::error::{AbacusError, AbacusResult};
use crate::event::Event;
use crate::keymap::parse_key;
use crate::session::{CalculatorSession, InputState};
use crate::snapshot::Snapshot;
use crate::store::SnapshotStore;
use tracing::{debug, trace, warn};

/// Outcome of one event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The session after the event
    pub session: CalculatorSession,
    /// Intents to execute, in order
    pub effects: Vec<Effect>,
}

/// Computes the session that follows `event`.
///
/// Rejected events (a second decimal point, arithmetic while the display
/// shows an error, `MR` with an empty register...) return an identical
/// session and no `Persist` intent.
#[must_use]
pub fn transition(session: &CalculatorSession, event: Event) -> Transition {
    let mut next = session.clone();
    next.apply(event);

    let mut effects = Vec::new();
    if event == Event::CopyRequest {
        effects.push(Effect::CopyToClipboard(next.display.clone()));
    }
    if next.sound_enabled {
        let cue = if next.is_error() && !session.is_error() {
            SoundCue::Alert
        } else {
            SoundCue::Click
        };
        effects.push(Effect::PlaySound(cue));
    }
    if next == *session {
        trace!(?event, "event left session unchanged");
    } else {
        debug!(?event, display = %next.display, state = ?next.state, "transition");
        effects.push(Effect::Persist(Snapshot::from(&next)));
    }

    Transition {
        session: next,
        effects,
    }
}

impl CalculatorSession {
    fn apply(&mut self, event: Event) {
        if self.is_error() && event.is_arithmetic() {
            return;
        }

        match event {
            Event::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.enter(c);
                }
            }
            Event::Decimal => self.enter('.'),
            Event::Operator(op) => self.choose_operator(op),
            Event::Equals => self.equals(),
            Event::Clear => self.clear(),
            Event::AllClear => {
                self.clear();
                self.history.clear();
            }
            Event::ToggleSign => self.rewrite_display(|v| -v),
            Event::Percent => self.rewrite_display(|v| v / 100.0),
            Event::MemoryAdd => self.update_memory(1.0),
            Event::MemorySubtract => self.update_memory(-1.0),
            Event::MemoryRecall => self.recall_memory(),
            Event::CopyRequest => {}
            Event::ToggleSound => self.sound_enabled = !self.sound_enabled,
            Event::ToggleTheme => self.dark_mode = !self.dark_mode,
        }
    }

    fn operand(&self) -> Option<f64> {
        parse_display(&self.display)
    }

    fn enter(&mut self, c: char) {
        // exponential displays only come from sign/percent; never append to them
        let entered = if self.awaiting_fresh_operand() || self.display.contains('e') {
            if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            }
        } else if c == '.' {
            if self.display.contains('.') {
                return;
            }
            format!("{}.", self.display)
        } else if self.display == "0" {
            c.to_string()
        } else {
            format!("{}{c}", self.display)
        };

        // the display must keep parsing to a finite number
        if parse_display(&entered).is_none() {
            trace!(len = entered.len(), "key would overflow the display, ignored");
            return;
        }
        self.display = entered;

        self.state = match self.state {
            InputState::OperationPending {
                accumulator,
                operator,
                ..
            } => InputState::OperationPending {
                accumulator,
                operator,
                awaiting_operand: false,
            },
            _ => InputState::entry(&self.display),
        };
    }

    fn choose_operator(&mut self, op: Operator) {
        let Some(rhs) = self.operand() else {
            return;
        };

        let accumulator = match self.state {
            InputState::OperationPending {
                accumulator,
                operator,
                ..
            } => match self.resolve(accumulator, operator, rhs) {
                Some(result) => result,
                None => return,
            },
            _ => rhs,
        };

        self.state = InputState::OperationPending {
            accumulator,
            operator: op,
            awaiting_operand: true,
        };
    }

    fn equals(&mut self) {
        let InputState::OperationPending {
            accumulator,
            operator,
            ..
        } = self.state
        else {
            return;
        };
        let Some(rhs) = self.operand() else {
            return;
        };

        if self.resolve(accumulator, operator, rhs).is_some() {
            self.state = InputState::AwaitingOperand;
        }
    }

    /// Applies a pending operation, shows and records the outcome.
    ///
    /// Returns the raw result, or `None` after switching to the error state.
    fn resolve(&mut self, lhs: f64, operator: Operator, rhs: f64) -> Option<f64> {
        let outcome = operator.apply(lhs, rhs);
        let shown = format_outcome(outcome);
        self.history.record(lhs, operator, rhs, &shown);

        match outcome {
            Ok(result) => {
                self.display = shown;
                Some(result)
            }
            Err(err) => {
                debug!(%err, lhs, rhs, operator = %operator, "arithmetic error");
                self.show_error();
                None
            }
        }
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.state = InputState::Idle;
    }

    fn rewrite_display(&mut self, f: impl FnOnce(f64) -> f64) {
        let Some(value) = self.operand() else {
            return;
        };
        self.display = format_number(f(value));
        if matches!(self.state, InputState::Idle | InputState::OperandEntry) {
            self.state = InputState::entry(&self.display);
        }
    }

    fn update_memory(&mut self, sign: f64) {
        let Some(value) = self.operand() else {
            return;
        };
        let updated = self.memory.unwrap_or(0.0) + sign * value;
        if updated.is_finite() {
            self.memory = Some(updated);
        } else {
            debug!(updated, "memory update overflowed, ignored");
        }
    }

    fn recall_memory(&mut self) {
        let Some(memory) = self.memory else {
            return;
        };
        self.display = format_number(memory);
        self.state = match self.state {
            InputState::OperationPending {
                accumulator,
                operator,
                ..
            } => InputState::OperationPending {
                accumulator,
                operator,
                awaiting_operand: true,
            },
            _ => InputState::AwaitingOperand,
        };
    }
}

/// A calculator holding one live session
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    session: CalculatorSession,
}

impl Calculator {
    /// Creates a calculator with a fresh session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing session
    #[must_use]
    pub fn from_session(session: CalculatorSession) -> Self {
        Self { session }
    }

    /// Hydrates from a snapshot store.
    ///
    /// A missing, unreadable or corrupt snapshot yields a fresh session.
    #[must_use]
    pub fn load_from<S: SnapshotStore + ?Sized>(store: &S) -> Self {
        match store.load() {
            Ok(blob) => Self::from_session(CalculatorSession::restore(blob.as_deref())),
            Err(err) => {
                warn!(%err, "could not read snapshot, starting fresh");
                Self::new()
            }
        }
    }

    /// Read-only view for rendering
    #[must_use]
    pub const fn current_state(&self) -> &CalculatorSession {
        &self.session
    }

    /// Snapshot of the current session
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.session)
    }

    /// Applies one event and returns the intents to execute
    pub fn submit(&mut self, event: Event) -> Vec<Effect> {
        let Transition { session, effects } = transition(&self.session, event);
        self.session = session;
        effects
    }

    /// Maps a key token (button label or keyboard key) and submits it
    pub fn submit_key(&mut self, key: &str) -> AbacusResult<Vec<Effect>> {
        let event = parse_key(key).ok_or_else(|| AbacusError::unknown_key(key))?;
        Ok(self.submit(event))
    }
}
