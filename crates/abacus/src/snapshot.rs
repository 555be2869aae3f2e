//! Persisted form of a session.
//!
//! The field names match the blob the browser component kept in local
//! storage, so an existing slot can be read back:
//!
//! ```json
//! {"display":"12","currentValue":5.0,"operation":"+","memory":null,
//!  "isDarkMode":false,"history":["1 + 1 = 2"],"soundEnabled":true,
//!  "waitingForOperand":false}
//! ```

use crate::core::format::{is_display_literal, ERROR_DISPLAY};
use crate::core::history::History;
use crate::core::Operator;
use crate::error::{AbacusError, AbacusResult};
use crate::session::{CalculatorSession, InputState};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Serializable session snapshot.
///
/// Missing fields take the values of a fresh session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Display text
    pub display: String,
    /// Left operand of the pending operation
    pub current_value: Option<f64>,
    /// Pending operator
    pub operation: Option<Operator>,
    /// Memory register
    pub memory: Option<f64>,
    /// Dark-mode preference
    pub is_dark_mode: bool,
    /// Completed operations, newest first
    pub history: Vec<String>,
    /// Sound preference
    pub sound_enabled: bool,
    /// Next digit starts a new number
    pub waiting_for_operand: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from(&CalculatorSession::new())
    }
}

impl Snapshot {
    /// Encodes as JSON
    pub fn to_json(&self) -> AbacusResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes as indented JSON
    pub fn to_json_pretty(&self) -> AbacusResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes from JSON
    pub fn from_json(json: &str) -> AbacusResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&CalculatorSession> for Snapshot {
    fn from(session: &CalculatorSession) -> Self {
        Self {
            display: session.display.clone(),
            current_value: session.accumulator(),
            operation: session.pending_operator(),
            memory: session.memory,
            is_dark_mode: session.dark_mode,
            history: session.history.to_vec(),
            sound_enabled: session.sound_enabled,
            waiting_for_operand: session.awaiting_fresh_operand(),
        }
    }
}

impl TryFrom<Snapshot> for CalculatorSession {
    type Error = AbacusError;

    fn try_from(snapshot: Snapshot) -> AbacusResult<Self> {
        if !is_display_literal(&snapshot.display) {
            return Err(AbacusError::invalid_snapshot(format!(
                "display {:?} is not keypad text",
                snapshot.display
            )));
        }

        let state = if snapshot.display == ERROR_DISPLAY {
            InputState::Error
        } else {
            match (snapshot.current_value, snapshot.operation) {
                (Some(accumulator), Some(operator)) => InputState::OperationPending {
                    accumulator,
                    operator,
                    awaiting_operand: snapshot.waiting_for_operand,
                },
                (None, None) if snapshot.waiting_for_operand => InputState::AwaitingOperand,
                (None, None) => InputState::entry(&snapshot.display),
                (Some(_), None) => {
                    return Err(AbacusError::invalid_snapshot(
                        "accumulator without operation",
                    ))
                }
                (None, Some(_)) => {
                    return Err(AbacusError::invalid_snapshot(
                        "operation without accumulator",
                    ))
                }
            }
        };

        if snapshot.memory.is_some_and(|m| !m.is_finite()) {
            return Err(AbacusError::invalid_snapshot("memory is not finite"));
        }

        Ok(Self {
            display: snapshot.display,
            state,
            memory: snapshot.memory,
            history: History::from_entries(snapshot.history),
            sound_enabled: snapshot.sound_enabled,
            dark_mode: snapshot.is_dark_mode,
        })
    }
}

impl CalculatorSession {
    /// Hydrates a session from a stored blob.
    ///
    /// `None`, undecodable JSON and impossible sessions all fall back to a
    /// fresh session; startup never fails because of a bad slot.
    #[must_use]
    pub fn restore(blob: Option<&str>) -> Self {
        let Some(blob) = blob else {
            return Self::new();
        };
        match Snapshot::from_json(blob).and_then(Self::try_from) {
            Ok(session) => session,
            Err(err) => {
                warn!(%err, "discarding stored snapshot");
                Self::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::Calculator;
    use crate::event::Event;

    fn session_after(keys: &[&str]) -> CalculatorSession {
        let mut calc = Calculator::new();
        for key in keys {
            calc.submit_key(key).unwrap();
        }
        calc.current_state().clone()
    }

    fn round_trip(session: &CalculatorSession) -> CalculatorSession {
        let json = Snapshot::from(session).to_json().unwrap();
        CalculatorSession::restore(Some(&json))
    }

    #[test]
    fn test_snapshot_field_names() {
        let json = Snapshot::default().to_json().unwrap();
        for field in [
            "\"display\"",
            "\"currentValue\"",
            "\"operation\"",
            "\"memory\"",
            "\"isDarkMode\"",
            "\"history\"",
            "\"soundEnabled\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn test_snapshot_of_pending_operation() {
        let snapshot = Snapshot::from(&session_after(&["1", "2", "+"]));
        assert_eq!(snapshot.display, "12");
        assert_eq!(snapshot.current_value, Some(12.0));
        assert_eq!(snapshot.operation, Some(Operator::Add));
        assert!(snapshot.waiting_for_operand);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"operation\":\"+\""));
    }

    #[test]
    fn test_round_trip_states() {
        let cases: Vec<Vec<&str>> = vec![
            vec![],
            vec!["0"],
            vec!["4", "."],
            vec!["4", "+"],
            vec!["4", "+", "5"],
            vec!["4", "+", "5", "="],
            vec!["4", "/", "0", "="],
            vec!["9", "M+", "theme", "sound", "MR"],
            vec!["1", "+", "1", "=", "*", "3", "=", "AC", "2"],
        ];
        for keys in cases {
            let session = session_after(&keys);
            assert_eq!(round_trip(&session), session, "keys {keys:?}");
        }
    }

    #[test]
    fn test_round_trip_preserves_accumulator_precision() {
        let session = session_after(&["1", "/", "3", "*"]);
        let restored = round_trip(&session);
        assert_eq!(restored.accumulator(), Some(1.0 / 3.0));
    }

    #[test]
    fn test_restore_none_is_fresh() {
        assert_eq!(CalculatorSession::restore(None), CalculatorSession::new());
    }

    #[test]
    fn test_restore_corrupt_json_is_fresh() {
        assert_eq!(
            CalculatorSession::restore(Some("{not json")),
            CalculatorSession::new()
        );
    }

    #[test]
    fn test_restore_partial_blob_uses_defaults() {
        let session = CalculatorSession::restore(Some(r#"{"display":"42","memory":3.5}"#));
        assert_eq!(session.display(), "42");
        assert_eq!(session.memory(), Some(3.5));
        assert_eq!(session.state(), InputState::OperandEntry);
        assert!(session.sound_enabled());
    }

    #[test]
    fn test_restore_blob_without_waiting_flag() {
        let blob = r#"{"display":"7","currentValue":2,"operation":"*","memory":null,
            "isDarkMode":true,"history":[],"soundEnabled":false}"#;
        let mut calc = Calculator::from_session(CalculatorSession::restore(Some(blob)));
        assert!(calc.current_state().dark_mode());
        calc.submit(Event::Equals);
        assert_eq!(calc.current_state().display(), "14");
    }

    #[test]
    fn test_restore_rejects_non_numeric_display() {
        let blob = r#"{"display":"12abc"}"#;
        assert_eq!(CalculatorSession::restore(Some(blob)), CalculatorSession::new());
        let err = Snapshot::from_json(blob)
            .and_then(CalculatorSession::try_from)
            .unwrap_err();
        assert!(matches!(err, AbacusError::InvalidSnapshot { .. }));
    }

    #[test]
    fn test_restore_rejects_signed_zero_display() {
        let blob = r#"{"display":"-0"}"#;
        let err = Snapshot::from_json(blob)
            .and_then(CalculatorSession::try_from)
            .unwrap_err();
        assert!(matches!(err, AbacusError::InvalidSnapshot { .. }));

        let mut calc = Calculator::from_session(CalculatorSession::restore(Some(blob)));
        calc.submit(Event::Digit(5));
        assert_eq!(calc.current_state().display(), "5");
    }

    #[test]
    fn test_restore_rejects_foreign_number_forms() {
        for display in ["+5", "05", "1e5", "1E5", "0x10"] {
            let snapshot = Snapshot {
                display: display.to_string(),
                ..Snapshot::default()
            };
            let err = CalculatorSession::try_from(snapshot).unwrap_err();
            assert!(
                matches!(err, AbacusError::InvalidSnapshot { .. }),
                "{display}"
            );
        }
    }

    #[test]
    fn test_restore_accepts_keypad_displays() {
        for display in ["4.", "-0.5", "1.50", "3.33333e-1", "1.23457e+10"] {
            let snapshot = Snapshot {
                display: display.to_string(),
                ..Snapshot::default()
            };
            let session = CalculatorSession::try_from(snapshot).unwrap();
            assert_eq!(session.display(), display);
        }
    }

    #[test]
    fn test_restore_rejects_operation_without_accumulator() {
        let blob = r#"{"display":"3","operation":"-"}"#;
        let err = Snapshot::from_json(blob)
            .and_then(CalculatorSession::try_from)
            .unwrap_err();
        assert!(err.to_string().contains("operation without accumulator"));
    }

    #[test]
    fn test_restore_rejects_unknown_operator() {
        let blob = r#"{"display":"3","currentValue":1,"operation":"^"}"#;
        assert_eq!(CalculatorSession::restore(Some(blob)), CalculatorSession::new());
    }

    #[test]
    fn test_restore_truncates_long_history() {
        let history: Vec<String> = (0..15).map(|i| format!("{i} + 0 = {i}")).collect();
        let snapshot = Snapshot {
            history,
            ..Snapshot::default()
        };
        let session = CalculatorSession::try_from(snapshot).unwrap();
        assert_eq!(session.history().len(), 10);
        assert_eq!(session.history().latest(), Some("0 + 0 = 0"));
    }

    #[test]
    fn test_restore_error_display() {
        let session = CalculatorSession::restore(Some(r#"{"display":"Error"}"#));
        assert!(session.is_error());
    }
}
