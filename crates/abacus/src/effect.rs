//! Side-effect intents returned by the engine.
//!
//! The engine never plays sounds, touches the clipboard or writes
//! storage. It returns these and the caller executes them.

use crate::snapshot::Snapshot;

/// Audible feedback requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Ordinary key press
    Click,
    /// The press produced an error display
    Alert,
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Play a sound cue
    PlaySound(SoundCue),
    /// Put this text on the clipboard and tell the user
    CopyToClipboard(String),
    /// Write this snapshot to the persistence slot
    Persist(Snapshot),
}

impl Effect {
    /// Returns the copied text, if this is a copy intent
    #[must_use]
    pub fn copied_text(&self) -> Option<&str> {
        match self {
            Self::CopyToClipboard(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true if this is a persist intent
    #[must_use]
    pub const fn is_persist(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}
