//! Executes the effect intents the engine returns.

use abacus::{Effect, SnapshotStore, SoundCue};
use console::Term;
use tracing::{trace, warn};

/// Runs effects against the terminal and a snapshot store
#[derive(Debug, Clone)]
pub struct EffectRunner {
    term: Term,
    quiet: bool,
}

impl EffectRunner {
    /// Creates a runner writing notices to stderr
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            quiet,
        }
    }

    /// Executes `effects` in order.
    ///
    /// Nothing here is fatal: failed writes and clipboard errors are logged
    /// and the session carries on.
    pub fn run<S: SnapshotStore + ?Sized>(&self, effects: &[Effect], store: &mut S) {
        for effect in effects {
            match effect {
                Effect::PlaySound(cue) => self.play(*cue),
                Effect::CopyToClipboard(text) => self.copy(text),
                Effect::Persist(snapshot) => {
                    let saved = snapshot.to_json().and_then(|blob| store.save(&blob));
                    if let Err(err) = saved {
                        warn!(%err, "could not save session");
                    }
                }
            }
        }
    }

    fn play(&self, cue: SoundCue) {
        match cue {
            // terminals have no click; only the alert is audible
            SoundCue::Click => trace!("click"),
            SoundCue::Alert => {
                if !self.quiet {
                    let _ = self.term.write_str("\x07");
                }
            }
        }
    }

    fn copy(&self, text: &str) {
        #[cfg(feature = "clipboard")]
        if let Err(err) = copy_to_clipboard(text) {
            warn!(%err, "clipboard unavailable");
        }
        if !self.quiet {
            let _ = self.term.write_line(&format!("Copied {text}"));
        }
    }
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}
