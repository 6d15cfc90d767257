//! Input dispatch boundary between a front end and the engine.
//!
//! The session owns the engine, turns errors into an on-screen indicator and
//! guarantees the engine is back to a clean state after any failure.

use tracing::{debug, warn};

use crate::calculator::{DomainError, Engine};
use crate::input::Key;

/// Text shown on the display after a failed operation.
pub const ERROR_INDICATOR: &str = "Error";

/// What a front end should show after a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    /// Main display line.
    pub display: String,
    /// Secondary line: the pending operation, or the error message.
    pub history: String,
    /// Whether the display shows the error indicator.
    pub is_error: bool,
}

#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    last_error: Option<DomainError>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one key. On failure the engine is reset and the error is kept
    /// until the next key press.
    pub fn press(&mut self, key: Key) -> Screen {
        self.last_error = None;
        debug!(%key, "key pressed");

        if let Err(err) = key.apply(&mut self.engine) {
            warn!(error = %err, %key, "calculation failed");
            self.last_error = Some(err);
        }

        self.screen()
    }

    /// Dispatch keys in order, stopping at the first failure.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> Screen {
        for key in keys {
            self.press(key);
            if self.last_error.is_some() {
                break;
            }
        }
        self.screen()
    }

    pub fn screen(&self) -> Screen {
        match &self.last_error {
            Some(err) => Screen {
                display: ERROR_INDICATOR.to_string(),
                history: err.to_string(),
                is_error: true,
            },
            None => Screen {
                display: self.engine.display().to_string(),
                history: self.engine.history(),
                is_error: false,
            },
        }
    }

    pub fn last_error(&self) -> Option<&DomainError> {
        self.last_error.as_ref()
    }

    /// The value to copy out of the calculator. None while the error
    /// indicator is showing.
    pub fn last_result(&self) -> Option<&str> {
        match self.last_error {
            Some(_) => None,
            None => Some(self.engine.display()),
        }
    }
}
