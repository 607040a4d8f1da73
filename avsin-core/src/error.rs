//! Error types crossing the engine boundary.
//!
//! Player and output-file implementations report hardware-level faults with the
//! narrow types below; the recognition test model translates every one of them
//! into a [`RequestFailure`] before it reaches the caller.

use thiserror::Error;

/// The single caller-facing error: a rejected request with a stable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailure {
    message: String,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trial_in_progress() -> Self {
        Self::new("Trial in progress.")
    }

    pub fn no_test_in_progress() -> Self {
        Self::new("No test in progress.")
    }
}

impl From<InvalidAudioDevice> for RequestFailure {
    fn from(e: InvalidAudioDevice) -> Self {
        Self::new(format!("'{}' is not a valid audio device.", e.device))
    }
}

impl From<InvalidAudioFile> for RequestFailure {
    fn from(e: InvalidAudioFile) -> Self {
        Self::new(format!("unable to read {}", e.path))
    }
}

impl From<OpenFailure> for RequestFailure {
    fn from(_: OpenFailure) -> Self {
        Self::new("Unable to open output file.")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid audio device: {device}")]
pub struct InvalidAudioDevice {
    pub device: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid audio file: {path}")]
pub struct InvalidAudioFile {
    pub path: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to open output file: {reason}")]
pub struct OpenFailure {
    pub reason: String,
}
