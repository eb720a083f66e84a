//! Values delivered by the external dictation service.

use std::fmt;
use thiserror::Error;

/// Final result of one dictation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationEvent {
    /// The recognizer produced a final transcript.
    Transcript(String),
    /// The recognizer reported an error.
    Failed(DictationError),
}

/// Category of a recognizer failure, derived from its numeric error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictationErrorKind {
    /// The recognizer timed out waiting for the network.
    NetworkTimeout,
    /// The network request failed.
    Network,
    /// Audio could not be recorded.
    Audio,
    /// The recognition server failed.
    Server,
    /// The client side of the recognizer failed.
    Client,
    /// No speech was heard before the recognizer gave up.
    SpeechTimeout,
    /// Speech was heard but nothing matched.
    NoMatch,
    /// The recognizer is busy with another request.
    Busy,
    /// Microphone or recognition permission is missing.
    InsufficientPermissions,
    /// The code is absent or not recognised.
    Unknown,
}

impl DictationErrorKind {
    /// Maps a platform recognizer error code onto a kind.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::NetworkTimeout,
            2 => Self::Network,
            3 => Self::Audio,
            4 => Self::Server,
            5 => Self::Client,
            6 => Self::SpeechTimeout,
            7 => Self::NoMatch,
            8 => Self::Busy,
            9 => Self::InsufficientPermissions,
            _ => Self::Unknown,
        }
    }

    /// Returns a short description suitable for showing to a person.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NetworkTimeout => "network timeout",
            Self::Network => "network error",
            Self::Audio => "audio recording error",
            Self::Server => "server error",
            Self::Client => "client error",
            Self::SpeechTimeout => "speech timeout",
            Self::NoMatch => "no match found",
            Self::Busy => "recognition service busy",
            Self::InsufficientPermissions => "insufficient permissions",
            Self::Unknown => "unknown recognition error",
        }
    }
}

impl fmt::Display for DictationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error reported by the dictation service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("dictation failed ({kind}): {message}")]
pub struct DictationError {
    kind: DictationErrorKind,
    code: Option<i64>,
    message: String,
}

impl DictationError {
    /// Creates an error from the recognizer's code and message.
    #[must_use]
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        let kind = code.map_or(DictationErrorKind::Unknown, DictationErrorKind::from_code);
        Self {
            kind,
            code,
            message: message.into(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> DictationErrorKind {
        self.kind
    }

    /// Returns the raw recognizer code, if one was supplied.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        self.code
    }

    /// Returns the recognizer message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `false` for the routine outcomes where nobody spoke or nothing
    /// matched; those are not worth interrupting the person for.
    #[must_use]
    pub const fn is_user_actionable(&self) -> bool {
        !matches!(
            self.kind,
            DictationErrorKind::SpeechTimeout | DictationErrorKind::NoMatch
        )
    }
}
