//! Voice capture: from a dictated transcript to new tasks.
//!
//! - [`segment`] splits a transcript into task titles
//! - [`DictationEvent`] is what the external dictation service delivers
//! - [`VoiceCapture`] adds one task per extracted title

mod dictation;
mod segmenter;
mod voice;

pub use dictation::{DictationError, DictationErrorKind, DictationEvent};
pub use segmenter::{FILLER_PREFIXES, SEPARATOR_PHRASES, segment};
pub use voice::{CaptureOutcome, VoiceCapture};
