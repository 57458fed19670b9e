//! Read-aloud support.
//!
//! The platform engine is reached through [`SpeechSynth`]. A new request
//! always cancels whatever is being spoken, so at most one utterance is active.

use crate::error::ActionError;
use crate::model::view::DetailPayload;

pub const RATE: f32 = 1.0;
pub const PITCH: f32 = 1.0;

pub trait SpeechSynth {
    fn is_available(&self) -> bool;
    fn cancel(&self);
    fn speak(&self, text: &str, rate: f32, pitch: f32) -> Result<(), ActionError>;
}

/// Cancels the current utterance and speaks `text`.
pub fn read_aloud<S: SpeechSynth + ?Sized>(synth: &S, text: &str) -> Result<(), ActionError> {
    if !synth.is_available() {
        return Err(ActionError::SpeechUnsupported);
    }
    synth.cancel();
    synth.speak(text, RATE, PITCH)
}

/// What the detail view reads: the title, then the content.
pub fn detail_script(detail: &DetailPayload) -> String {
    format!("{}. {}", detail.title, detail.content)
}

/// What the reviews card reads.
pub fn reviews_script(comments: &[String]) -> String {
    if comments.is_empty() {
        "No reviews yet.".to_string()
    } else {
        format!("Reviews: {}", comments.join(". "))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        available: bool,
        calls: RefCell<Vec<String>>,
    }

    impl SpeechSynth for Recorder {
        fn is_available(&self) -> bool {
            self.available
        }

        fn cancel(&self) {
            self.calls.borrow_mut().push("cancel".into());
        }

        fn speak(&self, text: &str, _rate: f32, _pitch: f32) -> Result<(), ActionError> {
            self.calls.borrow_mut().push(format!("speak {text}"));
            Ok(())
        }
    }

    #[test]
    fn every_request_preempts_the_previous_one() {
        let synth = Recorder {
            available: true,
            ..Recorder::default()
        };
        read_aloud(&synth, "one").unwrap();
        read_aloud(&synth, "two").unwrap();
        assert_eq!(
            *synth.calls.borrow(),
            ["cancel", "speak one", "cancel", "speak two"]
        );
    }

    #[test]
    fn unavailable_engine_is_reported() {
        let synth = Recorder::default();
        assert_eq!(read_aloud(&synth, "hi"), Err(ActionError::SpeechUnsupported));
        assert!(synth.calls.borrow().is_empty());
    }

    #[test]
    fn scripts() {
        assert_eq!(reviews_script(&[]), "No reviews yet.");
        assert_eq!(
            reviews_script(&["Nice".to_string(), "Great job!".to_string()]),
            "Reviews: Nice. Great job!"
        );
        let detail = DetailPayload {
            title: "Announcements".into(),
            content: "Exams start Monday".into(),
        };
        assert_eq!(detail_script(&detail), "Announcements. Exams start Monday");
    }
}
