use common::error::ActionError;
use common::speech::SpeechSynth;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

/// `window.speechSynthesis`, if the browser has one.
pub struct BrowserSpeech {
    synth: Option<SpeechSynthesis>,
}

impl BrowserSpeech {
    pub fn detect() -> Self {
        let synth = web_sys::window()
            .filter(|window| {
                Reflect::has(window, &JsValue::from_str("speechSynthesis")).unwrap_or(false)
            })
            .and_then(|window| window.speech_synthesis().ok());
        if synth.is_none() {
            log::info!("speech synthesis not available");
        }
        Self { synth }
    }
}

impl SpeechSynth for BrowserSpeech {
    fn is_available(&self) -> bool {
        self.synth.is_some()
    }

    fn cancel(&self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }

    fn speak(&self, text: &str, rate: f32, pitch: f32) -> Result<(), ActionError> {
        let synth = self.synth.as_ref().ok_or(ActionError::SpeechUnsupported)?;
        let utterance =
            SpeechSynthesisUtterance::new_with_text(text).map_err(|_| ActionError::SpeechUnsupported)?;
        utterance.set_rate(rate);
        utterance.set_pitch(pitch);
        synth.speak(&utterance);
        Ok(())
    }
}
