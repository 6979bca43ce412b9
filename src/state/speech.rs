//! Speech Input
//!
//! Browser speech recognition behind an explicit available/unavailable
//! split, so the mic control has a real disabled state on browsers without
//! the API.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::chat::ChatState;

/// Browser speech-to-text support, probed once when the dashboard mounts.
#[derive(Clone)]
pub enum SpeechCapability {
    Available(SpeechRecognizer),
    Unavailable,
}

impl SpeechCapability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Wrapper around the browser recognizer, configured for single-utterance
/// dictation into the composer input.
#[derive(Clone)]
pub struct SpeechRecognizer {
    inner: web_sys::SpeechRecognition,
}

/// Probe the browser for speech recognition and wire the recognizer's
/// events into the page state. Chrome still ships the constructor under a
/// `webkit` prefix, so the lookup goes through `Reflect` rather than the
/// plain binding.
pub fn init_speech(state: ChatState) -> SpeechCapability {
    let Some(window) = web_sys::window() else {
        return SpeechCapability::Unavailable;
    };

    let constructor = ["SpeechRecognition", "webkitSpeechRecognition"]
        .iter()
        .find_map(|name| {
            js_sys::Reflect::get(&window, &JsValue::from_str(name))
                .ok()
                .filter(|value| value.is_function())
        });

    let Some(constructor) = constructor else {
        return SpeechCapability::Unavailable;
    };

    let recognition =
        match js_sys::Reflect::construct(constructor.unchecked_ref(), &js_sys::Array::new()) {
            Ok(instance) => instance.unchecked_into::<web_sys::SpeechRecognition>(),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Speech recognition init failed: {:?}", e).into(),
                );
                return SpeechCapability::Unavailable;
            }
        };

    // Single utterance per toggle, final results only.
    recognition.set_continuous(false);
    recognition.set_interim_results(false);
    recognition.set_lang("en-US");

    let recognizer = SpeechRecognizer { inner: recognition };
    recognizer.attach_handlers(state);
    SpeechCapability::Available(recognizer)
}

impl SpeechRecognizer {
    /// Start listening. Returns false when the recognizer refuses to start,
    /// for example while a previous utterance is still being finalized.
    pub fn start(&self) -> bool {
        match self.inner.start() {
            Ok(()) => true,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Speech recognition start failed: {:?}", e).into(),
                );
                false
            }
        }
    }

    pub fn stop(&self) {
        self.inner.stop();
    }

    fn attach_handlers(&self, state: ChatState) {
        // The final transcript replaces the composer text.
        let on_result = Closure::wrap(Box::new(move |event: web_sys::SpeechRecognitionEvent| {
            let transcript = event
                .results()
                .get(event.result_index())
                .and_then(|result| result.get(0))
                .map(|alternative| alternative.transcript());
            if let Some(text) = transcript {
                state.input.set(text);
            }
            state.listening.set(false);
        }) as Box<dyn FnMut(web_sys::SpeechRecognitionEvent)>);
        self.inner.set_onresult(Some(on_result.as_ref().unchecked_ref()));
        on_result.forget();

        // Fires after every utterance, with or without a result.
        let on_end = Closure::wrap(Box::new(move |_: web_sys::Event| {
            state.listening.set(false);
        }) as Box<dyn FnMut(web_sys::Event)>);
        self.inner.set_onend(Some(on_end.as_ref().unchecked_ref()));
        on_end.forget();

        let on_error = Closure::wrap(Box::new(move |_: web_sys::Event| {
            web_sys::console::error_1(&"Speech recognition error".into());
            state.listening.set(false);
        }) as Box<dyn FnMut(web_sys::Event)>);
        self.inner.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }
}
