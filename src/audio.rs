//! Short synthesized feedback tones through Web Audio. Every failure is swallowed.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::host::{AudioFeedback, Sound};

pub const VOLUME: f32 = 0.3;

/// (frequency Hz, start offset s, duration s) per note.
fn notes(sound: Sound) -> &'static [(f32, f64, f64)] {
    match sound {
        Sound::Click => &[(660.0, 0.0, 0.05)],
        Sound::Accepted => &[(880.0, 0.0, 0.08), (1175.0, 0.08, 0.12)],
        Sound::Rejected => &[(220.0, 0.0, 0.18)],
        Sound::SessionComplete => &[
            (523.0, 0.0, 0.12),
            (659.0, 0.12, 0.12),
            (784.0, 0.24, 0.12),
            (1047.0, 0.36, 0.30),
        ],
    }
}

#[derive(Default)]
pub struct WebAudio {
    ctx: Option<AudioContext>,
    muted: bool,
}

impl WebAudio {
    pub fn new(enabled: bool) -> Self {
        Self { ctx: None, muted: !enabled }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.muted = !enabled;
    }

    fn context(&mut self) -> Result<&AudioContext, JsValue> {
        if self.ctx.is_none() {
            self.ctx = Some(AudioContext::new()?);
        }
        self.ctx.as_ref().ok_or(JsValue::NULL)
    }

    fn schedule(&mut self, sound: Sound) -> Result<(), JsValue> {
        let ctx = self.context()?;
        let now = ctx.current_time();
        for &(freq, offset, duration) in notes(sound) {
            let osc = ctx.create_oscillator()?;
            osc.set_type(OscillatorType::Sine);
            osc.frequency().set_value(freq);
            let gain = ctx.create_gain()?;
            gain.gain().set_value(VOLUME);
            osc.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&ctx.destination())?;
            osc.start_with_when(now + offset)?;
            osc.stop_with_when(now + offset + duration)?;
        }
        Ok(())
    }
}

impl AudioFeedback for WebAudio {
    fn play(&mut self, sound: Sound) {
        if self.muted {
            return;
        }
        let _ = self.schedule(sound);
    }
}
