//! WebAudio-backed implementation of the shared audio port.

use std::cell::RefCell;

use platform_host::{AudioPort, SoundEffect, Waveform};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

const TONE_GAIN: f32 = 0.1;
const TONE_GAIN_FLOOR: f32 = 0.01;

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    }
}

#[derive(Default)]
/// Audio port that schedules effect tones on a lazily-created [`AudioContext`].
///
/// The context is constructed on the first play request (browsers refuse to start audio before a
/// user gesture), then reused for the lifetime of the page.
pub struct WebAudioPort {
    context: RefCell<Option<AudioContext>>,
}

impl WebAudioPort {
    /// Creates a port with no audio context yet.
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule_effect(&self, effect: SoundEffect) -> Result<(), JsValue> {
        let mut slot = self.context.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioContext::new()?);
        }
        let Some(context) = slot.as_ref() else {
            return Ok(());
        };

        let base_time = context.current_time();
        for step in effect.tone_steps() {
            let oscillator = context.create_oscillator()?;
            let gain = context.create_gain()?;
            oscillator.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&context.destination())?;

            let start = base_time + f64::from(step.start_offset_s);
            let stop = start + f64::from(step.duration_s);
            oscillator.set_type(oscillator_type(step.waveform));
            oscillator.frequency().set_value_at_time(step.frequency_hz, start)?;
            gain.gain().set_value_at_time(TONE_GAIN, start)?;
            gain.gain().exponential_ramp_to_value_at_time(TONE_GAIN_FLOOR, stop)?;
            oscillator.start_with_when(start)?;
            oscillator.stop_with_when(stop)?;
        }
        Ok(())
    }
}

impl AudioPort for WebAudioPort {
    fn play(&self, effect: SoundEffect) {
        // A backend that cannot play simply drops the request.
        let _ = self.schedule_effect(effect);
    }
}
