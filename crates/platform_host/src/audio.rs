//! Audio-port contract and the named sound-effect tone table.
//!
//! The desktop shell never talks to an audio backend directly. It asks an injected [`AudioPort`]
//! to play a named [`SoundEffect`]; the effect-to-tone mapping lives here as plain data so every
//! adapter renders the same cues and tests can assert against the table without a real backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Oscillator waveform used for a tone step.
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Square wave.
    Square,
    /// Sawtooth wave.
    Sawtooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// One scheduled tone within a sound effect.
pub struct ToneStep {
    /// Oscillator frequency in hertz.
    pub frequency_hz: f32,
    /// Tone duration in seconds.
    pub duration_s: f32,
    /// Offset from the start of the effect, in seconds.
    pub start_offset_s: f32,
    /// Waveform shape.
    pub waveform: Waveform,
}

const fn tone(frequency_hz: f32, duration_s: f32, start_offset_s: f32, waveform: Waveform) -> ToneStep {
    ToneStep {
        frequency_hz,
        duration_s,
        start_offset_s,
        waveform,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Named UI sound cue requested by the desktop shell.
pub enum SoundEffect {
    /// Button/titlebar click.
    Click,
    /// Pointer hover cue.
    Hover,
    /// Rising three-note success arpeggio.
    Success,
    /// Low error buzz.
    Error,
    /// Window open chime.
    WindowOpen,
    /// Window close chime.
    WindowClose,
    /// Two-note notification ping.
    Notification,
}

impl SoundEffect {
    /// Returns the tone sequence that renders this effect.
    pub fn tone_steps(self) -> &'static [ToneStep] {
        const CLICK: &[ToneStep] = &[tone(800.0, 0.1, 0.0, Waveform::Square)];
        const HOVER: &[ToneStep] = &[tone(600.0, 0.05, 0.0, Waveform::Sine)];
        const SUCCESS: &[ToneStep] = &[
            tone(523.0, 0.1, 0.0, Waveform::Sine),
            tone(659.0, 0.1, 0.1, Waveform::Sine),
            tone(784.0, 0.2, 0.2, Waveform::Sine),
        ];
        const ERROR: &[ToneStep] = &[tone(200.0, 0.3, 0.0, Waveform::Sawtooth)];
        const WINDOW_OPEN: &[ToneStep] = &[
            tone(400.0, 0.2, 0.0, Waveform::Sine),
            tone(500.0, 0.2, 0.1, Waveform::Sine),
        ];
        const WINDOW_CLOSE: &[ToneStep] = &[
            tone(500.0, 0.1, 0.0, Waveform::Sine),
            tone(400.0, 0.2, 0.05, Waveform::Sine),
        ];
        const NOTIFICATION: &[ToneStep] = &[
            tone(1000.0, 0.1, 0.0, Waveform::Sine),
            tone(1200.0, 0.1, 0.15, Waveform::Sine),
        ];
        match self {
            Self::Click => CLICK,
            Self::Hover => HOVER,
            Self::Success => SUCCESS,
            Self::Error => ERROR,
            Self::WindowOpen => WINDOW_OPEN,
            Self::WindowClose => WINDOW_CLOSE,
            Self::Notification => NOTIFICATION,
        }
    }
}

/// Shared audio output resource injected at application start.
///
/// Implementations must be safe to call from UI event handlers; playing a cue never blocks and
/// never fails visibly (a backend that cannot play simply drops the request).
pub trait AudioPort {
    /// Plays a named sound effect.
    fn play(&self, effect: SoundEffect);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op audio adapter for tests and targets without an audio backend.
pub struct NoopAudioPort;

impl AudioPort for NoopAudioPort {
    fn play(&self, _effect: SoundEffect) {}
}
