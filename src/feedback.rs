//! Fire-and-forget audio feedback for key presses.
//!
//! Tones are pushed onto a bounded channel with `try_send`; when the
//! channel is full or the worker is gone the tone is dropped. Feedback
//! never blocks input handling and never touches calculator state.

use crate::calculator::InputEvent;
use std::thread;
use tracing::trace;

const CHANNEL_CAPACITY: usize = 16;

/// A short beep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
}

impl Tone {
    const fn new(frequency_hz: f32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Tone played for an input event, if any.
    pub fn for_event(event: &InputEvent) -> Option<Self> {
        match event {
            InputEvent::Digit(_) => Some(Self::new(523.25, 40)),
            InputEvent::Decimal => Some(Self::new(493.88, 40)),
            InputEvent::Operator(_) => Some(Self::new(587.33, 60)),
            InputEvent::Equals => Some(Self::new(659.25, 80)),
            InputEvent::Clear => Some(Self::new(440.0, 100)),
            InputEvent::Function(_) | InputEvent::Backspace | InputEvent::ToggleAngleMode => None,
        }
    }
}

/// Sending half of the feedback channel.
#[derive(Clone, Debug, Default)]
pub struct Feedback {
    tx: Option<flume::Sender<Tone>>,
}

impl Feedback {
    /// Feedback that discards every tone.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Feedback paired with the receiver that will see its tones.
    pub fn channel() -> (Self, flume::Receiver<Tone>) {
        let (tx, rx) = flume::bounded(CHANNEL_CAPACITY);
        (Self { tx: Some(tx) }, rx)
    }

    /// Spawn a worker thread that hands every tone to `play`.
    ///
    /// The worker exits once every `Feedback` clone has been dropped.
    pub fn spawn<F>(mut play: F) -> std::io::Result<Self>
    where
        F: FnMut(Tone) + Send + 'static,
    {
        let (feedback, rx) = Self::channel();
        thread::Builder::new()
            .name("scipro-feedback".to_string())
            .spawn(move || {
                for tone in rx.iter() {
                    play(tone);
                }
                trace!("feedback worker stopped");
            })?;
        Ok(feedback)
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Queue the tone for `event` without waiting.
    pub fn emit(&self, event: &InputEvent) {
        let (Some(tx), Some(tone)) = (&self.tx, Tone::for_event(event)) else {
            return;
        };

        if let Err(e) = tx.try_send(tone) {
            trace!(?tone, "dropped feedback tone: {}", e);
        }
    }
}
