//! Input routing for one calculator session.
//!
//! A [`Session`] owns the calculator core and forwards every key press to
//! it after queueing the matching feedback tone.

use crate::calculator::{
    AngleMode, Calculator, CalculatorState, InputEvent, KeystrokeError, Readout, parse_keystrokes,
};
use crate::feedback::Feedback;
use tracing::debug;

pub struct Session {
    calculator: Calculator,
    feedback: Feedback,
}

impl Session {
    pub fn new(angle_mode: AngleMode, feedback: Feedback) -> Self {
        Self {
            calculator: Calculator::new(angle_mode),
            feedback,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.feedback.emit(&event);
        self.calculator.handle_input(event);
    }

    /// Route a keyboard key. Returns `false` if the key is not mapped.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match InputEvent::from_key(key) {
            Some(event) => {
                self.handle_input(event);
                true
            }
            None => {
                debug!(key, "unmapped key");
                false
            }
        }
    }

    /// Parse and apply a line of keystrokes.
    ///
    /// Nothing is applied if any token in the line is unknown.
    pub fn handle_keystrokes(&mut self, line: &str) -> Result<usize, KeystrokeError> {
        let events = parse_keystrokes(line)?;
        let count = events.len();
        for event in events {
            self.handle_input(event);
        }
        Ok(count)
    }

    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    pub fn readout(&self) -> Readout {
        Readout::from_state(self.calculator.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Tone;

    fn session() -> Session {
        Session::new(AngleMode::Degrees, Feedback::disabled())
    }

    #[test]
    fn test_keystroke_sequences() {
        let mut s = session();
        s.handle_keystrokes("ac 5 + 3 =").unwrap();
        assert_eq!(s.readout().display_result, "8");

        let mut s = session();
        s.handle_keystrokes("0.1 + 0.2 =").unwrap();
        assert_eq!(s.readout().display_result, "0.3");

        let mut s = session();
        s.handle_keystrokes("2 + 3 + 4 =").unwrap();
        assert_eq!(s.readout().display_result, "9");
    }

    #[test]
    fn test_angle_mode_toggle() {
        let mut s = session();
        s.handle_keystrokes("sin 90 =").unwrap();
        assert_eq!(s.readout().display_result, "1");

        s.handle_keystrokes("rad sin 90 =").unwrap();
        assert_eq!(s.state().angle_mode, AngleMode::Radians);
        assert_eq!(s.readout().display_result, "0.893996663601");
    }

    #[test]
    fn test_keyboard_keys() {
        let mut s = session();
        for key in ["7", "*", "6", "Enter"] {
            assert!(s.handle_key(key));
        }
        assert_eq!(s.readout().display_result, "42");

        assert!(!s.handle_key("F1"));
        assert!(s.handle_key("Escape"));
        assert_eq!(s.readout().display_result, "0");
    }

    #[test]
    fn test_unknown_token_applies_nothing() {
        let mut s = session();
        assert!(s.handle_keystrokes("5 + what").is_err());
        assert_eq!(s.readout().display_result, "0");
        assert_eq!(s.state().pending_operator, None);
    }

    #[test]
    fn test_feedback_is_emitted() {
        let (feedback, rx) = Feedback::channel();
        let mut s = Session::new(AngleMode::Degrees, feedback);
        s.handle_keystrokes("1 + √").unwrap();

        let tones: Vec<Tone> = rx.try_iter().collect();
        assert_eq!(tones.len(), 2);
        assert_eq!(tones[0].frequency_hz, 523.25);
        assert_eq!(tones[1].frequency_hz, 587.33);
    }
}
