//! Calculator module implementing the scientific calculator core.
//!
//! This module provides functionality to:
//! - Apply key presses to a single-operation state machine
//! - Format results for the display
//! - Parse keystroke lines into input events
//! - Copy results to the clipboard

mod clipboard;
mod format;
mod input;
mod keystrokes;
mod ops;
mod readout;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use format::{ERROR_TOKEN, SIGNIFICANT_DIGITS, format_result, parse_display};
pub use input::InputEvent;
pub use keystrokes::{KeystrokeError, looks_like_keystrokes, parse_keystrokes};
pub use ops::{AngleMode, FACTORIAL_MAX, FunctionKind, OperatorKind, factorial};
pub use readout::Readout;
pub use state::{Calculator, CalculatorState, Phase};
