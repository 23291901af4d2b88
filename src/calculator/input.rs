//! Discrete input events and keyboard mapping.

use super::ops::{FunctionKind, OperatorKind};
use serde::{Deserialize, Serialize};

/// A single key press understood by the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// A decimal digit. Values above 9 are ignored.
    Digit(u8),
    Decimal,
    Operator(OperatorKind),
    Function(FunctionKind),
    Equals,
    Clear,
    Backspace,
    ToggleAngleMode,
}

impl InputEvent {
    /// Map a keyboard key name to an event.
    ///
    /// Only the keys a physical keyboard offers directly are mapped; scientific
    /// functions have no keyboard shortcut.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            "." => Some(Self::Decimal),
            "+" | "-" | "*" | "/" => OperatorKind::from_symbol(key).map(Self::Operator),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    /// Whether the event could be applied at all.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Digit(d) => *d <= 9,
            _ => true,
        }
    }
}
