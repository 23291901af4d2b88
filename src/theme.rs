//! Keypad colour theme.
//!
//! Each button group takes one swatch from a fixed palette. The theme is
//! persisted through [`crate::config::Config`].

use crate::calculator::{FunctionKind, InputEvent, OperatorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A palette colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Slate,
    Purple,
    Blue,
    Green,
    Red,
    Orange,
    Indigo,
    Rose,
}

impl Swatch {
    pub const PALETTE: [Swatch; 8] = [
        Self::Slate,
        Self::Purple,
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Orange,
        Self::Indigo,
        Self::Rose,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Indigo => "indigo",
            Self::Rose => "rose",
        }
    }

    /// 256-colour terminal background code.
    pub fn ansi_code(self) -> u8 {
        match self {
            Self::Slate => 60,
            Self::Purple => 92,
            Self::Blue => 26,
            Self::Green => 28,
            Self::Red => 160,
            Self::Orange => 208,
            Self::Indigo => 54,
            Self::Rose => 204,
        }
    }
}

impl FromStr for Swatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::PALETTE
            .into_iter()
            .find(|swatch| swatch.name() == lower)
            .ok_or_else(|| format!("unknown colour '{}'", s))
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Buttons that share a colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonGroup {
    Numbers,
    Operations,
    Functions,
    Equals,
    Clear,
    Special,
}

impl ButtonGroup {
    pub const ALL: [ButtonGroup; 6] = [
        Self::Numbers,
        Self::Operations,
        Self::Functions,
        Self::Equals,
        Self::Clear,
        Self::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Operations => "operations",
            Self::Functions => "functions",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Special => "special",
        }
    }

    /// The group whose button produces the event.
    pub fn for_event(event: &InputEvent) -> Self {
        match event {
            InputEvent::Digit(_) | InputEvent::Decimal => Self::Numbers,
            InputEvent::Operator(_) => Self::Operations,
            InputEvent::Function(_) | InputEvent::ToggleAngleMode => Self::Functions,
            InputEvent::Equals => Self::Equals,
            InputEvent::Clear => Self::Clear,
            InputEvent::Backspace => Self::Special,
        }
    }
}

impl FromStr for ButtonGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|group| group.name() == lower)
            .ok_or_else(|| format!("unknown button group '{}'", s))
    }
}

/// Swatch assignment for every button group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub numbers: Swatch,
    pub operations: Swatch,
    pub functions: Swatch,
    pub equals: Swatch,
    pub clear: Swatch,
    pub special: Swatch,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            numbers: Swatch::Slate,
            operations: Swatch::Purple,
            functions: Swatch::Slate,
            equals: Swatch::Green,
            clear: Swatch::Red,
            special: Swatch::Orange,
        }
    }
}

impl Theme {
    pub fn get(&self, group: ButtonGroup) -> Swatch {
        match group {
            ButtonGroup::Numbers => self.numbers,
            ButtonGroup::Operations => self.operations,
            ButtonGroup::Functions => self.functions,
            ButtonGroup::Equals => self.equals,
            ButtonGroup::Clear => self.clear,
            ButtonGroup::Special => self.special,
        }
    }

    pub fn set(&mut self, group: ButtonGroup, swatch: Swatch) {
        let slot = match group {
            ButtonGroup::Numbers => &mut self.numbers,
            ButtonGroup::Operations => &mut self.operations,
            ButtonGroup::Functions => &mut self.functions,
            ButtonGroup::Equals => &mut self.equals,
            ButtonGroup::Clear => &mut self.clear,
            ButtonGroup::Special => &mut self.special,
        };
        *slot = swatch;
    }

    /// Render a label on its group's background colour.
    pub fn paint(&self, group: ButtonGroup, label: &str) -> String {
        format!(
            "\x1b[48;5;{}m\x1b[97m {:^5} \x1b[0m",
            self.get(group).ansi_code(),
            label
        )
    }
}

/// A keypad button: its label and the event it sends. The mode key has no
/// fixed label; it shows the current angle mode.
#[derive(Clone, Copy, Debug)]
pub struct Key {
    pub label: &'static str,
    pub event: InputEvent,
}

const fn key(label: &'static str, event: InputEvent) -> Key {
    Key { label, event }
}

const fn digit(label: &'static str, d: u8) -> Key {
    key(label, InputEvent::Digit(d))
}

const fn function(label: &'static str, f: FunctionKind) -> Key {
    key(label, InputEvent::Function(f))
}

const fn operator(label: &'static str, op: OperatorKind) -> Key {
    key(label, InputEvent::Operator(op))
}

/// Keypad layout, row by row.
pub const KEYPAD: [[Key; 4]; 7] = [
    [
        key("MODE", InputEvent::ToggleAngleMode),
        function("π", FunctionKind::Pi),
        function("e", FunctionKind::E),
        key("AC", InputEvent::Clear),
    ],
    [
        function("sin", FunctionKind::Sin),
        function("cos", FunctionKind::Cos),
        function("tan", FunctionKind::Tan),
        key("⌫", InputEvent::Backspace),
    ],
    [
        function("log", FunctionKind::Log10),
        function("ln", FunctionKind::Ln),
        function("√x", FunctionKind::Sqrt),
        operator("÷", OperatorKind::Divide),
    ],
    [
        digit("7", 7),
        digit("8", 8),
        digit("9", 9),
        operator("×", OperatorKind::Multiply),
    ],
    [
        digit("4", 4),
        digit("5", 5),
        digit("6", 6),
        operator("-", OperatorKind::Subtract),
    ],
    [
        digit("1", 1),
        digit("2", 2),
        digit("3", 3),
        operator("+", OperatorKind::Add),
    ],
    [
        function("x!", FunctionKind::Factorial),
        digit("0", 0),
        key(".", InputEvent::Decimal),
        key("=", InputEvent::Equals),
    ],
];

/// Render the keypad with the theme's colours, one line per row.
pub fn render_keypad(theme: &Theme, mode_label: &str) -> String {
    KEYPAD
        .iter()
        .map(|row| {
            row.iter()
                .map(|k| {
                    let label = match k.event {
                        InputEvent::ToggleAngleMode => mode_label,
                        _ => k.label,
                    };
                    theme.paint(ButtonGroup::for_event(&k.event), label)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.get(ButtonGroup::Numbers), Swatch::Slate);
        assert_eq!(theme.get(ButtonGroup::Operations), Swatch::Purple);
        assert_eq!(theme.get(ButtonGroup::Equals), Swatch::Green);
        assert_eq!(theme.get(ButtonGroup::Clear), Swatch::Red);
        assert_eq!(theme.get(ButtonGroup::Special), Swatch::Orange);
    }

    #[test]
    fn test_set_swatch() {
        let mut theme = Theme::default();
        theme.set(ButtonGroup::Numbers, Swatch::Rose);
        assert_eq!(theme.numbers, Swatch::Rose);
        assert_eq!(theme.get(ButtonGroup::Functions), Swatch::Slate);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Indigo".parse::<Swatch>(), Ok(Swatch::Indigo));
        assert!("teal".parse::<Swatch>().is_err());
        assert_eq!("equals".parse::<ButtonGroup>(), Ok(ButtonGroup::Equals));
        assert!("digits".parse::<ButtonGroup>().is_err());
    }

    #[test]
    fn test_event_groups() {
        assert_eq!(ButtonGroup::for_event(&InputEvent::Decimal), ButtonGroup::Numbers);
        assert_eq!(
            ButtonGroup::for_event(&InputEvent::ToggleAngleMode),
            ButtonGroup::Functions
        );
        assert_eq!(ButtonGroup::for_event(&InputEvent::Backspace), ButtonGroup::Special);
    }

    #[test]
    fn test_keypad_uses_theme_colours() {
        let mut theme = Theme::default();
        theme.set(ButtonGroup::Equals, Swatch::Blue);
        let keypad = render_keypad(&theme, "DEG");
        assert_eq!(keypad.lines().count(), KEYPAD.len());
        assert!(keypad.contains("DEG"));
        assert!(keypad.contains(&format!("48;5;{}m", Swatch::Blue.ansi_code())));
    }
}
