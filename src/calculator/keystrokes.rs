//! Keystroke line parsing.
//!
//! Turns a typed line such as `12.5 × sin 30 =` into the key presses it
//! spells out. Every token maps to exactly one [`InputEvent`]; whitespace
//! only separates tokens.

use super::input::InputEvent;
use super::ops::{FunctionKind, OperatorKind};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches one token (or a whitespace run) at the start of the input.
    /// Longer words come first so `x!` wins over `x` and `deg` over `e`.
    static ref TOKEN: Regex = Regex::new(
        r"(?i)^(?:\s+|sqrt|sin|cos|tan|log|ln|x!|pi|clear|ac|del|bs|deg|rad|mode|[0-9]|\.|[-+*/×÷^x=!√πe])"
    ).unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeystrokeError {
    /// `column` counts characters from the start of the line, zero-based.
    #[error("unknown key at column {column}: {token:?}")]
    UnknownToken { column: usize, token: String },
}

/// Parse a line of keystrokes into input events.
pub fn parse_keystrokes(line: &str) -> Result<Vec<InputEvent>, KeystrokeError> {
    let mut events = Vec::new();
    let mut position = 0;

    while position < line.len() {
        let rest = &line[position..];
        let Some(found) = TOKEN.find(rest) else {
            let token = rest.split_whitespace().next().unwrap_or(rest).to_string();
            let column = line[..position].chars().count();
            return Err(KeystrokeError::UnknownToken { column, token });
        };

        let token = found.as_str();
        if let Some(event) = token_to_event(token) {
            events.push(event);
        }
        position += found.end();
    }

    Ok(events)
}

/// Check if a line looks like keystrokes rather than a REPL command.
pub fn looks_like_keystrokes(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(':')
}

fn token_to_event(token: &str) -> Option<InputEvent> {
    if token.trim().is_empty() {
        return None;
    }

    let lower = token.to_lowercase();
    match lower.as_str() {
        "." => Some(InputEvent::Decimal),
        "=" => Some(InputEvent::Equals),
        "clear" | "ac" => Some(InputEvent::Clear),
        "del" | "bs" => Some(InputEvent::Backspace),
        "deg" | "rad" | "mode" => Some(InputEvent::ToggleAngleMode),
        other => {
            if let Some(digit) = other.chars().next().and_then(|c| c.to_digit(10)) {
                return Some(InputEvent::Digit(digit as u8));
            }
            OperatorKind::from_symbol(other)
                .map(InputEvent::Operator)
                .or_else(|| FunctionKind::from_label(other).map(InputEvent::Function))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sum() {
        let events = parse_keystrokes("5 + 3 =").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Digit(5),
                InputEvent::Operator(OperatorKind::Add),
                InputEvent::Digit(3),
                InputEvent::Equals,
            ]
        );
    }

    #[test]
    fn test_multi_digit_numbers_split_into_digits() {
        let events = parse_keystrokes("12.5").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Digit(1),
                InputEvent::Digit(2),
                InputEvent::Decimal,
                InputEvent::Digit(5),
            ]
        );
    }

    #[test]
    fn test_functions_and_symbols() {
        let events = parse_keystrokes("sin 30 × π √ x! ÷ e").unwrap();
        assert_eq!(events[0], InputEvent::Function(FunctionKind::Sin));
        assert_eq!(events[3], InputEvent::Operator(OperatorKind::Multiply));
        assert_eq!(events[4], InputEvent::Function(FunctionKind::Pi));
        assert_eq!(events[5], InputEvent::Function(FunctionKind::Sqrt));
        assert_eq!(events[6], InputEvent::Function(FunctionKind::Factorial));
        assert_eq!(events[7], InputEvent::Operator(OperatorKind::Divide));
        assert_eq!(events[8], InputEvent::Function(FunctionKind::E));
    }

    #[test]
    fn test_control_words() {
        let events = parse_keystrokes("AC del deg").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Clear,
                InputEvent::Backspace,
                InputEvent::ToggleAngleMode,
            ]
        );
    }

    #[test]
    fn test_tokens_without_spaces() {
        let events = parse_keystrokes("2^10=").unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[1], InputEvent::Operator(OperatorKind::Power));
    }

    #[test]
    fn test_x_is_multiply_unless_factorial() {
        let events = parse_keystrokes("3x4 5x!").unwrap();
        assert_eq!(events[1], InputEvent::Operator(OperatorKind::Multiply));
        assert_eq!(events[4], InputEvent::Function(FunctionKind::Factorial));
    }

    #[test]
    fn test_unknown_token() {
        let err = parse_keystrokes("2 + foo").unwrap_err();
        assert_eq!(
            err,
            KeystrokeError::UnknownToken {
                column: 4,
                token: "foo".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_token_column_counts_chars() {
        let err = parse_keystrokes("×÷ foo").unwrap_err();
        assert_eq!(
            err,
            KeystrokeError::UnknownToken {
                column: 3,
                token: "foo".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown key at column 3: \"foo\"");
    }

    #[test]
    fn test_empty_line() {
        assert!(parse_keystrokes("").unwrap().is_empty());
        assert!(parse_keystrokes("   ").unwrap().is_empty());
    }

    #[test]
    fn test_looks_like_keystrokes() {
        assert!(looks_like_keystrokes("5 + 3"));
        assert!(!looks_like_keystrokes(":theme numbers blue"));
        assert!(!looks_like_keystrokes("   "));
    }
}
