//! Readout representing what the calculator screen shows.

use super::format::format_result;
use super::ops::AngleMode;
use super::state::CalculatorState;
use serde::Serialize;

/// The two lines of the calculator screen plus clipboard text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Readout {
    /// The pending operation line, e.g. `"12 ×"` or `"sin("`. Empty when
    /// nothing is pending.
    pub expression: String,
    /// The main display text.
    pub display_result: String,
    /// Text for the clipboard.
    /// None if the display shows the error token.
    pub clipboard_result: Option<String>,
    /// Whether the display shows the error token.
    pub is_error: bool,
    pub angle_mode: AngleMode,
}

impl Readout {
    /// Build a readout from a state snapshot.
    pub fn from_state(state: &CalculatorState) -> Self {
        let expression = match (state.pending_function, state.pending_operator) {
            (Some(function), _) => format!("{}(", function),
            (None, Some(op)) => match state.previous_value {
                Some(previous) => format!("{} {}", format_result(previous), op),
                None => op.to_string(),
            },
            (None, None) => String::new(),
        };

        let is_error = state.is_error();
        Self {
            expression,
            display_result: state.display.clone(),
            clipboard_result: (!is_error).then(|| state.display.clone()),
            is_error,
            angle_mode: state.angle_mode,
        }
    }

    /// Get the text to copy to clipboard.
    /// Returns None while the display shows the error token.
    pub fn text_for_clipboard(&self) -> Option<&str> {
        self.clipboard_result.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Calculator, FunctionKind, InputEvent, OperatorKind};

    #[test]
    fn test_idle_readout() {
        let readout = Readout::from_state(Calculator::default().state());
        assert_eq!(readout.expression, "");
        assert_eq!(readout.display_result, "0");
        assert_eq!(readout.clipboard_result.as_deref(), Some("0"));
        assert_eq!(readout.text_for_clipboard(), Some("0"));
        assert!(!readout.is_error);
    }

    #[test]
    fn test_pending_operator_line() {
        let mut calc = Calculator::default();
        calc.handle_input(InputEvent::Digit(1));
        calc.handle_input(InputEvent::Digit(2));
        calc.handle_input(InputEvent::Operator(OperatorKind::Multiply));
        let readout = Readout::from_state(calc.state());
        assert_eq!(readout.expression, "12 ×");
        assert_eq!(readout.display_result, "12");
    }

    #[test]
    fn test_pending_function_line() {
        let mut calc = Calculator::default();
        calc.handle_input(InputEvent::Function(FunctionKind::Tan));
        assert_eq!(Readout::from_state(calc.state()).expression, "tan(");
    }

    #[test]
    fn test_error_readout() {
        let mut calc = Calculator::default();
        calc.handle_input(InputEvent::Digit(1));
        calc.handle_input(InputEvent::Operator(OperatorKind::Divide));
        calc.handle_input(InputEvent::Digit(0));
        calc.handle_input(InputEvent::Equals);
        let readout = Readout::from_state(calc.state());
        assert!(readout.is_error);
        assert_eq!(readout.clipboard_result, None);
        assert_eq!(readout.text_for_clipboard(), None);
    }
}
