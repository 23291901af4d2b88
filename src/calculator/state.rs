//! The single-operation calculator state machine.
//!
//! Arithmetic is evaluated left to right as soon as the next operator or
//! equals arrives, like a pocket calculator's running total. There is no
//! operator precedence.

use super::format::{format_result, is_error, parse_display};
use super::input::InputEvent;
use super::ops::{AngleMode, FunctionKind, OperatorKind};
use serde::Serialize;
use tracing::debug;

/// Snapshot of everything the display needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Current entry or result text.
    pub display: String,
    /// Operand stored before the pending operator is applied.
    pub previous_value: Option<f64>,
    pub pending_operator: Option<OperatorKind>,
    pub pending_function: Option<FunctionKind>,
    /// When set, the next digit replaces the display instead of extending it.
    pub is_new_number_entry: bool,
    pub angle_mode: AngleMode,
}

impl CalculatorState {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            pending_operator: None,
            pending_function: None,
            is_new_number_entry: true,
            angle_mode,
        }
    }

    /// Numeric value of the display, NaN if it holds the error token.
    pub fn current_value(&self) -> f64 {
        parse_display(&self.display)
    }

    pub fn is_error(&self) -> bool {
        is_error(&self.display)
    }

    pub fn phase(&self) -> Phase {
        if self.pending_function.is_some() {
            Phase::FunctionPending
        } else if self.pending_operator.is_some() {
            if self.is_new_number_entry {
                Phase::OperatorPending
            } else {
                Phase::EnteringSecondOperand
            }
        } else {
            Phase::AwaitingFirstOperand
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(AngleMode::default())
    }
}

/// Coarse position of the state machine, derived from the state fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstOperand,
    OperatorPending,
    EnteringSecondOperand,
    FunctionPending,
}

/// Calculator core: owns the state and applies input events to it.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            state: CalculatorState::new(angle_mode),
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Apply one input event. Invalid events are ignored.
    pub fn handle_input(&mut self, event: InputEvent) {
        if !event.is_valid() {
            debug!(?event, "ignoring invalid input");
            return;
        }

        match event {
            InputEvent::Digit(digit) => self.push_digit(digit),
            InputEvent::Decimal => self.push_decimal(),
            InputEvent::Operator(op) => self.select_operator(op),
            InputEvent::Function(function) => self.select_function(function),
            InputEvent::Equals => self.equals(),
            InputEvent::Clear => self.clear(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::ToggleAngleMode => {
                self.state.angle_mode = self.state.angle_mode.toggled();
            }
        }

        debug!(
            ?event,
            display = %self.state.display,
            phase = ?self.state.phase(),
            "handled input"
        );
    }

    fn push_digit(&mut self, digit: u8) {
        let state = &mut self.state;
        if state.is_new_number_entry || state.display == "0" {
            state.display = digit.to_string();
        } else {
            state.display.push(char::from(b'0' + digit));
        }
        state.is_new_number_entry = false;
    }

    fn push_decimal(&mut self) {
        let state = &mut self.state;
        if state.is_new_number_entry {
            state.display = "0.".to_string();
            state.is_new_number_entry = false;
        } else if !state.display.contains('.') {
            state.display.push('.');
        }
    }

    fn select_operator(&mut self, op: OperatorKind) {
        let current = self.state.current_value();

        match (self.state.previous_value, self.state.pending_operator) {
            (None, _) => self.state.previous_value = Some(current),
            (Some(previous), Some(pending)) if !self.state.is_new_number_entry => {
                let result = pending.apply(previous, current);
                self.state.display = format_result(result);
                self.state.previous_value = Some(result);
            }
            _ => {}
        }

        self.state.pending_operator = Some(op);
        self.state.pending_function = None;
        self.state.is_new_number_entry = true;
    }

    fn select_function(&mut self, function: FunctionKind) {
        if function.is_deferred() {
            // A deferred function starts its own computation; any operator
            // chain in progress is dropped.
            self.state.previous_value = None;
            self.state.pending_operator = None;
            self.state.pending_function = Some(function);
            self.state.is_new_number_entry = true;
        } else {
            self.execute_function(function);
        }
    }

    fn execute_function(&mut self, function: FunctionKind) {
        let result = function.apply(self.state.current_value(), self.state.angle_mode);
        self.state.display = format_result(result);
        self.state.pending_function = None;
        self.state.is_new_number_entry = true;
    }

    fn equals(&mut self) {
        if let Some(function) = self.state.pending_function {
            self.execute_function(function);
            return;
        }

        if let (Some(previous), Some(op)) = (self.state.previous_value, self.state.pending_operator)
        {
            let result = op.apply(previous, self.state.current_value());
            self.state.display = format_result(result);
            self.state.previous_value = None;
            self.state.pending_operator = None;
            self.state.is_new_number_entry = true;
        }
    }

    fn clear(&mut self) {
        self.state = CalculatorState::new(self.state.angle_mode);
    }

    fn backspace(&mut self) {
        let display = &mut self.state.display;
        if is_error(display.as_str()) {
            display.clear();
        } else {
            display.pop();
        }

        if display.is_empty() || *display == "-" {
            *display = "0".to_string();
        }
    }
}
