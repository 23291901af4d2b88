//! Operators, scientific functions and the arithmetic behind them.
//!
//! Domain errors never panic or return `Err`: they produce NaN or an
//! infinity, which the formatter turns into the error token.

use serde::{Deserialize, Serialize};
use std::f64::consts;
use std::fmt;

/// Largest factorial argument whose result is still a finite `f64`.
pub const FACTORIAL_MAX: f64 = 170.0;

/// A binary operator awaiting its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl OperatorKind {
    /// Parse an operator from its keypad or keyboard symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "^" => Some(Self::Power),
            _ => None,
        }
    }

    /// Keypad symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Power => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A scientific function or constant key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
    Factorial,
    Pi,
    E,
}

impl FunctionKind {
    /// Parse a function from its key label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log10),
            "ln" => Some(Self::Ln),
            "sqrt" | "√" | "√x" => Some(Self::Sqrt),
            "x!" | "!" => Some(Self::Factorial),
            "π" | "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// Key label as shown on the keypad.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Sqrt => "√x",
            Self::Factorial => "x!",
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    /// Whether the function waits for an operand before evaluating.
    ///
    /// Only the trigonometric keys are deferred; everything else applies to
    /// the value already on the display.
    pub fn is_deferred(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    pub fn apply(self, value: f64, mode: AngleMode) -> f64 {
        match self {
            Self::Sin => mode.to_radians(value).sin(),
            Self::Cos => mode.to_radians(value).cos(),
            Self::Tan => mode.to_radians(value).tan(),
            Self::Log10 => value.log10(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
            Self::Factorial => factorial(value),
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit used to interpret trigonometric operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    #[default]
    #[serde(rename = "deg")]
    Degrees,
    #[serde(rename = "rad")]
    Radians,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value * consts::PI / 180.0,
            Self::Radians => value,
        }
    }

    /// Short indicator shown on the mode key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Degrees => "DEG",
            Self::Radians => "RAD",
        }
    }
}

/// Iterative factorial over `[0, 170]`.
///
/// Values outside the range (and NaN) yield NaN. Fractional arguments take
/// the product up to their integer part.
pub fn factorial(n: f64) -> f64 {
    if !(0.0..=FACTORIAL_MAX).contains(&n) {
        return f64::NAN;
    }

    let mut product = 1.0;
    let mut i = 2.0;
    while i <= n {
        product *= i;
        i += 1.0;
    }
    product
}
