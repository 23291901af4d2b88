//! Scientific calculator with a single-operation state machine.
//!
//! The [`calculator`] module is the core: it applies key presses to a
//! running-total state machine and formats results. [`session`] routes key
//! presses into it, [`feedback`] beeps, and [`config`]/[`theme`] hold the
//! persisted settings used by the terminal front-end.

pub mod calculator;
pub mod config;
pub mod feedback;
pub mod session;
pub mod theme;

pub use calculator::{Calculator, CalculatorState, InputEvent, Readout};
pub use config::Config;
pub use session::Session;
