//! PowerCalc - a four-function desktop calculator
//!
//! Digits, + - * /, equals and clear. One pending operation at a time.

pub mod app;
pub mod keypad;
pub mod tracker;

pub use app::PowerCalcApp;
pub use tracker::{Event, Operation, Tracker};
