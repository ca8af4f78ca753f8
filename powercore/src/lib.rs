//! powercore — shared library for the PowerCalc calculator

pub mod config;
pub mod theme;
pub mod widgets;

pub use config::{CalcConfig, ZeroDivision};
pub use theme::{FontStatus, PowerTheme};
