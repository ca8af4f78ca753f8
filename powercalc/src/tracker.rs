//! Input/operation tracker
//!
//! Turns keypad events into display text. The whole calculator state is a
//! plain `Tracker` value: the digits being typed, the stored left operand,
//! and the pending operation. [`Tracker::step`] is the pure transition
//! function; [`Tracker::handle`] is the in-place form the UI uses.

use powercore::ZeroDivision;
use thiserror::Error;

/// Shown when equals cannot produce a number.
pub const ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Operation::None => None,
            Operation::Add => Some('+'),
            Operation::Subtract => Some('-'),
            Operation::Multiply => Some('*'),
            Operation::Divide => Some('/'),
        }
    }
}

/// One button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Digit(char),
    Operator(Operation),
    Equals,
    Clear,
}

impl Event {
    /// `None` unless `c` is `0`-`9`.
    pub fn digit(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Event::Digit(c))
    }

    /// `None` unless `c` is one of `+ - * /`.
    pub fn operator(c: char) -> Option<Self> {
        Operation::from_symbol(c).map(Event::Operator)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("not a number: {0:?}")]
    InvalidOperand(String),
    #[error("division by zero")]
    DivisionByZero,
}

/// Which half of a calculation the tracker is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Digits go into the (first or only) operand.
    Accumulating,
    /// An operator was pressed and no digit has followed yet.
    AwaitingOperand,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tracker {
    input: String,
    stored: String,
    pending: Operation,
    display: String,
    zero_division: ZeroDivision,
}

impl Tracker {
    pub fn new(zero_division: ZeroDivision) -> Self {
        Self {
            zero_division,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn stored(&self) -> &str {
        &self.stored
    }

    pub fn pending(&self) -> Operation {
        self.pending
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        if self.pending != Operation::None && self.input.is_empty() {
            Phase::AwaitingOperand
        } else {
            Phase::Accumulating
        }
    }

    /// Apply `event`, returning the next state and its display text.
    pub fn step(mut self, event: Event) -> (Self, String) {
        self.apply(event);
        let display = self.display.clone();
        (self, display)
    }

    /// Apply `event` in place and return the display text.
    pub fn handle(&mut self, event: Event) -> &str {
        self.apply(event);
        &self.display
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::Digit(d) if d.is_ascii_digit() => {
                self.input.push(d);
                self.display.clone_from(&self.input);
            }
            Event::Operator(op) if op != Operation::None => {
                // An empty buffer leaves the stored operand empty too; equals
                // will then report an error.
                self.stored = std::mem::take(&mut self.input);
                self.pending = op;
            }
            Event::Equals => self.equals(),
            Event::Clear => self.clear(),
            Event::Digit(_) | Event::Operator(_) => {
                log::debug!("ignoring malformed event {:?}", event);
            }
        }
        log::trace!(
            "{:?} -> stored={:?} op={:?} input={:?}",
            event,
            self.stored,
            self.pending,
            self.input
        );
    }

    fn equals(&mut self) {
        match self.evaluate() {
            Ok(result) => {
                let text = format_number(result);
                self.input.clone_from(&text);
                self.display = text;
            }
            Err(e) => {
                log::debug!("equals failed: {}", e);
                self.display = ERROR_TEXT.to_owned();
            }
        }
    }

    fn evaluate(&self) -> Result<f64, CalcError> {
        let lhs = parse_operand(&self.stored)?;
        let rhs = parse_operand(&self.input)?;
        evaluate(self.pending, lhs, rhs, self.zero_division)
    }

    fn clear(&mut self) {
        self.input.clear();
        self.stored.clear();
        self.pending = Operation::None;
        self.display.clear();
    }
}

pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.parse()
        .map_err(|_| CalcError::InvalidOperand(text.to_owned()))
}

/// Apply `op` to two parsed operands.
///
/// With no pending operation the result is `0`.
pub fn evaluate(op: Operation, lhs: f64, rhs: f64, zero_division: ZeroDivision) -> Result<f64, CalcError> {
    match op {
        Operation::None => Ok(0.0),
        Operation::Add => Ok(add(lhs, rhs)),
        Operation::Subtract => Ok(subtract(lhs, rhs)),
        Operation::Multiply => Ok(multiply(lhs, rhs)),
        Operation::Divide if rhs == 0.0 && zero_division == ZeroDivision::Error => {
            Err(CalcError::DivisionByZero)
        }
        Operation::Divide => Ok(divide(lhs, rhs)),
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a / b`, or `0` when `b` is zero.
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Render a result so that it parses back to the same value.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e15 || (magnitude < 1e-5 && n != 0.0) {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Event {
        Event::digit(c).unwrap()
    }

    fn op(c: char) -> Event {
        Event::operator(c).unwrap()
    }

    fn run(tracker: &mut Tracker, keys: &str) -> String {
        for c in keys.chars() {
            let event = match c {
                '=' => Event::Equals,
                'C' => Event::Clear,
                _ => Event::digit(c).or_else(|| Event::operator(c)).unwrap(),
            };
            tracker.handle(event);
        }
        tracker.display().to_string()
    }

    #[test]
    fn test_digits_accumulate() {
        let mut t = Tracker::default();
        for s in ["0", "7", "42", "0012", "9876543210"] {
            t.handle(Event::Clear);
            for c in s.chars() {
                let shown = t.handle(digit(c)).to_string();
                assert!(s.starts_with(&shown));
            }
            assert_eq!(t.display(), s);
            assert_eq!(t.input(), s);
        }
    }

    #[test]
    fn test_step_is_pure() {
        let start = Tracker::default();
        let (next, display) = start.clone().step(digit('5'));
        assert_eq!(display, "5");
        assert_eq!(next.input(), "5");
        assert_eq!(start, Tracker::default());
    }

    #[test]
    fn test_operator_twice_empties_stored() {
        let mut t = Tracker::default();
        run(&mut t, "5+");
        assert_eq!(t.stored(), "5");
        t.handle(op('-'));
        assert_eq!(t.stored(), "");
        assert_eq!(t.pending(), Operation::Subtract);
    }

    #[test]
    fn test_operator_keeps_display() {
        let mut t = Tracker::default();
        assert_eq!(run(&mut t, "12*"), "12");
        assert_eq!(t.input(), "");
        assert_eq!(t.phase(), Phase::AwaitingOperand);
        t.handle(digit('3'));
        assert_eq!(t.phase(), Phase::Accumulating);
    }

    #[test]
    fn test_basic_ops() {
        assert_eq!(run(&mut Tracker::default(), "5+3="), "8");
        assert_eq!(run(&mut Tracker::default(), "9-12="), "-3");
        assert_eq!(run(&mut Tracker::default(), "6*7="), "42");
        assert_eq!(run(&mut Tracker::default(), "7/2="), "3.5");
        assert_eq!(run(&mut Tracker::default(), "1/3="), "0.3333333333333333");
    }

    #[test]
    fn test_divide_by_zero_is_zero() {
        assert_eq!(run(&mut Tracker::default(), "6/0="), "0");
    }

    #[test]
    fn test_divide_by_zero_strict() {
        let mut t = Tracker::new(ZeroDivision::Error);
        assert_eq!(run(&mut t, "6/0="), ERROR_TEXT);
        assert_eq!(t.stored(), "6");
        assert_eq!(t.input(), "0");
        assert_eq!(run(&mut t, "C8/2="), "4");
    }

    #[test]
    fn test_empty_operands_error() {
        let mut t = Tracker::default();
        assert_eq!(run(&mut t, "+="), ERROR_TEXT);
        assert_eq!(t.stored(), "");
        assert_eq!(t.input(), "");
    }

    #[test]
    fn test_equals_without_operator_errors() {
        assert_eq!(run(&mut Tracker::default(), "5="), ERROR_TEXT);
    }

    #[test]
    fn test_error_leaves_state() {
        let mut t = Tracker::default();
        assert_eq!(run(&mut t, "5+="), ERROR_TEXT);
        assert_eq!(t.stored(), "5");
        assert_eq!(t.pending(), Operation::Add);
        assert_eq!(run(&mut t, "3="), "8");
    }

    #[test]
    fn test_result_becomes_input() {
        let mut t = Tracker::default();
        run(&mut t, "5+3=");
        assert_eq!(t.input(), "8");
        // digits keep appending to the result
        assert_eq!(run(&mut t, "2"), "82");
    }

    #[test]
    fn test_repeated_equals() {
        let mut t = Tracker::default();
        assert_eq!(run(&mut t, "5+3="), "8");
        assert_eq!(run(&mut t, "="), "13");
        assert_eq!(run(&mut t, "="), "18");
    }

    #[test]
    fn test_result_as_next_operand() {
        let mut t = Tracker::default();
        assert_eq!(run(&mut t, "5+3=*2="), "16");
    }

    #[test]
    fn test_clear() {
        let mut t = Tracker::default();
        run(&mut t, "12+34");
        assert_eq!(t.handle(Event::Clear), "");
        assert_eq!(t, Tracker::default());
        assert_eq!(run(&mut t, "7"), "7");
    }

    #[test]
    fn test_clear_keeps_policy() {
        let mut t = Tracker::new(ZeroDivision::Error);
        run(&mut t, "1+2C");
        assert_eq!(t, Tracker::new(ZeroDivision::Error));
    }

    #[test]
    fn test_clear_idempotent() {
        let mut t = Tracker::default();
        run(&mut t, "9*9=");
        t.handle(Event::Clear);
        let once = t.clone();
        t.handle(Event::Clear);
        t.handle(Event::Clear);
        assert_eq!(t, once);
    }

    #[test]
    fn test_malformed_events_ignored() {
        let mut t = Tracker::default();
        run(&mut t, "4");
        let before = t.clone();
        t.handle(Event::Digit('a'));
        t.handle(Event::Operator(Operation::None));
        assert_eq!(t, before);
        assert!(Event::digit('x').is_none());
        assert!(Event::operator('%').is_none());
    }

    #[test]
    fn test_stored_only_with_pending() {
        let mut t = Tracker::default();
        for keys in ["1", "+", "2", "=", "C", "3", "/", "=", "4"] {
            run(&mut t, keys);
            if !t.stored().is_empty() {
                assert_ne!(t.pending(), Operation::None);
            }
        }
    }

    #[test]
    fn test_evaluate_no_pending() {
        assert_eq!(evaluate(Operation::None, 3.0, 4.0, ZeroDivision::Zero), Ok(0.0));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(multiply(2.0, 3.0), 6.0);
        assert_eq!(divide(3.0, 2.0), 1.5);
        assert_eq!(divide(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("007"), Ok(7.0));
        assert_eq!(parse_operand("-3.5"), Ok(-3.5));
        assert_eq!(
            parse_operand(""),
            Err(CalcError::InvalidOperand(String::new()))
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(1e15), "1e15");
        assert_eq!(format_number(f64::INFINITY), "Inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_large_results_chain() {
        let mut t = Tracker::default();
        assert_eq!(run(&mut t, "1000000*1000000000="), "1e15");
        assert_eq!(run(&mut t, "/1000="), "1000000000000");
    }

    #[test]
    fn test_small_results_chain() {
        let mut t = Tracker::default();
        assert_eq!(run(&mut t, "1/100000000="), "1e-8");
        assert_eq!(run(&mut t, "*1="), "1e-8");
    }

    #[test]
    fn test_operation_symbols() {
        for c in ['+', '-', '*', '/'] {
            assert_eq!(Operation::from_symbol(c).and_then(Operation::symbol), Some(c));
        }
        assert_eq!(Operation::None.symbol(), None);
    }
}
