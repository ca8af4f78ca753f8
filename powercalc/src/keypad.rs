//! The 4x4 keypad: which button sits where, and what it does.

use crate::tracker::{Event, Operation};
use egui::{Pos2, Rect, Vec2};

/// Size of one button.
pub const BUTTON_SIZE: Vec2 = Vec2::new(60.0, 40.0);
/// Distance between the top-left corners of neighbouring buttons.
pub const BUTTON_PITCH: Vec2 = Vec2::new(70.0, 50.0);
/// Offset of the first button from the keypad origin.
pub const KEYPAD_MARGIN: Vec2 = Vec2::new(10.0, 20.0);

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Op(Operation),
    Clear,
    Equals,
}

pub const LAYOUT: [[Key; 4]; 4] = [
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Op(Operation::Divide)],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Op(Operation::Multiply)],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Op(Operation::Subtract)],
    [Key::Digit(0), Key::Clear, Key::Equals, Key::Op(Operation::Add)],
];

impl Key {
    pub fn label(self) -> &'static str {
        match self {
            Key::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            Key::Op(Operation::Add) => "+",
            Key::Op(Operation::Subtract) => "-",
            Key::Op(Operation::Multiply) => "*",
            Key::Op(Operation::Divide) => "/",
            Key::Op(Operation::None) => "",
            Key::Clear => "C",
            Key::Equals => "=",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        LAYOUT.iter().flatten().copied().find(|key| key.label() == label)
    }

    /// The tracker event this button sends.
    pub fn event(self) -> Event {
        match self {
            Key::Digit(d) => Event::Digit(char::from(b'0' + d.min(9))),
            Key::Op(op) => Event::Operator(op),
            Key::Clear => Event::Clear,
            Key::Equals => Event::Equals,
        }
    }
}

/// Screen rectangle of the button at `row`, `col`.
pub fn key_rect(origin: Pos2, row: usize, col: usize) -> Rect {
    let min = origin
        + KEYPAD_MARGIN
        + Vec2::new(col as f32 * BUTTON_PITCH.x, row as f32 * BUTTON_PITCH.y);
    Rect::from_min_size(min, BUTTON_SIZE)
}

/// Every key with its grid position, row by row.
pub fn keys() -> impl Iterator<Item = (usize, usize, Key)> {
    LAYOUT.into_iter().enumerate().flat_map(|(row, keys)| {
        keys.into_iter()
            .enumerate()
            .map(move |(col, key)| (row, col, key))
    })
}
