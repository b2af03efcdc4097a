//! Single board locations and the bar.
//!
//! A point is never mixed: it is either empty (no owner) or holds one or more
//! checkers of a single color. Both types panic when asked to remove a checker
//! that is not there, since callers are expected to validate legality first.

use std::fmt;

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    index: u8,
    count: u8,
    color: Option<Color>,
}

impl Point {
    pub fn new(index: u8) -> Self {
        Self {
            index,
            count: 0,
            color: None,
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True if `color` owns this point with exactly one checker.
    pub fn is_blot_of(&self, color: Color) -> bool {
        self.color == Some(color) && self.count == 1
    }

    /// True if `color` owns this point with two or more checkers.
    pub fn is_block_of(&self, color: Color) -> bool {
        self.color == Some(color) && self.count >= 2
    }

    pub fn add_checkers(&mut self, color: Color, amount: u8) {
        assert!(
            self.color != Some(color.other()),
            "point {} holds {} checkers; remove them before adding {}",
            self.index,
            color.other(),
            color
        );
        self.count += amount;
        self.color = Some(color);
    }

    pub fn add_checker(&mut self, color: Color) {
        self.add_checkers(color, 1);
    }

    pub fn remove_checker(&mut self, color: Color) {
        assert!(self.count > 0, "point {} is empty", self.index);
        assert!(
            self.color == Some(color),
            "point {} belongs to the opposite player",
            self.index
        );
        self.count -= 1;
        if self.count == 0 {
            self.color = None;
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(c) => write!(f, " {:>2}{} ", self.count, c),
            None => write!(f, "  .  "),
        }
    }
}

/// Checkers that were hit and wait to re-enter, per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bar {
    counts: [u8; 2],
}

impl Bar {
    pub fn new(white: u8, black: u8) -> Self {
        Self {
            counts: [white, black],
        }
    }

    pub fn count(&self, color: Color) -> u8 {
        self.counts[color.idx()]
    }

    pub fn contains(&self, color: Color) -> bool {
        self.count(color) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.counts == [0, 0]
    }

    pub fn add_checker(&mut self, color: Color) {
        self.counts[color.idx()] += 1;
    }

    pub fn remove_checker(&mut self, color: Color) {
        let count = &mut self.counts[color.idx()];
        assert!(*count > 0, "no {color} checker on the bar");
        *count -= 1;
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bar: {}W {}B",
            self.count(Color::White),
            self.count(Color::Black)
        )
    }
}
