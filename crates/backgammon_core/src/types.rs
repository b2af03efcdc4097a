use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of checkers each color owns.
pub const CHECKERS_PER_COLOR: u8 = 15;

/// Points 0..=25: the 24 playable points plus both bear-off trays.
pub const NUM_POINTS: usize = 26;

/// White bears off into point 0.
pub const WHITE_TRAY: u8 = 0;

/// Black bears off into point 25.
pub const BLACK_TRAY: u8 = 25;

/// Source index used by moves entering from the bar.
pub const BAR: i8 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Sign used for game scores: Black wins count positive, White wins negative.
    pub fn win_factor(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Index of this color's bear-off tray.
    pub fn tray(self) -> u8 {
        match self {
            Color::White => WHITE_TRAY,
            Color::Black => BLACK_TRAY,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "W"),
            Color::Black => write!(f, "B"),
        }
    }
}

/// A single checker displacement.
///
/// `src` is a point index in 1..=24 or [`BAR`]. `distance` is the pip value
/// consumed, which for an overshooting bear-off is larger than the actual
/// distance walked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub src: i8,
    pub dst: u8,
    pub distance: u8,
}

impl Move {
    /// Builds a move, deriving the distance when `distance` is `None`.
    ///
    /// Bar entries derive the distance from the destination: Black enters on
    /// point `d`, White on point `25 - d`.
    pub fn new(color: Color, src: i8, dst: u8, distance: Option<u8>) -> Self {
        if src != BAR {
            assert!((1..=24).contains(&src), "move source out of range: {src}");
        }
        match color {
            Color::White => assert!(dst <= 24, "white move destination out of range: {dst}"),
            Color::Black => assert!((1..=25).contains(&dst), "black move destination out of range: {dst}"),
        }
        let distance = distance.unwrap_or_else(|| {
            if src == BAR {
                match color {
                    Color::White => 25 - dst,
                    Color::Black => dst,
                }
            } else {
                (src as i16 - dst as i16).unsigned_abs() as u8
            }
        });
        Self {
            color,
            src,
            dst,
            distance,
        }
    }

    pub fn is_bar_entry(&self) -> bool {
        self.src == BAR
    }

    pub fn is_bear_off(&self) -> bool {
        self.dst == self.color.tray()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bar_entry() {
            write!(f, "bar ---[{}]---> {}", self.distance, self.dst)
        } else {
            write!(f, "{} ---[{}]---> {}", self.src, self.distance, self.dst)
        }
    }
}
