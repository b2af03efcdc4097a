use std::collections::BTreeSet;
use std::fmt;

use crate::error::LayoutError;
use crate::point::{Bar, Point};
use crate::types::*;

/// Starting layout as `(point, signed count)`: negative for White, positive for Black.
const START_LAYOUT: [(u8, i8); 8] = [
    (6, -5),
    (8, -3),
    (13, -5),
    (24, -2),
    (19, 5),
    (17, 3),
    (12, 5),
    (1, 2),
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    points: [Point; NUM_POINTS],
    bar: Bar,
    /// Occupied playable points per color, indexed by `Color::idx()`.
    /// Derived from `points`; trays are never included.
    locations: [BTreeSet<u8>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn startpos() -> Self {
        // START_LAYOUT is well formed, so this cannot fail.
        match Self::from_layout(&START_LAYOUT, Bar::default()) {
            Ok(board) => board,
            Err(e) => unreachable!("starting layout rejected: {e}"),
        }
    }

    /// Builds a board from `(point, signed count)` pairs plus the bar.
    ///
    /// Negative counts are White, positive counts Black. Checkers of a color
    /// not placed on a point or the bar are treated as already borne off, so
    /// every constructed board holds 15 checkers per color.
    pub fn from_layout(layout: &[(u8, i8)], bar: Bar) -> Result<Self, LayoutError> {
        let mut points: [Point; NUM_POINTS] = std::array::from_fn(|i| Point::new(i as u8));
        let mut placed = [0u32; 2];
        let mut seen = [false; NUM_POINTS];

        for &(index, signed) in layout {
            if index as usize >= NUM_POINTS {
                return Err(LayoutError::IndexOutOfRange(index));
            }
            if std::mem::replace(&mut seen[index as usize], true) {
                return Err(LayoutError::DuplicatePoint(index));
            }
            if signed == 0 {
                continue;
            }
            let color = if signed < 0 { Color::White } else { Color::Black };
            if index == color.other().tray() {
                return Err(LayoutError::WrongTray { color, index });
            }
            let amount = signed.unsigned_abs();
            placed[color.idx()] += amount as u32;
            points[index as usize].add_checkers(color, amount);
        }

        for color in Color::ALL {
            let count = placed[color.idx()] + bar.count(color) as u32;
            if count > CHECKERS_PER_COLOR as u32 {
                return Err(LayoutError::TooManyCheckers { color, count });
            }
            let missing = (CHECKERS_PER_COLOR as u32 - count) as u8;
            if missing > 0 {
                points[color.tray() as usize].add_checkers(color, missing);
            }
        }

        let mut locations = [BTreeSet::new(), BTreeSet::new()];
        for p in &points[1..=24] {
            if let Some(c) = p.color() {
                locations[c.idx()].insert(p.index());
            }
        }

        Ok(Self {
            points,
            bar,
            locations,
        })
    }

    pub fn point(&self, index: u8) -> &Point {
        &self.points[index as usize]
    }

    pub fn points(&self) -> &[Point; NUM_POINTS] {
        &self.points
    }

    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    /// Occupied playable points of `color`, ascending.
    pub fn locations(&self, color: Color) -> &BTreeSet<u8> {
        &self.locations[color.idx()]
    }

    /// Checkers of `color` in its tray.
    pub fn borne_off(&self, color: Color) -> u8 {
        self.point(color.tray()).count()
    }

    /// Moves a checker. Hits a lone opposing checker on the destination.
    ///
    /// The move must already be legal; violations panic.
    pub fn apply_move(&mut self, mv: Move) {
        let color = mv.color;
        if mv.src == BAR {
            self.bar.remove_checker(color);
        } else {
            let src = mv.src as u8;
            self.points[src as usize].remove_checker(color);
            if self.points[src as usize].is_empty() {
                self.locations[color.idx()].remove(&src);
            }
        }

        let opponent = color.other();
        let dst = &mut self.points[mv.dst as usize];
        if dst.color() == Some(opponent) {
            assert!(
                dst.count() == 1,
                "move {mv} lands on a block of {} {opponent} checkers",
                dst.count()
            );
            dst.remove_checker(opponent);
            self.locations[opponent.idx()].remove(&mv.dst);
            self.bar.add_checker(opponent);
        }

        let dst = &mut self.points[mv.dst as usize];
        dst.add_checker(color);
        if dst.count() == 1 && mv.dst != color.tray() {
            self.locations[color.idx()].insert(mv.dst);
        }
    }

    pub fn did_bear_off(&self, color: Color) -> bool {
        self.borne_off(color) == CHECKERS_PER_COLOR
    }

    /// Checkers of `color` still in play: on points 1..=24 or on the bar.
    pub fn count_active_checkers(&self, color: Color) -> u8 {
        let on_points: u8 = self.locations[color.idx()]
            .iter()
            .map(|&i| self.point(i).count())
            .sum();
        on_points + self.bar.count(color)
    }

    /// True iff `color` has nothing on the bar and everything left is in its home quadrant.
    pub fn can_bear_off(&self, color: Color) -> bool {
        if self.bar.contains(color) {
            return false;
        }
        let locs = &self.locations[color.idx()];
        match color {
            Color::White => locs.last().is_none_or(|&i| i <= 6),
            Color::Black => locs.first().is_none_or(|&i| i >= 19),
        }
    }

    /// The occupied point furthest from `color`'s tray, if any checker is on a point.
    pub fn get_furthest_point_idx(&self, color: Color) -> Option<u8> {
        let locs = &self.locations[color.idx()];
        match color {
            Color::White => locs.last().copied(),
            Color::Black => locs.first().copied(),
        }
    }

    pub fn movement_direction(color: Color) -> i8 {
        match color {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Landing point for a bar entry using `die`.
    pub fn debar_landing_point(color: Color, die: u8) -> u8 {
        match color {
            Color::White => 25 - die,
            Color::Black => die,
        }
    }

    /// Landing point after walking `distance` pips; walking past the edge clamps to the tray.
    pub fn walk_landing_point(color: Color, src: u8, distance: u8) -> u8 {
        let dst = src as i16 + distance as i16 * Self::movement_direction(color) as i16;
        if (0..=25).contains(&dst) {
            dst as u8
        } else {
            color.tray()
        }
    }

    /// Pips `color` still needs to bear everything off.
    pub fn pip_count(&self, color: Color) -> u32 {
        let on_points: u32 = self.locations[color.idx()]
            .iter()
            .map(|&i| {
                let dist = match color {
                    Color::White => i as u32,
                    Color::Black => 25 - i as u32,
                };
                dist * self.point(i).count() as u32
            })
            .sum();
        on_points + 25 * self.bar.count(color) as u32
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(67);
        writeln!(f, "{rule}")?;
        write!(f, "|")?;
        for i in 13..=24 {
            write!(f, " {i:>3} ")?;
            if i == 18 {
                write!(f, "|")?;
            }
        }
        writeln!(f, "| {:>3} |", 25)?;
        write!(f, "|")?;
        for i in 13..=24 {
            write!(f, "{}", self.point(i))?;
            if i == 18 {
                write!(f, "|")?;
            }
        }
        writeln!(f, "|{}|", self.point(25))?;
        writeln!(f, "|{:30}|{:30}|     |", "", "")?;
        write!(f, "|")?;
        for i in (1..=12).rev() {
            write!(f, "{}", self.point(i))?;
            if i == 7 {
                write!(f, "|")?;
            }
        }
        writeln!(f, "|{}|", self.point(0))?;
        write!(f, "|")?;
        for i in (1..=12).rev() {
            write!(f, " {i:>3} ")?;
            if i == 7 {
                write!(f, "|")?;
            }
        }
        writeln!(f, "| {:>3} |", 0)?;
        writeln!(f, "{}", self.bar)?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
