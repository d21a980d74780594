//! Hard-coded starting patterns and their placement on the grid.

use crate::{Coord, MARGIN, PatternError};
use std::{fmt, str::FromStr};

const fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}

/// Period 2 oscillator, vertical phase
const OSCILLATOR: &[Coord] = &[c(1, 0), c(1, 1), c(1, 2)];

/// Travels one cell down and right every 4 generations
const GLIDER: &[Coord] = &[c(0, 2), c(1, 0), c(1, 2), c(2, 1), c(2, 2)];

/// Gosper glider gun, emits a glider towards the bottom right every 30 generations
#[rustfmt::skip]
const GUN: &[Coord] = &[
    c(0, 4), c(0, 5), c(1, 4), c(1, 5),
    c(10, 4), c(10, 5), c(10, 6), c(11, 3),
    c(11, 7), c(12, 2), c(12, 8), c(13, 2),
    c(13, 8), c(14, 5), c(15, 3), c(15, 7),
    c(16, 4), c(16, 5), c(16, 6), c(17, 5),
    c(20, 2), c(20, 3), c(20, 4), c(21, 2),
    c(21, 3), c(21, 4), c(22, 1), c(22, 5),
    c(24, 0), c(24, 1), c(24, 5), c(24, 6),
    c(34, 2), c(34, 3), c(35, 2), c(35, 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    Oscillator,
    Glider,
    Gun,
}

impl PatternId {
    pub const ALL: [PatternId; 3] = [Self::Oscillator, Self::Glider, Self::Gun];

    /// Live cells relative to the pattern's own top left corner
    pub fn cells(self) -> &'static [Coord] {
        match self {
            Self::Oscillator => OSCILLATOR,
            Self::Glider => GLIDER,
            Self::Gun => GUN,
        }
    }

    /// Width and height of the box a caller must keep inside the visible field
    pub fn size(self) -> (usize, usize) {
        match self {
            Self::Oscillator => (3, 3),
            Self::Glider => (3, 3),
            Self::Gun => (36, 9),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Oscillator => "oscillator",
            Self::Glider => "glider",
            Self::Gun => "glider gun",
        }
    }

    /// Translates the pattern to absolute grid coordinates
    ///
    /// The offset is relative to the visible field's top left corner. No bounds
    /// checking happens here, see [`PatternId::size`].
    pub fn place(self, x_offset: usize, y_offset: usize) -> Vec<Coord> {
        let shift = Coord::new(MARGIN + x_offset, MARGIN + y_offset);
        self.cells().iter().map(|&cell| cell + shift).collect()
    }
}

impl FromStr for PatternId {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "o" | "oscillator" | "blinker" => Ok(Self::Oscillator),
            "g" | "glider" => Ok(Self::Glider),
            "u" | "gun" => Ok(Self::Gun),
            _ => Err(PatternError::Unknown(s.to_owned())),
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves `pattern_id` and places it at the given offset
///
/// An unrecognized identifier places nothing and yields an empty seed set.
pub fn load(pattern_id: &str, x_offset: usize, y_offset: usize) -> Vec<Coord> {
    pattern_id
        .parse::<PatternId>()
        .map(|id| id.place(x_offset, y_offset))
        .unwrap_or_default()
}
