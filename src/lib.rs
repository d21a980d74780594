//! Core library for a bounded Game of Life with a dead margin.

pub mod coord;
pub mod engine;
pub mod error;
pub mod pattern;

pub use coord::Coord;
pub use engine::{Cell, Grid, MARGIN, VisibleWindow};
pub use error::{GridError, PatternError};
pub use pattern::PatternId;
