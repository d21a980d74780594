use super::{Cell, Grid, MARGIN};
use std::{ops::Range, slice};

/// Row-by-row view of the visible part of a [`Grid`], the margin excluded
///
/// The window is a single pass iterator; ask the grid for a new one to read
/// the field again.
#[derive(Debug, Clone)]
pub struct VisibleWindow<'a> {
    grid: &'a Grid,
    rows: Range<usize>,
}
impl<'a> VisibleWindow<'a> {
    pub(super) fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            rows: MARGIN..grid.height() - MARGIN,
        }
    }
}

impl<'a> Iterator for VisibleWindow<'a> {
    type Item = WindowRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let y = self.rows.next()?;
        let row = self.grid.row(y);
        Some(WindowRow {
            cells: row[MARGIN..row.len() - MARGIN].iter(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}
impl ExactSizeIterator for VisibleWindow<'_> {}

/// The states of one visible row, left to right, `true` meaning alive
#[derive(Debug, Clone)]
pub struct WindowRow<'a> {
    cells: slice::Iter<'a, Cell>,
}

impl Iterator for WindowRow<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cells.next().map(|cell| cell.is_alive())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}
impl ExactSizeIterator for WindowRow<'_> {}
