mod rule;
mod scan;
mod window;

use self::scan::NeighborScan;
pub use self::window::{VisibleWindow, WindowRow};
use crate::{Coord, GridError};

/// Width of the dead buffer surrounding the visible field on every side
pub const MARGIN: usize = 5;
/// Smallest accepted visible width, the glider gun is 36 cells wide
pub const MIN_VISIBLE_WIDTH: usize = 40;
/// Smallest accepted visible height, the glider gun is 9 cells tall
pub const MIN_VISIBLE_HEIGHT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}
impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// 1 for a live cell, 0 for a dead one
    #[inline]
    fn live(self) -> u8 {
        u8::from(self.is_alive())
    }
}
impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// A fixed size Game of Life field with a dead margin of [`MARGIN`] cells
///
/// Cells are stored row-major in one buffer. The outermost ring of cells is
/// never recomputed, so it stays dead and every recomputed cell has all 8
/// neighbors in bounds.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    // receives the next generation, then swapped with `cells`
    next: Vec<Cell>,
    generation: usize,
}

impl Grid {
    /// Creates an all dead grid with a visible field of the given size
    ///
    /// Fails if the visible field is smaller than
    /// [`MIN_VISIBLE_WIDTH`] x [`MIN_VISIBLE_HEIGHT`], or too large to address
    /// once the margin is added.
    pub fn new(visible_width: usize, visible_height: usize) -> Result<Self, GridError> {
        if visible_width < MIN_VISIBLE_WIDTH {
            return Err(GridError::TooNarrow {
                width: visible_width,
                min: MIN_VISIBLE_WIDTH,
            });
        }
        if visible_height < MIN_VISIBLE_HEIGHT {
            return Err(GridError::TooShort {
                height: visible_height,
                min: MIN_VISIBLE_HEIGHT,
            });
        }

        let too_large = || GridError::TooLarge {
            width: visible_width,
            height: visible_height,
        };
        let width = visible_width.checked_add(2 * MARGIN).ok_or_else(too_large)?;
        let height = visible_height.checked_add(2 * MARGIN).ok_or_else(too_large)?;
        // a Vec never holds more than isize::MAX bytes
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(too_large)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
            generation: 0,
        })
    }

    /// Marks every given coordinate alive
    ///
    /// Seeding is additive, cells that are already alive stay alive.
    ///
    /// # Panics
    /// If a coordinate lies in the dead margin or outside the grid.
    pub fn seed<I: IntoIterator<Item = Coord>>(&mut self, coords: I) {
        for coord in coords {
            assert!(
                self.in_field(coord),
                "seed coordinate {coord} lies outside the visible field"
            );
            let i = self.index(coord);
            self.cells[i] = Cell::Alive;
        }
    }

    /// Advances the simulation by exactly one generation
    pub fn step(&mut self) {
        let w = self.width;
        for y in 1..self.height - 1 {
            let above = &self.cells[(y - 1) * w..y * w];
            let row = &self.cells[y * w..(y + 1) * w];
            let below = &self.cells[(y + 1) * w..(y + 2) * w];

            // only the inner cells are written, the border of `next` stays dead
            let out = &mut self.next[y * w + 1..(y + 1) * w - 1];
            for (slot, (cell, neighbors)) in out.iter_mut().zip(NeighborScan::new(above, row, below)) {
                *slot = rule::fate(cell, neighbors);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    /// The current state of a cell
    ///
    /// # Panics
    /// If `coord` is outside the grid.
    #[inline]
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.cells[self.index(coord)].is_alive()
    }

    /// Iterates the rows of the visible field, top to bottom
    pub fn visible_window(&self) -> VisibleWindow<'_> {
        VisibleWindow::new(self)
    }

    /// Absolute coordinates of every live cell, in row-major order
    pub fn alive_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(i, _)| Coord::new(i % self.width, i / self.width))
            .collect()
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live cells inside the visible field, the margin excluded
    pub fn visible_alive_count(&self) -> usize {
        self.visible_window()
            .map(|row| row.filter(|&alive| alive).count())
            .sum()
    }

    /// Number of completed calls to [`Grid::step`]
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Full width, margin included
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Full height, margin included
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn visible_width(&self) -> usize {
        self.width - 2 * MARGIN
    }
    #[inline]
    pub fn visible_height(&self) -> usize {
        self.height - 2 * MARGIN
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    fn in_field(&self, coord: Coord) -> bool {
        (MARGIN..self.width - MARGIN).contains(&coord.x)
            && (MARGIN..self.height - MARGIN).contains(&coord.y)
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        assert!(
            coord.x < self.width && coord.y < self.height,
            "{coord} is outside the {}x{} grid",
            self.width,
            self.height
        );
        coord.y * self.width + coord.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(MIN_VISIBLE_WIDTH, MIN_VISIBLE_HEIGHT).expect("minimum sized grid")
    }

    fn at(x: usize, y: usize) -> Coord {
        Coord::new(MARGIN + x, MARGIN + y)
    }

    fn border_ring(grid: &Grid) -> Vec<Coord> {
        let (w, h) = (grid.width(), grid.height());
        let mut ring = Vec::new();
        for x in 0..w {
            ring.push(Coord::new(x, 0));
            ring.push(Coord::new(x, h - 1));
        }
        for y in 1..h - 1 {
            ring.push(Coord::new(0, y));
            ring.push(Coord::new(w - 1, y));
        }
        ring
    }

    #[test]
    fn new_rejects_small_fields() {
        assert_eq!(
            Grid::new(39, 20).unwrap_err(),
            GridError::TooNarrow { width: 39, min: 40 }
        );
        assert_eq!(
            Grid::new(40, 19).unwrap_err(),
            GridError::TooShort { height: 19, min: 20 }
        );
    }

    #[test]
    fn new_rejects_overflowing_fields() {
        assert_eq!(
            Grid::new(usize::MAX, 20).unwrap_err(),
            GridError::TooLarge {
                width: usize::MAX,
                height: 20
            }
        );
        assert_eq!(
            Grid::new(40, usize::MAX - MARGIN).unwrap_err(),
            GridError::TooLarge {
                width: 40,
                height: usize::MAX - MARGIN
            }
        );
        // both sides fit, their product does not
        let side = 1usize << (usize::BITS / 2);
        assert_eq!(
            Grid::new(side, side).unwrap_err(),
            GridError::TooLarge {
                width: side,
                height: side
            }
        );
    }

    #[test]
    fn new_adds_margin_and_starts_dead() {
        let grid = Grid::new(45, 21).unwrap();

        assert_eq!((grid.width(), grid.height()), (55, 31));
        assert_eq!((grid.visible_width(), grid.visible_height()), (45, 21));
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn seed_marks_exactly_the_given_cells() {
        let mut grid = grid();
        let seeded = vec![at(0, 0), at(3, 7), at(39, 19)];
        grid.seed(seeded.clone());

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let coord = Coord::new(x, y);
                assert_eq!(grid.is_alive(coord), seeded.contains(&coord), "{coord}");
            }
        }
    }

    #[test]
    fn seed_is_additive() {
        let mut grid = grid();
        grid.seed([at(1, 1)]);
        grid.seed([at(2, 2), at(1, 1)]);
        grid.seed([]);

        assert_eq!(grid.alive_cells(), vec![at(1, 1), at(2, 2)]);
    }

    #[test]
    #[should_panic(expected = "outside the visible field")]
    fn seed_rejects_margin_cells() {
        grid().seed([Coord::new(MARGIN - 1, MARGIN)]);
    }

    #[test]
    #[should_panic]
    fn is_alive_rejects_out_of_range() {
        let grid = grid();
        grid.is_alive(Coord::new(grid.width(), 0));
    }

    #[test]
    fn border_ring_stays_dead() {
        let mut grid = grid();
        // a dense block hugging the visible corner spills into the margin
        let seeded = (0..6).flat_map(|y| (0..6).map(move |x| at(x, y)));
        grid.seed(seeded);

        let ring = border_ring(&grid);
        for _ in 0..50 {
            assert!(ring.iter().all(|&c| !grid.is_alive(c)));
            grid.step();
        }
        assert!(ring.iter().all(|&c| !grid.is_alive(c)));
    }

    #[test]
    fn visible_count_ignores_margin() {
        let mut grid = grid();
        // a glider near the bottom right corner runs into the margin
        grid.seed([at(37, 17), at(38, 18), at(36, 19), at(37, 19), at(38, 19)]);
        assert_eq!(grid.visible_alive_count(), 5);

        for _ in 0..12 {
            grid.step();
        }
        assert!(grid.visible_alive_count() < grid.alive_count());
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = grid();
        grid.seed([at(10, 10)]);
        grid.step();

        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn block_is_still_life() {
        let mut grid = grid();
        let block = vec![at(4, 4), at(5, 4), at(4, 5), at(5, 5)];
        grid.seed(block.clone());

        for _ in 0..10 {
            grid.step();
            assert_eq!(grid.alive_cells(), block);
        }
    }

    #[test]
    fn blinker_flips_orientation() {
        let mut grid = grid();
        let vertical = vec![at(8, 7), at(8, 8), at(8, 9)];
        let horizontal = vec![at(7, 8), at(8, 8), at(9, 8)];
        grid.seed(vertical.clone());

        grid.step();
        assert_eq!(grid.alive_cells(), horizontal);
        grid.step();
        assert_eq!(grid.alive_cells(), vertical);
    }

    #[test]
    fn window_covers_only_visible_field() {
        let mut grid = grid();
        grid.seed([at(0, 0), at(39, 19)]);

        let rows: Vec<Vec<bool>> = grid.visible_window().map(Iterator::collect).collect();
        assert_eq!(rows.len(), 20);
        assert!(rows.iter().all(|row| row.len() == 40));
        assert!(rows[0][0]);
        assert!(rows[19][39]);
        assert_eq!(rows.iter().flatten().filter(|&&alive| alive).count(), 2);
    }

    #[test]
    fn window_is_restartable() {
        let mut grid = grid();
        grid.seed([at(2, 3), at(3, 3), at(4, 3)]);

        let first: Vec<Vec<bool>> = grid.visible_window().map(Iterator::collect).collect();
        let second: Vec<Vec<bool>> = grid.visible_window().map(Iterator::collect).collect();
        assert_eq!(first, second);

        grid.step();
        let third: Vec<Vec<bool>> = grid.visible_window().map(Iterator::collect).collect();
        assert_ne!(first, third);
    }
}
