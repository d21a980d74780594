use super::Cell;

/// A cursor over one grid row that yields each inner cell with its live
/// neighbor count
///
/// [`NeighborScan`] keeps the live counts of three adjacent columns (the one
/// left of the cursor, the cursor's own and the one right of it) across the
/// row above, the row itself and the row below. Moving the cursor one cell to
/// the right shifts the counts along and only sums the single new column, so
/// every cell is read three times per row instead of nine.
///
/// The first and last cells of the row are never yielded, they have no
/// neighbor on one side.
#[derive(Debug)]
pub(super) struct NeighborScan<'a> {
    rows: [&'a [Cell]; 3],
    x: usize,
    sums: [u8; 3],
}

impl<'a> NeighborScan<'a> {
    /// Creates a scan of `row`, using `above` and `below` as its vertical neighbors
    pub(super) fn new(above: &'a [Cell], row: &'a [Cell], below: &'a [Cell]) -> Self {
        debug_assert!(
            above.len() == row.len() && row.len() == below.len(),
            "rows differ in width"
        );
        let mut scan = Self {
            rows: [above, row, below],
            x: 1,
            sums: [0; 3],
        };
        if row.len() >= 3 {
            scan.sums = [scan.column(0), scan.column(1), scan.column(2)];
        }
        scan
    }

    /// Number of live cells in column `x` across the three rows
    #[inline]
    fn column(&self, x: usize) -> u8 {
        self.rows.iter().map(|row| row[x].live()).sum()
    }

    #[inline]
    fn width(&self) -> usize {
        self.rows[1].len()
    }
}

impl Iterator for NeighborScan<'_> {
    type Item = (Cell, u8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x + 1 >= self.width() {
            return None;
        }

        let center = self.rows[1][self.x];
        let neighbors = self.sums.iter().sum::<u8>() - center.live();

        self.x += 1;
        if self.x + 1 < self.width() {
            self.sums = [self.sums[1], self.sums[2], self.column(self.x + 1)];
        }
        Some((center, neighbors))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width().saturating_sub(self.x + 1);
        (remaining, Some(remaining))
    }
}
