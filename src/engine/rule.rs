use super::Cell;

/// Applies the Game of Life transition to a single cell
///
/// `live_neighbors` is the number of live cells among the 8 surrounding it.
/// Fewer than 2 or more than 3 kills the cell, exactly 2 keeps its current
/// state and exactly 3 brings it (or keeps it) alive.
#[inline]
pub(super) fn fate(cell: Cell, live_neighbors: u8) -> Cell {
    debug_assert!(live_neighbors <= 8, "more than 8 neighbors");
    match live_neighbors {
        2 => cell,
        3 => Cell::Alive,
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert_eq!(fate(Cell::Alive, 2), Cell::Alive);
        assert_eq!(fate(Cell::Alive, 3), Cell::Alive);
        assert_eq!(fate(Cell::Dead, 3), Cell::Alive);

        assert_eq!(fate(Cell::Alive, 0), Cell::Dead);
        assert_eq!(fate(Cell::Alive, 1), Cell::Dead);
        assert_eq!(fate(Cell::Alive, 4), Cell::Dead);
        assert_eq!(fate(Cell::Dead, 2), Cell::Dead);
        assert_eq!(fate(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn overpopulation_always_dies() {
        for n in 4..=8 {
            assert_eq!(fate(Cell::Alive, n), Cell::Dead);
            assert_eq!(fate(Cell::Dead, n), Cell::Dead);
        }
    }
}
