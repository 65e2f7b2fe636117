//! Screen geometry of an emoji grid, recorded by the renderer each frame.

/// Where a panel's emoji grid landed on screen during the last draw.
///
/// The engine uses it for mouse hit-testing and for moving the cursor by
/// whole rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    /// Terminal columns taken by one emoji cell.
    pub cell_width: u16,
    /// Emoji per row (always at least 1).
    pub columns: usize,
    /// First visible row of the grid.
    pub scroll_row: usize,
    /// Number of items laid out in the grid.
    pub len: usize,
}

impl GridGeometry {
    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && column < self.x.saturating_add(self.width)
            && row < self.y.saturating_add(self.height)
    }

    /// Item index under a terminal cell, if any.
    #[must_use]
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.contains(column, row) || self.cell_width == 0 {
            return None;
        }
        let col = usize::from((column - self.x) / self.cell_width);
        if col >= self.columns {
            return None;
        }
        let grid_row = usize::from(row - self.y) + self.scroll_row;
        let index = grid_row * self.columns + col;
        (index < self.len).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::GridGeometry;

    fn geometry() -> GridGeometry {
        GridGeometry {
            x: 2,
            y: 3,
            width: 12,
            height: 2,
            cell_width: 4,
            columns: 3,
            scroll_row: 1,
            len: 10,
        }
    }

    #[test]
    fn index_at_maps_cells_with_scroll() {
        let grid = geometry();
        assert_eq!(grid.index_at(2, 3), Some(3));
        assert_eq!(grid.index_at(5, 3), Some(3));
        assert_eq!(grid.index_at(6, 3), Some(4));
        assert_eq!(grid.index_at(10, 4), Some(8));
    }

    #[test]
    fn index_at_rejects_outside_and_past_end() {
        let grid = geometry();
        assert_eq!(grid.index_at(1, 3), None);
        assert_eq!(grid.index_at(2, 5), None);
        let short = GridGeometry { len: 7, ..grid };
        assert_eq!(short.index_at(10, 4), None);
    }
}
