use crate::shape::palette::TileSpans;

/// Row-major boolean occupancy matrix for one packing run.
///
/// Rows that are completely filled from the top are tracked so the first-fit scan can start
/// below them; this never changes which cell a scan finds first.
#[derive(Clone, Debug)]
pub(crate) struct OccupancyGrid {
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
    full_prefix_rows: usize,
}

impl OccupancyGrid {
    pub(crate) fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![false; columns.saturating_mul(rows)],
            full_prefix_rows: 0,
        }
    }

    pub(crate) fn columns(&self) -> usize {
        self.columns
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    #[cfg(test)]
    pub(crate) fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.columns + col]
    }

    /// `true` when the `spans` rectangle anchored at `(row, col)` lies in bounds and is free.
    pub(crate) fn fits(&self, row: usize, col: usize, spans: TileSpans) -> bool {
        let (cs, rs) = (spans.col_span as usize, spans.row_span as usize);
        if row + rs > self.rows || col + cs > self.columns {
            return false;
        }
        (row..row + rs).all(|r| {
            let base = r * self.columns;
            !self.cells[base + col..base + col + cs].iter().any(|&c| c)
        })
    }

    /// First free anchor in row-major order, or `None` when the shape fits nowhere.
    pub(crate) fn first_fit(&self, spans: TileSpans) -> Option<(usize, usize)> {
        let (cs, rs) = (spans.col_span as usize, spans.row_span as usize);
        if cs == 0 || rs == 0 {
            return None;
        }
        let last_row = self.rows.checked_sub(rs)?;
        let last_col = self.columns.checked_sub(cs)?;
        (self.full_prefix_rows..=last_row).find_map(|row| {
            (0..=last_col)
                .find(|&col| self.fits(row, col, spans))
                .map(|col| (row, col))
        })
    }

    pub(crate) fn mark(&mut self, row: usize, col: usize, spans: TileSpans) {
        let (cs, rs) = (spans.col_span as usize, spans.row_span as usize);
        for r in row..row + rs {
            let base = r * self.columns;
            self.cells[base + col..base + col + cs].fill(true);
        }
        while self.full_prefix_rows < self.rows && self.row_is_full(self.full_prefix_rows) {
            self.full_prefix_rows += 1;
        }
    }

    fn row_is_full(&self, row: usize) -> bool {
        let base = row * self.columns;
        self.cells[base..base + self.columns].iter().all(|&c| c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pack/grid.rs"]
mod tests;
