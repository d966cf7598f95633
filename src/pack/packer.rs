use crate::{
    foundation::core::{ItemId, Rect},
    foundation::error::{GridError, GridResult},
    pack::grid::OccupancyGrid,
    shape::palette::{TileShape, TileSpans},
};

/// Default spacing between grid cells, in pixels.
pub const DEFAULT_GAP_PX: f64 = 16.0;
/// Default number of grid columns.
pub const DEFAULT_COLUMNS: u32 = 9;
/// Default fixed height of the occupancy grid, in rows.
pub const DEFAULT_MAX_ROWS: u32 = 200;
/// Upper bound on `columns * rows` for one occupancy grid.
///
/// [`PackOpts::validate`] rejects options above it and [`pack`] clamps the grid height to it.
pub const MAX_GRID_CELLS: u64 = 4_000_000;

/// Anything the packer can place: a stable identity plus a tile shape.
pub trait PackItem {
    /// Stable identity used for result keying and change detection.
    fn item_id(&self) -> &ItemId;
    /// Shape the item occupies on the grid.
    fn tile_shape(&self) -> TileShape;
}

impl<T: PackItem + ?Sized> PackItem for &T {
    fn item_id(&self) -> &ItemId {
        (**self).item_id()
    }

    fn tile_shape(&self) -> TileShape {
        (**self).tile_shape()
    }
}

/// Minimal packer input: an id and an already-assigned shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Tile {
    /// Item identity.
    pub id: ItemId,
    /// Assigned shape.
    pub shape: TileShape,
}

impl Tile {
    /// Create a tile.
    pub fn new(id: impl Into<ItemId>, shape: TileShape) -> Self {
        Self {
            id: id.into(),
            shape,
        }
    }
}

impl PackItem for Tile {
    fn item_id(&self) -> &ItemId {
        &self.id
    }

    fn tile_shape(&self) -> TileShape {
        self.shape
    }
}

/// How many rows the occupancy grid extends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLimit {
    /// Fixed row ceiling. Items that find no free anchor above it are dropped.
    Fixed(u32),
    /// Size the grid to the summed row spans of the input, so only items wider than the
    /// column count can be dropped.
    Auto,
}

impl Default for RowLimit {
    fn default() -> Self {
        RowLimit::Fixed(DEFAULT_MAX_ROWS)
    }
}

/// Packing parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PackOpts {
    /// Spacing between cells in pixels (both axes).
    pub gap_px: f64,
    /// Number of grid columns.
    pub columns: u32,
    /// Occupancy grid height policy.
    pub row_limit: RowLimit,
}

impl Default for PackOpts {
    fn default() -> Self {
        Self {
            gap_px: DEFAULT_GAP_PX,
            columns: DEFAULT_COLUMNS,
            row_limit: RowLimit::default(),
        }
    }
}

impl PackOpts {
    /// Replace the cell gap.
    pub fn with_gap(mut self, gap_px: f64) -> Self {
        self.gap_px = gap_px;
        self
    }

    /// Replace the column count.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Replace the row limit policy.
    pub fn with_row_limit(mut self, row_limit: RowLimit) -> Self {
        self.row_limit = row_limit;
        self
    }

    /// Check the options for values that can only produce degenerate layouts.
    ///
    /// [`pack`] tolerates invalid options by returning an empty layout; this is for
    /// configuration boundaries that want to reject them up front.
    pub fn validate(&self) -> GridResult<()> {
        if self.columns == 0 {
            return Err(GridError::validation("layout 'columns' must be >= 1"));
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(GridError::validation(
                "layout 'gap_px' must be finite and >= 0",
            ));
        }
        let rows = match self.row_limit {
            RowLimit::Fixed(0) => {
                return Err(GridError::validation("layout 'row_limit' must be >= 1"));
            }
            RowLimit::Fixed(n) => u64::from(n),
            // Auto grows with the feed; only the one-row floor is known up front.
            RowLimit::Auto => 1,
        };
        if u64::from(self.columns) * rows > MAX_GRID_CELLS {
            return Err(GridError::validation(format!(
                "layout grid of {} columns x {rows} rows exceeds {MAX_GRID_CELLS} cells",
                self.columns
            )));
        }
        Ok(())
    }

    /// Side length of one square grid unit for `container_width_px`.
    ///
    /// `None` when the width is unmeasured (zero), the options are degenerate, or the gaps
    /// alone consume the whole width.
    pub fn unit_size(&self, container_width_px: f64) -> Option<f64> {
        if !container_width_px.is_finite() || container_width_px <= 0.0 {
            return None;
        }
        if self.columns == 0 || !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return None;
        }
        let cols = f64::from(self.columns);
        let unit = (container_width_px - self.gap_px * (cols - 1.0)) / cols;
        (unit > 0.0).then_some(unit)
    }

    /// Requested grid height, clamped so the grid stays within [`MAX_GRID_CELLS`].
    fn grid_rows<T: PackItem>(&self, items: &[T]) -> usize {
        let requested = match self.row_limit {
            RowLimit::Fixed(n) => n as usize,
            RowLimit::Auto => items
                .iter()
                .map(|i| i.tile_shape().spans().row_span as usize)
                .fold(0usize, usize::saturating_add)
                .max(1),
        };
        let max_rows = MAX_GRID_CELLS / u64::from(self.columns.max(1));
        let max_rows = usize::try_from(max_rows).unwrap_or(usize::MAX);
        if requested > max_rows {
            tracing::warn!(
                requested,
                max_rows,
                columns = self.columns,
                "occupancy grid clamped to the cell limit"
            );
        }
        requested.min(max_rows)
    }
}

/// Integer grid-cell rectangle covered by a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CellRect {
    /// Top row.
    pub row: u32,
    /// Left column.
    pub col: u32,
    /// Rows covered.
    pub row_span: u32,
    /// Columns covered.
    pub col_span: u32,
}

impl CellRect {
    /// `true` when the two rectangles share at least one cell.
    pub fn intersects(&self, other: &CellRect) -> bool {
        self.col < other.col + other.col_span
            && other.col < self.col + self.col_span
            && self.row < other.row + other.row_span
            && other.row < self.row + self.row_span
    }
}

/// Pixel geometry for one placed item.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Index of the item in the packer input.
    pub index: usize,
    /// Identity of the placed item.
    pub id: ItemId,
    /// Shape the item was placed with.
    pub shape: TileShape,
    /// Top grid row of the anchor cell.
    pub row: u32,
    /// Left grid column of the anchor cell.
    pub col: u32,
    /// Columns covered.
    pub col_span: u32,
    /// Rows covered.
    pub row_span: u32,
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels, including inner gaps.
    pub width: f64,
    /// Height in pixels, including inner gaps.
    pub height: f64,
}

impl Placement {
    /// Pixel rectangle of the tile.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Grid cells covered by the tile.
    pub fn cell_rect(&self) -> CellRect {
        CellRect {
            row: self.row,
            col: self.col,
            row_span: self.row_span,
            col_span: self.col_span,
        }
    }
}

/// An input item that found no free anchor in the occupancy grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DroppedItem {
    /// Index of the item in the packer input.
    pub index: usize,
    /// Identity of the dropped item.
    pub id: ItemId,
    /// Shape that could not be placed.
    pub shape: TileShape,
}

/// Result of one packing run.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PackLayout {
    /// Placed items, in input order.
    pub placements: Vec<Placement>,
    /// Maximum `y + height` over all placements, `0` when nothing was placed.
    pub content_height: f64,
    /// Items that did not fit, in input order.
    pub dropped: Vec<DroppedItem>,
    /// Unit cell size used for the run (`0` for an empty layout).
    pub unit_size: f64,
    /// Occupancy grid height used for the run.
    pub grid_rows: u32,
}

impl PackLayout {
    /// `true` when nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Pair each placement with its original item.
    pub fn with_items<'a, T>(
        &'a self,
        items: &'a [T],
    ) -> impl Iterator<Item = (&'a Placement, &'a T)> + 'a {
        self.placements
            .iter()
            .filter_map(move |p| items.get(p.index).map(|item| (p, item)))
    }

    /// Compare placement slots by id and position only.
    ///
    /// Used by callers that want to skip re-rendering when a recompute produced the same
    /// arrangement.
    pub fn same_positions(&self, other: &PackLayout) -> bool {
        self.placements.len() == other.placements.len()
            && self
                .placements
                .iter()
                .zip(&other.placements)
                .all(|(a, b)| a.id == b.id && a.x == b.x && a.y == b.y)
    }
}

/// Place `items` first-fit onto the grid, earliest item first.
///
/// Each item takes the first free anchor in row-major order that fits its shape. Items with no
/// free anchor inside the grid are reported in [`PackLayout::dropped`] and skipped. An
/// unmeasured (zero) or degenerate container width yields an empty layout. The grid never
/// exceeds [`MAX_GRID_CELLS`]: taller requests are clamped, and a column count above the limit
/// leaves no rows, so every item is dropped.
#[tracing::instrument(level = "debug", skip(items, opts), fields(count = items.len()))]
pub fn pack<T: PackItem>(items: &[T], container_width_px: f64, opts: &PackOpts) -> PackLayout {
    let Some(unit) = opts.unit_size(container_width_px) else {
        return PackLayout::default();
    };
    if items.is_empty() {
        return PackLayout::default();
    }

    let gap = opts.gap_px;
    let mut grid = OccupancyGrid::new(opts.columns as usize, opts.grid_rows(items));
    let mut placements = Vec::<Placement>::with_capacity(items.len());
    let mut dropped = Vec::<DroppedItem>::new();

    for (index, item) in items.iter().enumerate() {
        let shape = item.tile_shape();
        let spans = shape.spans();
        let Some((row, col)) = grid.first_fit(spans) else {
            dropped.push(DroppedItem {
                index,
                id: item.item_id().clone(),
                shape,
            });
            continue;
        };
        grid.mark(row, col, spans);
        placements.push(place(index, item.item_id(), shape, spans, row, col, unit, gap));
    }

    if !dropped.is_empty() {
        tracing::warn!(
            dropped = dropped.len(),
            rows = grid.rows(),
            columns = grid.columns(),
            "items did not fit in the occupancy grid"
        );
    }

    let content_height = placements
        .iter()
        .map(|p| p.y + p.height)
        .fold(0.0, f64::max);

    PackLayout {
        placements,
        content_height,
        dropped,
        unit_size: unit,
        grid_rows: u32::try_from(grid.rows()).unwrap_or(u32::MAX),
    }
}

#[allow(clippy::too_many_arguments)]
fn place(
    index: usize,
    id: &ItemId,
    shape: TileShape,
    spans: TileSpans,
    row: usize,
    col: usize,
    unit: f64,
    gap: f64,
) -> Placement {
    let cs = f64::from(spans.col_span);
    let rs = f64::from(spans.row_span);
    Placement {
        index,
        id: id.clone(),
        shape,
        row: row as u32,
        col: col as u32,
        col_span: spans.col_span,
        row_span: spans.row_span,
        x: col as f64 * (unit + gap),
        y: row as f64 * (unit + gap),
        width: cs * unit + (cs - 1.0) * gap,
        height: rs * unit + (rs - 1.0) * gap,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pack/packer.rs"]
mod tests;
