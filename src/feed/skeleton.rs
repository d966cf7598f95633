use crate::{
    pack::packer::{PackLayout, PackOpts, RowLimit, Tile, pack},
    shape::palette::TileShape,
};

/// Placeholder tile count shown while a feed loads.
pub const DEFAULT_SKELETON_COUNT: usize = 20;
/// Container width assumed before the real width is measured.
pub const DEFAULT_SKELETON_WIDTH_PX: f64 = 1200.0;
/// Occupancy grid height for placeholder layouts.
pub const SKELETON_MAX_ROWS: u32 = 100;

/// Shape sequence placeholder tiles cycle through.
pub const SKELETON_CYCLE: [TileShape; 8] = [
    TileShape::MinorSquare,
    TileShape::MinorPortrait,
    TileShape::MinorLandscape,
    TileShape::MajorPortrait,
    TileShape::MajorLandscape,
    TileShape::MajorSquare,
    TileShape::Apparel,
    TileShape::SingleColumn,
];

/// `count` placeholder tiles with ids `skeleton-0..` and cycling shapes.
pub fn skeleton_tiles(count: usize) -> Vec<Tile> {
    (0..count)
        .map(|i| {
            Tile::new(
                format!("skeleton-{i}"),
                SKELETON_CYCLE[i % SKELETON_CYCLE.len()],
            )
        })
        .collect()
}

/// Pack `count` placeholder tiles into `container_width_px`.
pub fn pack_skeleton(count: usize, container_width_px: f64) -> PackLayout {
    let opts = PackOpts::default().with_row_limit(RowLimit::Fixed(SKELETON_MAX_ROWS));
    pack(&skeleton_tiles(count), container_width_px, &opts)
}

#[cfg(test)]
#[path = "../../tests/unit/feed/skeleton.rs"]
mod tests;
