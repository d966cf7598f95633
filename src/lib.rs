//! feedgrid packs media feeds into a dense masonry grid.
//!
//! A feed is an ordered list of items, each occupying one shape from a small closed palette
//! ([`TileShape`]). The packer places items first-fit onto a fixed-width column grid, earliest
//! item first, and returns pixel geometry for every placed tile plus the total content height.
//!
//! # Pipeline overview
//!
//! 1. **Measure** (optional): read media dimensions from disk ([`measure_media`]) and attach
//!    aspect ratios to items ([`apply_measurements`]).
//! 2. **Classify**: map each aspect ratio to the closest palette shape
//!    ([`classify_aspect_ratio`]).
//! 3. **Filter**: keep the items selected by album/tag ([`FeedFilter`]), preserving order.
//! 4. **Pack**: place the items on the grid ([`pack`]), optionally through a caller-owned
//!    memo ([`PackCache`]) that skips recomputation when ids and width are unchanged.
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: classification and packing are pure; identical input gives
//!   bit-identical output.
//! - **No IO in the packer**: only the measurement stage and feed loading touch the disk.
//! - **Graceful degradation**: the packer never errors; items that cannot be placed are
//!   reported in [`PackLayout::dropped`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod feed;
mod foundation;
mod pack;
mod shape;

pub use feed::filter::{ALL_ALBUMS, FeedFilter};
pub use feed::measure::{MeasureOpts, MediaMeasurement, apply_measurements, measure_media};
pub use feed::model::{Feed, FeedItem};
pub use feed::skeleton::{
    DEFAULT_SKELETON_COUNT, DEFAULT_SKELETON_WIDTH_PX, SKELETON_CYCLE, SKELETON_MAX_ROWS,
    pack_skeleton, skeleton_tiles,
};
pub use foundation::core::{ItemId, Point, Rect, Size};
pub use foundation::error::{GridError, GridResult};
pub use pack::cache::{CacheStats, PackCache};
pub use pack::packer::{
    CellRect, DEFAULT_COLUMNS, DEFAULT_GAP_PX, DEFAULT_MAX_ROWS, DroppedItem, MAX_GRID_CELLS,
    PackItem, PackLayout, PackOpts, Placement, RowLimit, Tile, pack,
};
pub use shape::classify::{
    FALLBACK_ASPECT_RATIO, aspect_ratio, classify_aspect_ratio, classify_dimensions,
};
pub use shape::palette::{TileShape, TileSpans};
