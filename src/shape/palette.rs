use std::{fmt, str::FromStr};

use crate::foundation::error::{GridError, GridResult};

/// Grid footprint of a tile, in grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TileSpans {
    /// Number of grid columns covered.
    pub col_span: u32,
    /// Number of grid rows covered.
    pub row_span: u32,
}

/// Closed palette of tile shapes a feed item can take.
///
/// Variant order is the palette order: [`TileShape::ALL`] lists the shapes in this order and
/// aspect-ratio classification breaks ties in favor of the earlier entry.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TileShape {
    /// 2×2 units, nominal ratio 1.0. Fallback shape.
    #[default]
    MinorSquare,
    /// 2×3 units, nominal ratio 0.5.
    MinorPortrait,
    /// 3×2 units, nominal ratio 2.0.
    MinorLandscape,
    /// 1×2 units, nominal ratio 0.25.
    SingleColumn,
    /// 3×4 units, nominal ratio 0.75.
    MajorPortrait,
    /// 4×3 units, nominal ratio 1.5.
    MajorLandscape,
    /// Alias of [`TileShape::MajorPortrait`] spans.
    MajorSquare,
    /// Alias of [`TileShape::MinorPortrait`] spans.
    Apparel,
}

impl TileShape {
    /// Every shape, in palette order.
    pub const ALL: [TileShape; 8] = [
        TileShape::MinorSquare,
        TileShape::MinorPortrait,
        TileShape::MinorLandscape,
        TileShape::SingleColumn,
        TileShape::MajorPortrait,
        TileShape::MajorLandscape,
        TileShape::MajorSquare,
        TileShape::Apparel,
    ];

    /// Grid footprint of this shape.
    pub const fn spans(self) -> TileSpans {
        let (col_span, row_span) = match self {
            TileShape::MinorSquare => (2, 2),
            TileShape::MinorPortrait | TileShape::Apparel => (2, 3),
            TileShape::MinorLandscape => (3, 2),
            TileShape::SingleColumn => (1, 2),
            TileShape::MajorPortrait | TileShape::MajorSquare => (3, 4),
            TileShape::MajorLandscape => (4, 3),
        };
        TileSpans { col_span, row_span }
    }

    /// Nominal width:height ratio used for classification.
    ///
    /// These are design constants and do not always equal `col_span / row_span`.
    pub const fn nominal_ratio(self) -> f64 {
        match self {
            TileShape::MinorSquare => 1.0,
            TileShape::MinorPortrait | TileShape::Apparel => 0.5,
            TileShape::MinorLandscape => 2.0,
            TileShape::SingleColumn => 0.25,
            TileShape::MajorPortrait | TileShape::MajorSquare => 0.75,
            TileShape::MajorLandscape => 1.5,
        }
    }

    /// Stable kebab-case name (matches the serialized form).
    pub const fn name(self) -> &'static str {
        match self {
            TileShape::MinorSquare => "minor-square",
            TileShape::MinorPortrait => "minor-portrait",
            TileShape::MinorLandscape => "minor-landscape",
            TileShape::SingleColumn => "single-column",
            TileShape::MajorPortrait => "major-portrait",
            TileShape::MajorLandscape => "major-landscape",
            TileShape::MajorSquare => "major-square",
            TileShape::Apparel => "apparel",
        }
    }
}

impl fmt::Display for TileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileShape {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        TileShape::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| GridError::validation(format!("unknown tile shape '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/palette.rs"]
mod tests;
