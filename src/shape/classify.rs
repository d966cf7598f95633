use crate::shape::palette::TileShape;

/// Aspect ratio used whenever real media dimensions are unavailable or degenerate.
pub const FALLBACK_ASPECT_RATIO: f64 = 1.0;

/// Compute `width / height`, normalizing degenerate input to [`FALLBACK_ASPECT_RATIO`].
///
/// Zero, negative, and non-finite dimensions (including the `0/0` case) never produce a NaN or
/// infinite ratio.
pub fn aspect_ratio(width: f64, height: f64) -> f64 {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return FALLBACK_ASPECT_RATIO;
    }
    width / height
}

/// Pick the palette shape whose nominal ratio is closest to `ratio`.
///
/// Scans [`TileShape::ALL`] in order and only replaces the current best on a strictly smaller
/// distance, so an exact tie always resolves to the earlier palette entry. Degenerate ratios are
/// classified as [`FALLBACK_ASPECT_RATIO`].
pub fn classify_aspect_ratio(ratio: f64) -> TileShape {
    let ratio = if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        FALLBACK_ASPECT_RATIO
    };

    let mut best = TileShape::default();
    let mut best_diff = (ratio - best.nominal_ratio()).abs();
    for shape in TileShape::ALL {
        let diff = (ratio - shape.nominal_ratio()).abs();
        if diff < best_diff {
            best = shape;
            best_diff = diff;
        }
    }
    best
}

/// Classify media by its pixel dimensions.
pub fn classify_dimensions(width: u32, height: u32) -> TileShape {
    classify_aspect_ratio(aspect_ratio(f64::from(width), f64::from(height)))
}

#[cfg(test)]
#[path = "../../tests/unit/shape/classify.rs"]
mod tests;
