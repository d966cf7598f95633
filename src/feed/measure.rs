use std::{collections::HashMap, path::Path};

use rayon::prelude::*;

use crate::{
    feed::model::FeedItem,
    foundation::core::ItemId,
    foundation::error::{GridError, GridResult},
    shape::classify::aspect_ratio,
};

/// Measured pixel dimensions of one item's media.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaMeasurement {
    /// Item the media belongs to.
    pub id: ItemId,
    /// Width in pixels (`1` when measurement failed).
    pub width: u32,
    /// Height in pixels (`1` when measurement failed).
    pub height: u32,
    /// `false` when the media could not be read and the 1×1 fallback was used.
    pub measured: bool,
}

impl MediaMeasurement {
    /// `width / height`, degenerate values normalized to 1.0.
    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(f64::from(self.width), f64::from(self.height))
    }
}

/// Media measurement settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MeasureOpts {
    /// Worker threads; `None` uses the rayon default.
    #[serde(default)]
    pub threads: Option<usize>,
}

/// Read media dimensions for every item that has a `media` path and no explicit shape.
///
/// Only image headers are read. Unreadable media falls back to 1×1 with a warning; the only
/// error is an invalid thread configuration. Results keep the order of `items`.
#[tracing::instrument(skip(items, opts), fields(count = items.len()))]
pub fn measure_media(
    root: &Path,
    items: &[FeedItem],
    opts: &MeasureOpts,
) -> GridResult<Vec<MediaMeasurement>> {
    let pending: Vec<(&ItemId, &str)> = items
        .iter()
        .filter(|i| i.shape.is_none())
        .filter_map(|i| i.media.as_deref().map(|m| (&i.id, m)))
        .collect();
    if pending.is_empty() {
        return Ok(Vec::new());
    }

    let pool = build_thread_pool(opts.threads)?;
    let out: Vec<MediaMeasurement> = pool.install(|| {
        pending
            .par_iter()
            .map(|&(id, media)| measure_one(root, id, media))
            .collect()
    });

    let failed = out.iter().filter(|m| !m.measured).count();
    tracing::debug!(measured = out.len() - failed, failed, "measured media");
    Ok(out)
}

/// Write measured aspect ratios back onto the matching items.
///
/// Items with an explicit shape keep it; their aspect ratio is still updated.
pub fn apply_measurements(items: &mut [FeedItem], measurements: &[MediaMeasurement]) {
    let by_id: HashMap<&ItemId, f64> = measurements
        .iter()
        .map(|m| (&m.id, m.aspect_ratio()))
        .collect();
    for item in items.iter_mut() {
        if let Some(&ratio) = by_id.get(&item.id) {
            item.aspect_ratio = Some(ratio);
        }
    }
}

fn measure_one(root: &Path, id: &ItemId, media: &str) -> MediaMeasurement {
    let path = root.join(media);
    match image::image_dimensions(&path) {
        Ok((width, height)) if width > 0 && height > 0 => MediaMeasurement {
            id: id.clone(),
            width,
            height,
            measured: true,
        },
        Ok((width, height)) => {
            tracing::warn!(%id, path = %path.display(), width, height, "degenerate media size, using 1x1");
            fallback(id)
        }
        Err(e) => {
            tracing::warn!(%id, path = %path.display(), error = %e, "cannot read media, using 1x1");
            fallback(id)
        }
    }
}

fn fallback(id: &ItemId) -> MediaMeasurement {
    MediaMeasurement {
        id: id.clone(),
        width: 1,
        height: 1,
        measured: false,
    }
}

fn build_thread_pool(threads: Option<usize>) -> GridResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GridError::validation(
            "measure 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GridError::measure(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/feed/measure.rs"]
mod tests;
