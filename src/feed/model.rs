use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::core::ItemId,
    foundation::error::{GridError, GridResult},
    pack::packer::{PackItem, PackOpts},
    shape::classify::classify_aspect_ratio,
    shape::palette::TileShape,
};

/// One entry of a media feed.
///
/// Only `id` and the shape inputs matter to the packer; the rest is carried for filtering and
/// for the caller's rendering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeedItem {
    /// Stable identity.
    pub id: ItemId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Album the item belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Publication date (ISO 8601), informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Media path relative to the feed's media root, used for measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Explicitly assigned shape; wins over `aspect_ratio`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<TileShape>,
    /// Measured `width / height` of the media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
}

impl FeedItem {
    /// Create an item with only an id.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            album: None,
            tags: Vec::new(),
            date: None,
            media: None,
            shape: None,
            aspect_ratio: None,
        }
    }

    /// Set the album.
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Append a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the media path.
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Set an explicit shape.
    pub fn with_shape(mut self, shape: TileShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Set the measured aspect ratio.
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Shape used for packing: explicit shape, else classified aspect ratio, else
    /// [`TileShape::MinorSquare`].
    pub fn resolved_shape(&self) -> TileShape {
        match (self.shape, self.aspect_ratio) {
            (Some(shape), _) => shape,
            (None, Some(ratio)) => classify_aspect_ratio(ratio),
            (None, None) => TileShape::default(),
        }
    }
}

impl PackItem for FeedItem {
    fn item_id(&self) -> &ItemId {
        &self.id
    }

    fn tile_shape(&self) -> TileShape {
        self.resolved_shape()
    }
}

/// A feed document: ordered items plus optional layout configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Feed {
    /// Layout options; [`PackOpts::default`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PackOpts>,
    /// Items in placement-priority order.
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Parse a feed from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GridResult<Self> {
        serde_json::from_reader(r).map_err(|e| GridError::serde(format!("parse feed JSON: {e}")))
    }

    /// Parse a feed from a JSON file on disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> GridResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open feed JSON '{}'", path.display()))
            .map_err(GridError::Other)?;
        let feed = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(items = feed.items.len(), "loaded feed");
        Ok(feed)
    }

    /// Check ids and layout options.
    pub fn validate(&self) -> GridResult<()> {
        let mut seen = BTreeSet::<&str>::new();
        for (idx, item) in self.items.iter().enumerate() {
            if item.id.as_str().is_empty() {
                return Err(GridError::validation(format!("items[{idx}] has an empty id")));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(GridError::validation(format!(
                    "items[{idx}] duplicates id '{}'",
                    item.id
                )));
            }
        }
        if let Some(layout) = &self.layout {
            layout.validate()?;
        }
        Ok(())
    }

    /// Layout options declared by the feed, or the defaults.
    pub fn pack_opts(&self) -> PackOpts {
        self.layout.clone().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feed/model.rs"]
mod tests;
