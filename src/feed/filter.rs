use crate::feed::model::FeedItem;

/// Album name that disables album filtering.
pub const ALL_ALBUMS: &str = "all";

/// Album/tag selection applied to a feed before packing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FeedFilter {
    /// Keep only items in this album. `None` or `"all"` keeps every album.
    #[serde(default)]
    pub album: Option<String>,
    /// Keep only items carrying this tag. `None` or `""` keeps every item.
    #[serde(default)]
    pub tag: Option<String>,
}

impl FeedFilter {
    /// Filter that keeps everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to an album.
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Restrict to a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    fn active_album(&self) -> Option<&str> {
        self.album.as_deref().filter(|a| *a != ALL_ALBUMS)
    }

    fn active_tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    /// `true` when the filter keeps every item.
    pub fn is_pass_through(&self) -> bool {
        self.active_album().is_none() && self.active_tag().is_none()
    }

    /// `true` when `item` passes both the album and the tag condition.
    pub fn matches(&self, item: &FeedItem) -> bool {
        let album_ok = self
            .active_album()
            .is_none_or(|a| item.album.as_deref() == Some(a));
        let tag_ok = self
            .active_tag()
            .is_none_or(|t| item.tags.iter().any(|x| x == t));
        album_ok && tag_ok
    }

    /// Items that pass the filter, in their original order.
    pub fn apply<'a>(&self, items: &'a [FeedItem]) -> Vec<&'a FeedItem> {
        let kept: Vec<&FeedItem> = items.iter().filter(|i| self.matches(i)).collect();
        tracing::debug!(
            album = self.active_album(),
            tag = self.active_tag(),
            kept = kept.len(),
            total = items.len(),
            "filtered feed"
        );
        kept
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feed/filter.rs"]
mod tests;
