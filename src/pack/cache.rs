use crate::{
    foundation::core::ItemId,
    pack::packer::{PackItem, PackLayout, PackOpts, pack},
};

/// Hit/miss counters for a [`PackCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the stored layout.
    pub hits: u64,
    /// Calls that ran the packer.
    pub misses: u64,
}

#[derive(Clone, Debug, PartialEq)]
struct PackKey {
    ids: Vec<ItemId>,
    width_bits: u64,
    opts: PackOpts,
}

impl PackKey {
    fn matches<T: PackItem>(&self, items: &[T], width: f64, opts: &PackOpts) -> bool {
        self.width_bits == width.to_bits()
            && self.opts == *opts
            && self.ids.len() == items.len()
            && self.ids.iter().zip(items).all(|(a, b)| a == b.item_id())
    }
}

/// Caller-owned memo of the last packing run.
///
/// The key is the ordered id sequence plus the container width and options. Payloads and
/// shapes are not compared: an item that keeps its id keeps its cached slot until the cache is
/// invalidated.
#[derive(Clone, Debug, Default)]
pub struct PackCache {
    key: Option<PackKey>,
    layout: PackLayout,
    stats: CacheStats,
}

impl PackCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when a call with these inputs would be answered without packing.
    pub fn is_current<T: PackItem>(&self, items: &[T], width: f64, opts: &PackOpts) -> bool {
        self.key
            .as_ref()
            .is_some_and(|k| k.matches(items, width, opts))
    }

    /// Repack if the inputs changed since the last run. Returns `true` when it repacked.
    pub fn refresh<T: PackItem>(&mut self, items: &[T], width: f64, opts: &PackOpts) -> bool {
        if self.is_current(items, width, opts) {
            self.stats.hits += 1;
            tracing::debug!(items = items.len(), width, "pack cache hit");
            return false;
        }
        self.stats.misses += 1;
        tracing::debug!(items = items.len(), width, "pack cache miss");
        self.layout = pack(items, width, opts);
        self.key = Some(PackKey {
            ids: items.iter().map(|i| i.item_id().clone()).collect(),
            width_bits: width.to_bits(),
            opts: opts.clone(),
        });
        true
    }

    /// Layout for these inputs, packing only when they changed.
    pub fn pack<T: PackItem>(&mut self, items: &[T], width: f64, opts: &PackOpts) -> &PackLayout {
        self.refresh(items, width, opts);
        &self.layout
    }

    /// Most recent layout (empty before the first run).
    pub fn layout(&self) -> &PackLayout {
        &self.layout
    }

    /// Forget the stored key so the next call repacks.
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Hit/miss counters since creation.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pack/cache.rs"]
mod tests;
