use std::fmt;

use slotmap::SlotMap;

use crate::geometry::Polygon;

slotmap::new_key_type! {
    /// Generational id for a clip region owned by a [`ClipRegionStore`].
    pub struct ClipRegionId;
}

/// Produces ids for clip-region names.
///
/// Ids must be monotonically increasing and never reused for the lifetime
/// of the generator. Injected rather than read from process-wide state so
/// tests and embedders control uniqueness themselves.
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> u64;
}

/// Default generator: a plain incrementing counter starting at zero.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// A named clip region and its current outline.
#[derive(Debug, Clone)]
pub struct ClipRegion {
    name: String,
    outline: Polygon,
}

impl ClipRegion {
    /// Returns the unique region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current outline.
    #[must_use]
    pub fn outline(&self) -> &Polygon {
        &self.outline
    }
}

/// Caller-owned registry of clip regions.
///
/// Regions are arena-allocated; ids stay valid until removal and names are
/// unique per generator for the life of the store.
#[derive(Debug)]
pub struct ClipRegionStore {
    regions: SlotMap<ClipRegionId, ClipRegion>,
    ids: Box<dyn IdGenerator>,
}

impl ClipRegionStore {
    /// Creates a store around an id generator.
    #[must_use]
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            regions: SlotMap::with_key(),
            ids,
        }
    }

    /// Creates a region named `"{prefix}-{id}"` with an empty outline.
    pub fn create(&mut self, prefix: &str) -> ClipRegionId {
        let name = format!("{prefix}-{}", self.ids.next_id());
        self.regions.insert(ClipRegion {
            name,
            outline: Polygon::new(),
        })
    }

    /// Replaces a region's outline. Unknown ids are ignored.
    pub fn set_outline(&mut self, id: ClipRegionId, outline: Polygon) {
        if let Some(region) = self.regions.get_mut(id) {
            region.outline = outline;
        }
    }

    /// Looks up a region.
    #[must_use]
    pub fn get(&self, id: ClipRegionId) -> Option<&ClipRegion> {
        self.regions.get(id)
    }

    /// Removes a region, freeing its slot.
    pub fn remove(&mut self, id: ClipRegionId) -> Option<ClipRegion> {
        self.regions.remove(id)
    }
}

impl Default for ClipRegionStore {
    fn default() -> Self {
        Self::new(Box::new(SequentialIds::default()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_never_repeat() {
        let mut ids = SequentialIds::default();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }

    #[test]
    fn region_names_are_unique_even_after_removal() {
        let mut store = ClipRegionStore::default();
        let a = store.create("peel-clip");
        let a_name = store.get(a).unwrap().name().to_owned();
        store.remove(a);
        let b = store.create("peel-clip");
        assert_ne!(a_name, store.get(b).unwrap().name());
    }

    #[test]
    fn outlines_are_replaceable() {
        let mut store = ClipRegionStore::default();
        let id = store.create("peel-clip");
        let mut poly = Polygon::new();
        poly.add_point(crate::math::Point2::new(1.0, 2.0));
        store.set_outline(id, poly);
        assert_eq!(store.get(id).unwrap().outline().points().len(), 1);
    }
}
