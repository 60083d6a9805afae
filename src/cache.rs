//! A small direct-mapped memo of sampled values keyed by coordinates.

use bevy_math::DVec4;

/// One slot of a [`NoiseCache`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CacheEntry {
    /// The coordinates the result was sampled at. Unused axes are 0.
    pub coords: DVec4,
    /// The sampled value.
    pub result: f64,
    /// False until the slot is first written, and again after [`NoiseCache::clear`].
    pub valid: bool,
}

/// A fixed capacity, direct-mapped cache of sampled values.
///
/// Each coordinate picks one slot; a newer store overwrites whatever was there.
/// A lookup can only hit if every stored coordinate is within [`NoiseCache::TOLERANCE`] of the requested one,
/// so a slot collision can cause a miss but never a wrong result.
/// Being within tolerance is not enough on its own: slots come from coordinates truncated to thousandths,
/// so two nearby points on either side of a thousandth land in different slots.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseCache {
    entries: Box<[CacheEntry]>,
    hits: u64,
    misses: u64,
}

impl Default for NoiseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseCache {
    /// The number of slots.
    pub const CAPACITY: usize = 1024;
    /// How far apart two coordinates can be and still count as the same key.
    pub const TOLERANCE: f64 = 1e-9;

    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: vec![CacheEntry::default(); Self::CAPACITY].into_boxed_slice(),
            hits: 0,
            misses: 0,
        }
    }

    /// The slot `coords` maps to: each axis truncated to thousandths, xored together.
    pub fn slot(coords: DVec4) -> usize {
        let mixed = coords
            .to_array()
            .into_iter()
            .fold(0i32, |mixed, axis| mixed ^ (axis * 1000.0) as i32);
        (mixed % Self::CAPACITY as i32).unsigned_abs() as usize
    }

    /// Looks up the value stored for `coords`, counting a hit or a miss.
    pub fn lookup(&mut self, coords: DVec4) -> Option<f64> {
        let entry = &self.entries[Self::slot(coords)];
        let matches =
            entry.valid && (entry.coords - coords).abs().max_element() < Self::TOLERANCE;
        if matches {
            self.hits += 1;
            Some(entry.result)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Stores `result` for `coords`, replacing whatever shared its slot.
    pub fn store(&mut self, coords: DVec4, result: f64) {
        self.entries[Self::slot(coords)] = CacheEntry {
            coords,
            result,
            valid: true,
        };
    }

    /// Invalidates every slot and zeroes the counters.
    pub fn clear(&mut self) {
        self.entries.fill(CacheEntry::default());
        self.reset_counters();
    }

    /// Zeroes the hit and miss counters without touching stored values.
    pub fn reset_counters(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// The number of lookups that found a value.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// The number of lookups that found nothing.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// The number of slots currently holding a value.
    pub fn occupied(&self) -> usize {
        self.entries.iter().filter(|entry| entry.valid).count()
    }
}
