use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::fenwick::Fenwick;
use crate::types::{Item, ItemSource};

#[cfg(feature = "std")]
pub(crate) type KeySizeMap<K> = HashMap<K, f64>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySizeMap<K> = BTreeMap<K, f64>;

/// Bound on item keys: hashable identity under `std`, ordered identity
/// under `no_std`.
#[cfg(feature = "std")]
pub trait WindowKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> WindowKey for K {}

#[cfg(not(feature = "std"))]
pub trait WindowKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> WindowKey for K {}

/// Measurement deltas below this are treated as jitter and ignored.
///
/// Half a physical pixel at 1x DPI; anything smaller cannot render
/// differently, and fonts/images settling often re-report sizes that differ
/// only in the noise digits.
pub const SIZE_EPSILON: f64 = 0.5;

#[derive(Clone, Debug)]
enum Layout {
    /// All items share one height; offsets are pure arithmetic.
    Fixed { item_size: f64 },
    /// Per-index heights with a prefix tree over them.
    ///
    /// `base` is the pre-measurement height of each index (size hint or
    /// estimate), kept so a layout rebuild can start over from it.
    Dynamic {
        heights: Vec<f64>,
        base: Vec<f64>,
        measured: Vec<bool>,
        sums: Fenwick,
    },
}

/// Per-index height and cumulative-offset store.
///
/// Offsets are prefix sums of heights: `offset(0) = 0`,
/// `offset(i) = offset(i-1) + height(i-1)`. Measured heights are cached by
/// item key, not index, so they follow items across reordering.
///
/// Reads clamp out-of-range indices to the nearest valid one and writes
/// no-op on them: measurement callbacks routinely outlive the items they
/// were registered for, and that must not be an error.
#[derive(Clone, Debug)]
pub struct ItemMetadataStore<K = crate::types::ItemKey> {
    keys: Vec<K>,
    estimated_item_size: f64,
    layout: Layout,
    key_sizes: KeySizeMap<K>,
}

impl<K: WindowKey> ItemMetadataStore<K> {
    /// Creates an empty fixed-height store where every item is `item_size`
    /// tall.
    pub fn fixed(item_size: f64) -> Self {
        let item_size = sanitize_size(item_size);
        Self {
            keys: Vec::new(),
            estimated_item_size: item_size,
            layout: Layout::Fixed { item_size },
            key_sizes: KeySizeMap::new(),
        }
    }

    /// Creates an empty dynamic-height store where unmeasured items are
    /// assumed `estimated_item_size` tall.
    pub fn dynamic(estimated_item_size: f64) -> Self {
        Self {
            keys: Vec::new(),
            estimated_item_size: sanitize_size(estimated_item_size),
            layout: Layout::Dynamic {
                heights: Vec::new(),
                base: Vec::new(),
                measured: Vec::new(),
                sums: Fenwick::default(),
            },
            key_sizes: KeySizeMap::new(),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.layout, Layout::Dynamic { .. })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// (Re)builds the store from a fresh item list.
    ///
    /// Heights resolve per item as: cached measurement for the key, else the
    /// item's size hint, else the estimated default. Measurements survive
    /// arbitrary reorders and partial replacement of the list.
    pub fn initialize(&mut self, items: impl IntoIterator<Item = ItemSource<K>>) {
        self.keys.clear();
        let estimate = self.estimated_item_size;

        match &mut self.layout {
            Layout::Fixed { .. } => {
                for item in items {
                    self.keys.push(item.key);
                }
            }
            Layout::Dynamic {
                heights,
                base,
                measured,
                sums,
            } => {
                heights.clear();
                base.clear();
                measured.clear();
                for item in items {
                    let hint = item
                        .size_hint
                        .filter(|h| h.is_finite() && *h >= 0.0)
                        .unwrap_or(estimate);
                    if let Some(&size) = self.key_sizes.get(&item.key) {
                        heights.push(size);
                        measured.push(true);
                    } else {
                        heights.push(hint);
                        measured.push(false);
                    }
                    base.push(hint);
                    self.keys.push(item.key);
                }
                *sums = Fenwick::from_heights(heights);
            }
        }
        lwdebug!(
            count = self.keys.len(),
            cached = self.key_sizes.len(),
            "metadata store initialized"
        );
    }

    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Linear scan; meant for occasional host queries (anchoring), not the
    /// per-frame path.
    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Last known height of the item at `index`, clamped to the nearest
    /// valid index. An empty store reports the estimated default.
    pub fn height(&self, index: usize) -> f64 {
        match &self.layout {
            Layout::Fixed { item_size } => *item_size,
            Layout::Dynamic { heights, .. } => {
                if heights.is_empty() {
                    self.estimated_item_size
                } else {
                    heights[index.min(heights.len() - 1)]
                }
            }
        }
    }

    /// Cumulative height of all items before `index`, clamped to the
    /// nearest valid index. An empty store reports 0.
    pub fn offset(&self, index: usize) -> f64 {
        let count = self.len();
        if count == 0 {
            return 0.0;
        }
        let index = index.min(count - 1);
        match &self.layout {
            Layout::Fixed { item_size } => index as f64 * item_size,
            Layout::Dynamic { sums, .. } => sums.prefix_sum(index),
        }
    }

    pub fn total_size(&self) -> f64 {
        match &self.layout {
            Layout::Fixed { item_size } => self.len() as f64 * item_size,
            Layout::Dynamic { sums, .. } => sums.total(),
        }
    }

    /// Greatest index whose offset is <= `target`; the item whose box
    /// contains `target`. O(1) in fixed mode, O(log N) in dynamic mode.
    ///
    /// Non-finite or negative targets map to 0; an empty store returns 0.
    pub fn find_index_at_offset(&self, target: f64) -> usize {
        let count = self.len();
        if count == 0 {
            return 0;
        }
        let target = if target.is_finite() { target.max(0.0) } else { 0.0 };
        match &self.layout {
            Layout::Fixed { item_size } => {
                if *item_size <= 0.0 {
                    0
                } else {
                    ((target / item_size) as usize).min(count - 1)
                }
            }
            Layout::Dynamic { sums, .. } => sums.index_of_prefix(target).min(count - 1),
        }
    }

    /// Records a measured height for `index`.
    ///
    /// Returns `true` when downstream offsets actually moved. No-ops (and
    /// returns `false`) for out-of-range indices, non-finite or negative
    /// sizes, fixed-mode stores, and deltas within [`SIZE_EPSILON`].
    pub fn update_height(&mut self, index: usize, new_height: f64) -> bool {
        if !new_height.is_finite() || new_height < 0.0 {
            return false;
        }
        let Layout::Dynamic {
            heights,
            measured,
            sums,
            ..
        } = &mut self.layout
        else {
            return false;
        };
        if index >= heights.len() {
            return false;
        }

        let current = heights[index];
        let delta = new_height - current;
        let key = self.keys[index].clone();
        if abs(delta) < SIZE_EPSILON {
            // Jitter: keep the settled height, but remember the item has a
            // real measurement behind it.
            measured[index] = true;
            self.key_sizes.insert(key, current);
            return false;
        }

        heights[index] = new_height;
        measured[index] = true;
        self.key_sizes.insert(key, new_height);
        sums.add(index, delta);
        lwtrace!(index, new_height, "height updated");
        true
    }

    pub fn is_measured(&self, index: usize) -> bool {
        match &self.layout {
            Layout::Fixed { .. } => false,
            Layout::Dynamic { measured, .. } => measured.get(index).copied().unwrap_or(false),
        }
    }

    /// Drops every cached measurement and rebuilds heights from hints and
    /// estimates.
    pub fn reset_measurements(&mut self) {
        self.key_sizes.clear();
        self.rebuild();
    }

    /// Recomputes all heights and offsets from the measurement cache and
    /// per-index base heights. Idempotent when nothing mutated in between.
    pub fn rebuild(&mut self) {
        let Layout::Dynamic {
            heights,
            base,
            measured,
            sums,
        } = &mut self.layout
        else {
            return;
        };
        for (i, key) in self.keys.iter().enumerate() {
            if let Some(&size) = self.key_sizes.get(key) {
                heights[i] = size;
                measured[i] = true;
            } else {
                heights[i] = base[i];
                measured[i] = false;
            }
        }
        *sums = Fenwick::from_heights(heights);
        lwdebug!(count = heights.len(), "metadata store rebuilt");
    }

    /// Materializes the item at `index` (key, offset, height), or `None`
    /// when out of range.
    pub fn item(&self, index: usize) -> Option<Item<K>> {
        if index >= self.len() {
            return None;
        }
        Some(Item {
            key: self.keys[index].clone(),
            index,
            offset: self.offset(index),
            height: self.height(index),
        })
    }
}

fn sanitize_size(x: f64) -> f64 {
    if x.is_finite() { x.max(0.0) } else { 0.0 }
}

fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}
