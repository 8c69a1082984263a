use alloc::vec::Vec;

/// Default key type for lists identified by integer ids.
pub type ItemKey = u64;

/// Alignment for programmatic scroll-to-index requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// The pair of values a window computation reads: the latest raw scroll
/// position and the container's size in the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_position: f64,
    pub container_size: f64,
}

/// A contiguous index range of items that must be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Source description of one item fed into the engine: a stable identity
/// plus an optional size hint used before the item is measured.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSource<K = ItemKey> {
    pub key: K,
    pub size_hint: Option<f64>,
}

impl<K> ItemSource<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            size_hint: None,
        }
    }

    pub fn with_size_hint(key: K, size_hint: f64) -> Self {
        Self {
            key,
            size_hint: Some(size_hint),
        }
    }
}

/// One renderable item with its absolute offset in the scroll axis.
///
/// `offset` is the cumulative height of all items before it; hosts position
/// rendered items absolutely so off-window items occupy no layout space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K = ItemKey> {
    pub key: K,
    pub index: usize,
    pub offset: f64,
    pub height: f64,
}

impl<K> Item<K> {
    pub fn end(&self) -> f64 {
        self.offset + self.height
    }
}

/// Offset + height of a single index, for host-side positioning queries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPosition {
    pub offset: f64,
    pub height: f64,
}

/// The renderable output of one window recompute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderWindow<K = ItemKey> {
    pub range: WindowRange,
    pub total_size: f64,
    pub items: Vec<Item<K>>,
}

impl<K> RenderWindow<K> {
    pub fn empty() -> Self {
        Self {
            range: WindowRange::EMPTY,
            total_size: 0.0,
            items: Vec::new(),
        }
    }

    pub fn start_index(&self) -> usize {
        self.range.start_index
    }

    /// Exclusive end of the rendered range.
    pub fn end_index(&self) -> usize {
        self.range.end_index
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
