/// Scroll axis of the virtualized container.
///
/// All layout math runs in axis space (`main` along the scroll axis, `cross`
/// across it); the direction only controls how axis-space values map back to
/// physical x/y coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

/// An axis-relative size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent2 {
    /// Size along the scroll axis.
    pub main: u32,
    /// Size across the scroll axis.
    pub cross: u32,
}

impl Extent2 {
    pub const fn new(main: u32, cross: u32) -> Self {
        Self { main, cross }
    }

    /// Converts a physical `(width, height)` pair into axis space.
    pub fn from_physical(direction: Direction, width: u32, height: u32) -> Self {
        match direction {
            Direction::Vertical => Self {
                main: height,
                cross: width,
            },
            Direction::Horizontal => Self {
                main: width,
                cross: height,
            },
        }
    }

    /// Converts back to a physical `(width, height)` pair.
    pub fn to_physical(self, direction: Direction) -> (u32, u32) {
        match direction {
            Direction::Vertical => (self.cross, self.main),
            Direction::Horizontal => (self.main, self.cross),
        }
    }
}

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

/// A half-open index interval `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start: usize,
    /// Exclusive.
    pub end: usize,
}

impl IndexRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// The placement of one materialized item, in axis space relative to the
/// content origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRect {
    pub index: usize,
    /// Offset of the leading edge along the scroll axis.
    pub main_start: u64,
    /// Offset of the leading edge across the scroll axis.
    pub cross_start: u64,
    /// Size along the scroll axis (excludes `gap`).
    pub main: u32,
    /// Size across the scroll axis.
    pub cross: u32,
}

impl ItemRect {
    pub fn main_end(&self) -> u64 {
        self.main_start.saturating_add(self.main as u64)
    }

    /// Physical `(x, y)` of the item's origin for the given direction.
    pub fn position(&self, direction: Direction) -> (u64, u64) {
        match direction {
            Direction::Vertical => (self.cross_start, self.main_start),
            Direction::Horizontal => (self.main_start, self.cross_start),
        }
    }

    /// Physical `(width, height)` for the given direction.
    pub fn size(&self, direction: Direction) -> (u32, u32) {
        Extent2::new(self.main, self.cross).to_physical(direction)
    }
}

/// An [`ItemRect`] paired with the item's stable key.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRectKeyed<K> {
    pub key: K,
    pub rect: ItemRect,
}

pub type ItemKey = u64;

/// A lightweight, serializable snapshot of the current viewport geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub rect: Extent2,
}

/// A lightweight, serializable snapshot of the current scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub is_scrolling: bool,
}

/// A combined snapshot of viewport + scroll state.
///
/// Useful for restoring UI state across frames or sessions without coupling
/// the engine to any specific host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportState,
    pub scroll: ScrollState,
}
