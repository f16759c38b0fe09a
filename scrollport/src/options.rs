use alloc::sync::Arc;

use crate::scroller::Scroller;
use crate::{ConfigError, Direction, Extent2, ItemKey, ItemRect};

/// A callback fired when the engine's state changes.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Scroller<K>, bool) + Send + Sync>;

/// A hook that decides whether to adjust the scroll offset when an item's
/// measured size changes.
///
/// Receives the item's rect (under the old sizes) and the size delta. The
/// default policy keeps the anchor item visually fixed: items whose leading
/// edge lies before the current scroll offset shift the offset by the delta.
pub type AdjustOnResizeCallback<K> = Arc<dyn Fn(&Scroller<K>, ItemRect, i64) -> bool + Send + Sync>;

/// Fixed-size or measured one-dimensional list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    /// Fixed main-axis item size; `None` means items are measured (estimates
    /// apply until a measurement arrives).
    pub item_size: Option<u32>,
}

/// Uniform-cell grid that wraps on the cross axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub item_size: Extent2,
    /// Stretch cell cross size so each row exactly fills the usable cross
    /// extent.
    pub flex: bool,
    /// Pins the column count instead of deriving it from the cross extent.
    pub columns: Option<usize>,
    /// Cross-axis inset before the first column (e.g. host padding).
    pub cross_padding_start: u32,
    /// Cross-axis inset after the last column.
    pub cross_padding_end: u32,
}

impl GridConfig {
    pub fn new(item_size: Extent2) -> Self {
        Self {
            item_size,
            flex: false,
            columns: None,
            cross_padding_start: 0,
            cross_padding_end: 0,
        }
    }
}

/// Variable main-size columns; each item lands in the currently shortest lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasonryConfig {
    /// Cross-axis size of every lane.
    pub item_cross: u32,
    /// Pins the lane count instead of deriving it from the cross extent.
    pub columns: Option<usize>,
}

impl MasonryConfig {
    pub fn new(item_cross: u32) -> Self {
        Self {
            item_cross,
            columns: None,
        }
    }
}

/// The closed set of layout strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutSpec {
    List(ListConfig),
    Grid(GridConfig),
    Masonry(MasonryConfig),
}

impl LayoutSpec {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::List(cfg) => {
                if cfg.item_size == Some(0) {
                    return Err(ConfigError::ItemSizeZero);
                }
            }
            Self::Grid(cfg) => {
                if cfg.item_size.main == 0 || cfg.item_size.cross == 0 {
                    return Err(ConfigError::ItemSizeZero);
                }
                if cfg.columns == Some(0) {
                    return Err(ConfigError::ColumnsZero);
                }
            }
            Self::Masonry(cfg) => {
                if cfg.item_cross == 0 {
                    return Err(ConfigError::ItemSizeZero);
                }
                if cfg.columns == Some(0) {
                    return Err(ConfigError::ColumnsZero);
                }
            }
        }
        Ok(())
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::List(ListConfig::default())
    }
}

/// Configuration for [`crate::Scroller`].
///
/// Cheap to clone: closures live behind `Arc`s so adapters can tweak a few
/// fields and call `Scroller::set_options` without reallocating.
pub struct ScrollerOptions<K = ItemKey> {
    pub count: usize,
    pub layout: LayoutSpec,
    pub direction: Direction,
    /// Space between items along the scroll axis (and between grid columns).
    pub gap: u32,
    /// Extra whole items rendered beyond the strictly visible interval.
    pub overscan: usize,

    /// Main-axis padding before the first item.
    pub padding_start: u32,
    /// Main-axis padding after the last item.
    pub padding_end: u32,

    /// Additional padding applied when computing scroll-to offsets.
    pub scroll_padding_start: u32,
    /// Additional padding applied when computing scroll-to offsets.
    pub scroll_padding_end: u32,

    /// Where the content starts inside the scroll container (window-scrolling
    /// setups where the list begins after some header).
    pub scroll_margin: u32,

    /// The initial viewport rect, if known before the first resize event.
    pub initial_rect: Option<Extent2>,
    /// The initial scroll offset.
    pub initial_offset: u64,

    /// Main-axis size estimate for unmeasured items. A zero estimate is
    /// clamped to 1 at use sites so offset→index lookups stay unambiguous.
    pub estimate_size: Arc<dyn Fn(usize) -> u32 + Send + Sync>,
    /// Stable identity for the item at an index; measured sizes and pool
    /// placeholders follow this key across reorders and insertions.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Optional callback fired when the engine's internal state changes.
    pub on_change: Option<OnChangeCallback<K>>,
    /// Overrides the anchor-based reflow policy for measured size changes.
    pub adjust_on_resize: Option<AdjustOnResizeCallback<K>>,

    /// Debounce window for resetting `is_scrolling` after the last scroll
    /// event.
    pub is_scrolling_reset_delay_ms: u64,
}

impl ScrollerOptions<ItemKey> {
    /// Creates options for a measured list keyed by index.
    pub fn new(count: usize, estimate_size: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::with_layout(count, LayoutSpec::default(), estimate_size)
    }

    /// Creates options for a specific layout, keyed by index.
    pub fn with_layout(
        count: usize,
        layout: LayoutSpec,
        estimate_size: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            layout,
            direction: Direction::Vertical,
            gap: 0,
            overscan: 1,
            padding_start: 0,
            padding_end: 0,
            scroll_padding_start: 0,
            scroll_padding_end: 0,
            scroll_margin: 0,
            initial_rect: None,
            initial_offset: 0,
            estimate_size: Arc::new(estimate_size),
            get_item_key: Arc::new(|i| i as u64),
            on_change: None,
            adjust_on_resize: None,
            is_scrolling_reset_delay_ms: 150,
        }
    }
}

impl<K> ScrollerOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// Use this when measurements and placeholders should follow items across
    /// reordering or insertion: `get_item_key(i)` must return a stable
    /// identity for the item at index `i`.
    pub fn new_with_key(
        count: usize,
        layout: LayoutSpec,
        estimate_size: impl Fn(usize) -> u32 + Send + Sync + 'static,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            layout,
            direction: Direction::Vertical,
            gap: 0,
            overscan: 1,
            padding_start: 0,
            padding_end: 0,
            scroll_padding_start: 0,
            scroll_padding_end: 0,
            scroll_margin: 0,
            initial_rect: None,
            initial_offset: 0,
            estimate_size: Arc::new(estimate_size),
            get_item_key: Arc::new(get_item_key),
            on_change: None,
            adjust_on_resize: None,
            is_scrolling_reset_delay_ms: 150,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_padding(mut self, padding_start: u32, padding_end: u32) -> Self {
        self.padding_start = padding_start;
        self.padding_end = padding_end;
        self
    }

    pub fn with_scroll_padding(
        mut self,
        scroll_padding_start: u32,
        scroll_padding_end: u32,
    ) -> Self {
        self.scroll_padding_start = scroll_padding_start;
        self.scroll_padding_end = scroll_padding_end;
        self
    }

    pub fn with_scroll_margin(mut self, scroll_margin: u32) -> Self {
        self.scroll_margin = scroll_margin;
        self
    }

    pub fn with_initial_rect(mut self, initial_rect: Option<Extent2>) -> Self {
        self.initial_rect = initial_rect;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Scroller<K>, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_adjust_on_resize(
        mut self,
        f: Option<impl Fn(&Scroller<K>, ItemRect, i64) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.adjust_on_resize = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

impl<K> Clone for ScrollerOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            layout: self.layout,
            direction: self.direction,
            gap: self.gap,
            overscan: self.overscan,
            padding_start: self.padding_start,
            padding_end: self.padding_end,
            scroll_padding_start: self.scroll_padding_start,
            scroll_padding_end: self.scroll_padding_end,
            scroll_margin: self.scroll_margin,
            initial_rect: self.initial_rect,
            initial_offset: self.initial_offset,
            estimate_size: Arc::clone(&self.estimate_size),
            get_item_key: Arc::clone(&self.get_item_key),
            on_change: self.on_change.clone(),
            adjust_on_resize: self.adjust_on_resize.clone(),
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
        }
    }
}

impl<K> core::fmt::Debug for ScrollerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("count", &self.count)
            .field("layout", &self.layout)
            .field("direction", &self.direction)
            .field("gap", &self.gap)
            .field("overscan", &self.overscan)
            .field("padding_start", &self.padding_start)
            .field("padding_end", &self.padding_end)
            .field("scroll_padding_start", &self.scroll_padding_start)
            .field("scroll_padding_end", &self.scroll_padding_end)
            .field("scroll_margin", &self.scroll_margin)
            .field("initial_rect", &self.initial_rect)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
