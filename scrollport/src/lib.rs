//! A headless virtual-scrolling engine.
//!
//! `scrollport` answers three questions for a scrollable collection that is
//! too large to materialize in full:
//!
//! - which items intersect the viewport (plus overscan),
//! - where each of those items goes, and
//! - how long the full content is along the scroll axis.
//!
//! It holds no host objects and performs no rendering. A host adapter feeds
//! it viewport geometry, scroll offsets and asynchronously resolved item
//! measurements, then reads back item rects via the `for_each_virtual_*`
//! iteration APIs. Layout strategies (list, grid, masonry) are selected
//! through [`ScrollerOptions::layout`] and share one query surface.
//!
//! All layout math runs in axis space: `main` along the scroll axis, `cross`
//! across it. [`Direction`] only matters at the host boundary, when axis
//! coordinates are mapped to physical x/y.
//!
//! # Example
//!
//! ```
//! use scrollport::{Extent2, Scroller, ScrollerOptions};
//!
//! let options = ScrollerOptions::new(10_000, |_| 40)
//!     .with_initial_rect(Some(Extent2::new(600, 400)))
//!     .with_overscan(2);
//! let mut scroller = Scroller::new(options)?;
//!
//! scroller.set_scroll_offset(20_000);
//! let range = scroller.virtual_range();
//! scroller.for_each_virtual_rect(|rect| {
//!     // hand rect.main_start / rect.main to the host
//!     let _ = rect;
//! });
//! assert!(!range.is_empty());
//! # Ok::<(), scrollport::ConfigError>(())
//! ```
//!
//! For placeholder pooling and a host-driven update loop, see the
//! `scrollport-host` crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
mod extents;
mod layout;
mod measure;
mod options;
mod range;
mod scroller;
mod types;


pub use error::ConfigError;
pub use measure::{SizeTracker, TrackerKey};
pub use options::{
    AdjustOnResizeCallback, GridConfig, LayoutSpec, ListConfig, MasonryConfig, OnChangeCallback,
    ScrollerOptions,
};
pub use scroller::Scroller;
pub use types::{
    Align, Direction, Extent2, FrameState, IndexRange, ItemKey, ItemRect, ItemRectKeyed,
    ScrollDirection, ScrollState, ViewportState,
};
