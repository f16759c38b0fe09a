//! Host-side plumbing for the `scrollport` engine.
//!
//! The `scrollport` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the pieces a real host needs on top of it:
//!
//! - [`HostSurface`]: the trait a scroll container implements
//! - [`ChildPool`]: a key-aware placeholder recycler with a bounded free list
//! - [`Coordinator`]: a coalescing event → layout-pass state machine
//! - Scroll anchoring helpers (prepend without visual jumps)
//!
//! This crate is intentionally framework-agnostic: no DOM, terminal or GUI
//! bindings, just the update loop those bindings all share.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod coordinator;
mod key;
mod pool;
mod surface;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use coordinator::{Coordinator, Phase};
pub use key::HostKey;
pub use pool::{ChildPool, Reconciliation};
pub use surface::{HostSurface, PlaceholderId};
