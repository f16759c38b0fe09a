use scrollport::Direction;

/// Opaque handle to a host-side placeholder element.
///
/// The host mints ids in [`HostSurface::create_placeholder`]; the pool and
/// coordinator only ever pass them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderId(pub u64);

/// What the coordinator needs from a real scroll container.
///
/// Implementations wrap whatever the host UI actually is (a DOM subtree, a
/// terminal region, a canvas). The coordinator reads geometry through this
/// trait at the start of a pass and writes placements back at the end, so a
/// surface sees at most one batch of writes per pass.
pub trait HostSurface {
    /// Creates a fresh placeholder bound to `index`. Called only when the
    /// pool has nothing to recycle.
    fn create_placeholder(&mut self, index: usize) -> PlaceholderId;

    /// Destroys a placeholder the pool chose not to retain.
    fn remove_placeholder(&mut self, id: PlaceholderId);

    /// Rebinds an existing placeholder to a different item index.
    fn assign_placeholder(&mut self, id: PlaceholderId, index: usize);

    /// Positions and sizes a placeholder, in physical coordinates.
    fn place(&mut self, id: PlaceholderId, x: u64, y: u64, width: u32, height: u32);

    /// Stretches the scrollable area along the scroll axis.
    fn set_total_extent(&mut self, direction: Direction, extent: u64);

    /// Physical `(width, height)` of the viewport.
    fn viewport(&self) -> (u32, u32);

    fn scroll_offset(&self) -> u64;

    /// Writes a corrected scroll offset back (anchor adjustments,
    /// programmatic scrolls).
    fn set_scroll_offset(&mut self, offset: u64);

    /// `false` once the surface has been torn down; the coordinator aborts
    /// the pass without writing.
    fn is_attached(&self) -> bool;
}
