#[cfg(feature = "std")]
pub trait HostKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> HostKey for T {}

#[cfg(not(feature = "std"))]
pub trait HostKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> HostKey for T {}
