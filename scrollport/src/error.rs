use thiserror::Error;

/// Configuration problems, reported synchronously before any layout runs.
///
/// The engine never renders with a malformed configuration: constructors and
/// `set_options` validate first and return one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configured fixed item size has a zero component.
    #[error("configured item size must be non-zero on both axes")]
    ItemSizeZero,
    /// An explicit column count of zero.
    #[error("column count must be at least 1")]
    ColumnsZero,
}
