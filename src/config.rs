//! Construction settings of a queue.

use crate::error::{HeapError, Result};

/// Number of slots allocated by [`PriorityDeque::new`](crate::PriorityDeque::new).
pub const DEFAULT_CAPACITY: usize = 10;
/// Growth multiplier used unless configured otherwise.
pub const DEFAULT_EXPAND_FACTOR: usize = 2;
/// Smallest accepted growth multiplier.
pub const MIN_EXPAND_FACTOR: usize = 2;

/// Which extreme the array currently keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Min,
    Max,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Min => Orientation::Max,
            Orientation::Max => Orientation::Min,
        }
    }

    pub fn is_min(self) -> bool {
        self == Orientation::Min
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Min
    }
}

/// Settings consumed by [`PriorityDeque::from_config`](crate::PriorityDeque::from_config).
///
/// # Examples
/// ```
/// use depq::{HeapConfig, Orientation};
/// let config = HeapConfig::new()
///     .orientation(Orientation::Max)
///     .initial_capacity(64)
///     .expand_factor(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeapConfig {
    pub orientation: Orientation,
    pub initial_capacity: usize,
    pub expand_factor: usize,
}

impl HeapConfig {
    pub fn new() -> Self {
        HeapConfig {
            orientation: Orientation::Min,
            initial_capacity: DEFAULT_CAPACITY,
            expand_factor: DEFAULT_EXPAND_FACTOR,
        }
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn expand_factor(mut self, factor: usize) -> Self {
        self.expand_factor = factor;
        self
    }

    /// Rejects a zero capacity and any expand factor below [`MIN_EXPAND_FACTOR`].
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(HeapError::InvalidArgument("initial capacity must be at least 1"));
        }
        if self.expand_factor < MIN_EXPAND_FACTOR {
            return Err(HeapError::InvalidArgument("expand factor must be at least 2"));
        }
        Ok(())
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        HeapConfig::new()
    }
}

#[test]
fn default_config_is_valid() {
    let config = HeapConfig::default();
    assert_eq!(config.orientation, Orientation::Min);
    assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
    assert_eq!(config.expand_factor, DEFAULT_EXPAND_FACTOR);
    assert!(config.validate().is_ok());
}

#[test]
fn reject_bad_config() {
    let zero = HeapConfig::new().initial_capacity(0);
    assert!(matches!(zero.validate(), Err(HeapError::InvalidArgument(_))));
    let one = HeapConfig::new().expand_factor(1);
    assert!(matches!(one.validate(), Err(HeapError::InvalidArgument(_))));
}

#[test]
fn flip_orientation() {
    assert_eq!(Orientation::Min.flipped(), Orientation::Max);
    assert_eq!(Orientation::Max.flipped(), Orientation::Min);
    assert!(Orientation::default().is_min());
}
