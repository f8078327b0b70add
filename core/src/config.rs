//! Checker configuration.
//!
//! Limits and ordering only; the logger is wired separately on the checker.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which map entries are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum MapOrder {
    /// Whatever order the map yields. Unspecified for hash maps.
    #[default]
    Native,
    /// Entries sorted by rendered key, so the reported violation is reproducible.
    Sorted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CheckerConfig {
    /// Deepest node visited before giving up with `DepthExceeded`. The root is at depth 0.
    /// `None` walks as deep as the structure goes.
    pub max_depth: Option<usize>,

    pub map_order: MapOrder,
}

impl CheckerConfig {
    pub fn new() -> Self { Self::default() }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_map_order(mut self, map_order: MapOrder) -> Self {
        self.map_order = map_order;
        self
    }
}
