/// Default number of nodes a single search may allocate.
pub const DEFAULT_NODE_CAPACITY: usize = 300;

/// Default path length limit. Paths must be strictly shorter, so the longest
/// path returned is one step less.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 25;

/// Limits applied to every [`PathSearch`](crate::PathSearch) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Nodes available to one search before it gives up.
    pub node_capacity: usize,
    /// A path of this many steps or more is rejected.
    pub max_path_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_capacity: DEFAULT_NODE_CAPACITY,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
        }
    }
}

impl SearchConfig {
    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn with_max_path_length(mut self, max_path_length: usize) -> Self {
        self.max_path_length = max_path_length;
        self
    }
}
