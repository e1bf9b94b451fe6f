use pathlab_graph::{GraphOptions, NodeNaming};
use serde::{Deserialize, Serialize};

/// Session-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    pub node_naming: NodeNaming,
    /// Record per-step snapshots and per-iteration summaries. Final results are the same
    /// either way.
    pub record_steps: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            node_naming: NodeNaming::Letters,
            record_steps: true,
        }
    }
}

impl SessionOptions {
    /// Options for the matrix editor: `N1`, `N2`, ... names.
    pub fn numbered() -> Self {
        Self {
            node_naming: NodeNaming::Numbered,
            ..Self::default()
        }
    }

    pub fn with_node_naming(mut self, node_naming: NodeNaming) -> Self {
        self.node_naming = node_naming;
        self
    }

    pub fn with_record_steps(mut self, record_steps: bool) -> Self {
        self.record_steps = record_steps;
        self
    }

    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            node_naming: self.node_naming,
        }
    }
}
