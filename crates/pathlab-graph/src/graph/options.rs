//! Graph configuration options.

use serde::{Deserialize, Serialize};

/// How [`Graph::add_node`](super::Graph::add_node) names new nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeNaming {
    /// `A`, `B`, ..., `Z`, `AA`, `AB`, ... (the canvas editor's scheme).
    #[default]
    Letters,
    /// `N1`, `N2`, ... (the matrix editor's scheme).
    Numbered,
}

impl NodeNaming {
    /// Name for the node at position `index`.
    pub fn name_for(self, index: usize) -> String {
        match self {
            NodeNaming::Letters => letters(index),
            NodeNaming::Numbered => format!("N{}", index + 1),
        }
    }
}

fn letters(mut index: usize) -> String {
    let mut rev: Vec<char> = Vec::new();
    loop {
        rev.push(char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    rev.iter().rev().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    #[serde(default)]
    pub node_naming: NodeNaming,
}
