//! Node and edge records stored by [`Graph`](super::Graph).

use serde::{Deserialize, Serialize};

/// Canvas position. Opaque to the algorithms; carried for the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(flatten)]
    pub position: Point,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Traversable from `from` to `to` only.
    #[default]
    Forward,
    /// Traversable both ways.
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
    #[serde(default)]
    pub direction: Direction,
}

impl Edge {
    /// The endpoint reached when leaving `node` along this edge, if the direction allows it.
    pub fn traverse_from(&self, node: usize) -> Option<usize> {
        match self.direction {
            Direction::Forward => (node == self.from).then_some(self.to),
            Direction::Both if node == self.from => Some(self.to),
            Direction::Both if node == self.to => Some(self.from),
            Direction::Both => None,
        }
    }
}

/// One traversable edge out of a node, as yielded by
/// [`Graph::outgoing`](super::Graph::outgoing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub edge: usize,
    pub to: usize,
    pub weight: f64,
}
