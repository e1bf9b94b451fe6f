//! The graph store: nodes, weighted edges and their undo/redo history.
//!
//! Nodes and edges are append-only and addressed by position. The only way to remove anything
//! is [`Graph::undo`], which pops the most recent creation, so an edge is always undone before
//! the nodes it references.

mod entries;
mod history;
mod options;

pub use entries::{Direction, Edge, Node, Point, Step};
pub use history::{Action, History};
pub use options::{GraphOptions, NodeNaming};

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    options: GraphOptions,

    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,

    edges: Vec<Edge>,

    history: History,
}

impl Graph {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Adds an automatically named node and returns its index.
    pub fn add_node(&mut self, position: Point) -> usize {
        let name = self.next_auto_name();
        let node = Node { name, position };
        self.history.record(Action::Node(node.clone()));
        self.push_node(node)
    }

    /// Adds a node with a caller-chosen name. Names are trimmed and must be unique.
    pub fn add_named_node(&mut self, name: impl AsRef<str>, position: Point) -> Result<usize> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        if self.node_index.contains_key(name) {
            tracing::warn!(name, "rejected node with duplicate name");
            return Err(Error::DuplicateNode {
                name: name.to_string(),
            });
        }
        let node = Node {
            name: name.to_string(),
            position,
        };
        self.history.record(Action::Node(node.clone()));
        Ok(self.push_node(node))
    }

    /// Adds an edge between two existing nodes and returns its index.
    ///
    /// Fails without mutating anything when an endpoint does not exist or `weight` is negative
    /// or not finite.
    pub fn add_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: f64,
        direction: Direction,
    ) -> Result<usize> {
        self.check_index(from)?;
        self.check_index(to)?;
        let weight = validate_weight(weight)?;
        let edge = Edge {
            from,
            to,
            weight,
            direction,
        };
        self.history.record(Action::Edge(edge.clone()));
        self.edges.push(edge);
        Ok(self.edges.len() - 1)
    }

    /// Like [`Graph::add_edge`], with the weight given as raw user text.
    pub fn add_edge_str(
        &mut self,
        from: usize,
        to: usize,
        weight: &str,
        direction: Direction,
    ) -> Result<usize> {
        let weight = parse_weight(weight)?;
        self.add_edge(from, to, weight, direction)
    }

    /// Reverts the most recent creation. Returns `None` (and does nothing) when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> Option<Action> {
        let action = self.history.undo()?;
        match &action {
            Action::Node(_) => self.pop_node(),
            Action::Edge(_) => {
                self.edges.pop();
            }
        }
        Some(action)
    }

    /// Re-applies the most recently undone creation. Returns `None` (and does nothing) when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Option<Action> {
        let action = self.history.redo()?;
        match &action {
            Action::Node(node) => {
                self.push_node(node.clone());
            }
            Action::Edge(edge) => self.edges.push(edge.clone()),
        }
        Some(action)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Forgets all recorded actions, keeping the current nodes and edges.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.node_index.get(name).copied()
    }

    pub fn node_names(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.name.clone()).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                index,
                len: self.nodes.len(),
            })
        }
    }

    /// Edges that can be traversed out of `node`, in insertion order.
    pub fn outgoing(&self, node: usize) -> impl Iterator<Item = Step> + '_ {
        self.edges.iter().enumerate().filter_map(move |(ix, e)| {
            e.traverse_from(node).map(|to| Step {
                edge: ix,
                to,
                weight: e.weight,
            })
        })
    }

    fn next_auto_name(&self) -> String {
        let mut candidate = self.nodes.len();
        loop {
            let name = self.options.node_naming.name_for(candidate);
            if !self.node_index.contains_key(&name) {
                return name;
            }
            candidate += 1;
        }
    }

    fn push_node(&mut self, node: Node) -> usize {
        let ix = self.nodes.len();
        self.node_index.insert(node.name.clone(), ix);
        self.nodes.push(node);
        ix
    }

    fn pop_node(&mut self) {
        if let Some(node) = self.nodes.pop() {
            self.node_index.remove(&node.name);
        }
    }
}

/// Checks that `weight` is usable as an edge weight.
pub fn validate_weight(weight: f64) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(Error::InvalidWeight {
            value: weight.to_string(),
        })
    }
}

/// Parses user-entered weight text (surrounding whitespace allowed).
pub fn parse_weight(raw: &str) -> Result<f64> {
    let invalid = || Error::InvalidWeight {
        value: raw.to_string(),
    };
    let weight = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    validate_weight(weight).map_err(|_| invalid())
}
