//! Plain-data documents for importing and exporting graphs and matrices.
//!
//! Documents are replayed through the normal editing API, so every validation rule of
//! [`Graph`] applies to them as well.

use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::graph::{Direction, Graph, GraphOptions, Point, validate_weight};
use crate::matrix::{DistanceMatrix, parse_cell, resolve_names};
use serde::{Deserialize, Serialize};

/// A node reference: position in the node list, or node name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Index(usize),
    Name(String),
}

/// A user-entered value: a JSON number, text, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Null,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeRef,
    pub to: NodeRef,
    pub weight: Cell,
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Naming scheme for nodes added after import. `None` leaves the choice to the importer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GraphOptions>,
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            options: Some(graph.options()),
            nodes: graph
                .nodes()
                .iter()
                .map(|n| NodeRecord {
                    name: Some(n.name.clone()),
                    x: n.position.x,
                    y: n.position.y,
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeRecord {
                    from: NodeRef::Index(e.from),
                    to: NodeRef::Index(e.to),
                    weight: Cell::Number(e.weight),
                    direction: e.direction,
                })
                .collect(),
        }
    }

    /// Replays the document into a fresh graph. Each node and edge becomes an undoable action.
    pub fn into_graph(&self) -> Result<Graph> {
        self.into_graph_with(GraphOptions::default())
    }

    /// Like [`GraphDocument::into_graph`], using `fallback` when the document carries no options.
    pub fn into_graph_with(&self, fallback: GraphOptions) -> Result<Graph> {
        let mut graph = Graph::new(self.options.unwrap_or(fallback));
        for n in &self.nodes {
            let position = Point::new(n.x, n.y);
            match &n.name {
                Some(name) => {
                    graph.add_named_node(name, position)?;
                }
                None => {
                    graph.add_node(position);
                }
            }
        }
        for e in &self.edges {
            let from = resolve_ref(&graph, &e.from)?;
            let to = resolve_ref(&graph, &e.to)?;
            match &e.weight {
                Cell::Number(w) => graph.add_edge(from, to, *w, e.direction)?,
                Cell::Text(raw) => graph.add_edge_str(from, to, raw, e.direction)?,
                Cell::Null => {
                    return Err(Error::InvalidWeight {
                        value: "null".to_string(),
                    });
                }
            };
        }
        Ok(graph)
    }
}

fn resolve_ref(graph: &Graph, node: &NodeRef) -> Result<usize> {
    match node {
        NodeRef::Index(ix) => graph.check_index(*ix).map(|()| *ix),
        NodeRef::Name(name) => graph
            .node_index(name.trim())
            .ok_or_else(|| Error::UnknownNode { name: name.clone() }),
    }
}

/// The "edit matrix" input mode: optional names plus square rows of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixDocument {
    #[serde(default)]
    pub names: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl MatrixDocument {
    /// Exports `graph` in editable form (blank text for unreachable cells).
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            names: graph.node_names(),
            rows: graph
                .to_matrix()
                .to_text_rows()
                .into_iter()
                .map(|row| row.into_iter().map(Cell::Text).collect())
                .collect(),
        }
    }

    /// Parses the rows and resolves the names.
    pub fn to_matrix(&self) -> Result<(DistanceMatrix, Vec<String>)> {
        let n = self.rows.len();
        let mut m = DistanceMatrix::new(n);
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, cell) in row.iter().enumerate() {
                if i == j {
                    continue;
                }
                let d = match cell {
                    Cell::Null => Distance::Unreachable,
                    Cell::Text(raw) => parse_cell(raw, i, j)?,
                    Cell::Number(v) => validate_weight(*v).map(Distance::Finite).map_err(|_| {
                        Error::InvalidMatrixCell {
                            row: i,
                            col: j,
                            value: v.to_string(),
                        }
                    })?,
                };
                m.set(i, j, d);
            }
        }
        let names = resolve_names(&self.names, n)?;
        Ok((m, names))
    }
}
