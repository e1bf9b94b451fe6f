#![forbid(unsafe_code)]

//! Weighted graph store used by `pathlab`.
//!
//! Provides the append-only [`Graph`] with its undo/redo [`History`], the tagged [`Distance`]
//! type, dense [`DistanceMatrix`] values and the adapter between the two representations.

pub mod distance;
pub mod document;
pub mod error;
pub mod graph;
pub mod matrix;

pub use distance::Distance;
pub use document::{Cell, EdgeRecord, GraphDocument, MatrixDocument, NodeRecord, NodeRef};
pub use error::{Error, Result};
pub use graph::{
    Action, Direction, Edge, Graph, GraphOptions, History, Node, NodeNaming, Point, Step,
    parse_weight, validate_weight,
};
pub use matrix::{DistanceMatrix, from_matrix, parse_cell, resolve_names, to_matrix};
