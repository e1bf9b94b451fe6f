#![forbid(unsafe_code)]

//! Headless core of a shortest-path teaching tool.
//!
//! A UI draws a weighted graph (or types a distance matrix) through a [`Session`], then runs
//! [`dijkstra`] or [`floyd`] and replays the recorded snapshots step by step. Rendering is left
//! entirely to the caller; everything here returns plain data.

pub use pathlab_graph as graph;

pub mod dijkstra;
pub mod error;
pub mod floyd;
pub mod options;
pub mod path;
mod session;

pub use dijkstra::{DijkstraRun, IterationRow, IterationSummary, Snapshot};
pub use error::{Error, Result};
pub use floyd::{FloydIteration, FloydRun, Route};
pub use options::SessionOptions;
pub use path::{PathOutcome, SuccessorTable, reconstruct, reconstruct_indices};
pub use pathlab_graph::{Direction, Distance, DistanceMatrix, Graph, Point};
pub use session::{Highlight, Session};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
