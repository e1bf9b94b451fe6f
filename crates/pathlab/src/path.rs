//! Path reconstruction from Dijkstra parent arrays and Floyd-Warshall successor tables.

use crate::error::{Error, Result};
use pathlab_graph::{Distance, DistanceMatrix};
use serde::{Deserialize, Serialize};

/// Result of asking for one shortest path. `NoPath` is a normal answer, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Found { distance: f64, nodes: Vec<usize> },
    NoPath,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }

    pub fn distance(&self) -> Distance {
        match self {
            PathOutcome::Found { distance, .. } => Distance::Finite(*distance),
            PathOutcome::NoPath => Distance::Unreachable,
        }
    }

    /// Node indices along the path; empty for `NoPath`.
    pub fn nodes(&self) -> &[usize] {
        match self {
            PathOutcome::Found { nodes, .. } => nodes,
            PathOutcome::NoPath => &[],
        }
    }

    pub fn names<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        self.nodes()
            .iter()
            .filter_map(|&ix| names.get(ix).map(|s| s.as_ref().to_string()))
            .collect()
    }

    /// Consecutive `(from, to)` pairs for highlighting.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        path_edges(self.nodes())
    }
}

/// Next-hop table: `(i, j)` holds the node after `i` on the shortest `i -> j` path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<Option<usize>>>", into = "Vec<Vec<Option<usize>>>")]
pub struct SuccessorTable {
    size: usize,
    next: Vec<Option<usize>>,
}

impl SuccessorTable {
    /// Direct hops of `matrix`: `j` for every finite off-diagonal `(i, j)`.
    pub fn seed(matrix: &DistanceMatrix) -> Self {
        let size = matrix.size();
        let mut next = vec![None; size * size];
        for i in 0..size {
            for j in 0..size {
                if i != j && matrix.get(i, j).is_finite() {
                    next[i * size + j] = Some(j);
                }
            }
        }
        Self { size, next }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.size && j < self.size {
            self.next[i * self.size + j]
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, hop: Option<usize>) {
        self.next[i * self.size + j] = hop;
    }
}

impl From<Vec<Vec<Option<usize>>>> for SuccessorTable {
    fn from(rows: Vec<Vec<Option<usize>>>) -> Self {
        let size = rows.len();
        let mut next = vec![None; size * size];
        for (i, row) in rows.into_iter().enumerate() {
            for (j, hop) in row.into_iter().take(size).enumerate() {
                next[i * size + j] = hop.filter(|&h| h < size);
            }
        }
        Self { size, next }
    }
}

impl From<SuccessorTable> for Vec<Vec<Option<usize>>> {
    fn from(t: SuccessorTable) -> Self {
        t.next
            .chunks(t.size.max(1))
            .map(<[Option<usize>]>::to_vec)
            .collect()
    }
}

/// Node indices of the shortest `i -> j` path, or an empty vector when there is none
/// (including `i == j`).
pub fn reconstruct_indices(i: usize, j: usize, successors: &SuccessorTable) -> Result<Vec<usize>> {
    let n = successors.size();
    for ix in [i, j] {
        if ix >= n {
            return Err(Error::invalid_index(ix, n));
        }
    }
    let mut route = vec![i];
    let mut current = i;
    while current != j {
        let Some(next) = successors.get(current, j) else {
            return Ok(Vec::new());
        };
        route.push(next);
        current = next;
        // A simple path visits each node at most once.
        if route.len() > n {
            return Ok(Vec::new());
        }
    }
    if route.len() == 1 {
        return Ok(Vec::new());
    }
    Ok(route)
}

/// Names along the shortest `i -> j` path.
pub fn reconstruct<S: AsRef<str>>(
    i: usize,
    j: usize,
    successors: &SuccessorTable,
    names: &[S],
) -> Result<Vec<String>> {
    if names.len() != successors.size() {
        return Err(pathlab_graph::Error::NameCountMismatch {
            names: names.len(),
            nodes: successors.size(),
        }
        .into());
    }
    Ok(reconstruct_indices(i, j, successors)?
        .into_iter()
        .map(|ix| names[ix].as_ref().to_string())
        .collect())
}

/// Follows `parents` from `target` back to `source`. `None` when the chain breaks first.
pub fn walk_parents(parents: &[Option<usize>], source: usize, target: usize) -> Option<Vec<usize>> {
    let mut route = vec![target];
    let mut current = target;
    while current != source {
        current = parents.get(current).copied().flatten()?;
        route.push(current);
        if route.len() > parents.len() {
            return None;
        }
    }
    route.reverse();
    Some(route)
}

/// Consecutive `(from, to)` pairs of a node sequence.
pub fn path_edges(nodes: &[usize]) -> Vec<(usize, usize)> {
    nodes.windows(2).map(|w| (w[0], w[1])).collect()
}
