//! Floyd-Warshall all-pairs shortest paths with per-intermediate snapshots.
//!
//! Always runs the full cubic loop so every intermediate update can be shown. Negative cycles
//! are not detected.

use crate::error::{Error, Result};
use crate::path::{PathOutcome, SuccessorTable, reconstruct_indices};
use pathlab_graph::{Distance, DistanceMatrix, resolve_names};
use serde::{Deserialize, Serialize};

/// Distances after every pair has been relaxed through `intermediate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloydIteration {
    pub intermediate: usize,
    /// Name of the intermediate node, for table captions.
    pub label: String,
    pub distances: DistanceMatrix,
}

/// One row of the "final shortest routes" listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub from: usize,
    pub to: usize,
    pub outcome: PathOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloydRun {
    pub names: Vec<String>,
    pub distances: DistanceMatrix,
    pub successors: SuccessorTable,
    pub iterations: Vec<FloydIteration>,
}

impl FloydRun {
    pub fn size(&self) -> usize {
        self.names.len()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn distance(&self, i: usize, j: usize) -> Result<Distance> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.distances.get(i, j))
    }

    pub fn route(&self, i: usize, j: usize) -> Result<PathOutcome> {
        let nodes = reconstruct_indices(i, j, &self.successors)?;
        Ok(match self.distances.get(i, j) {
            Distance::Finite(distance) if !nodes.is_empty() => {
                PathOutcome::Found { distance, nodes }
            }
            _ => PathOutcome::NoPath,
        })
    }

    pub fn route_names(&self, i: usize, j: usize) -> Result<Vec<String>> {
        Ok(self.route(i, j)?.names(&self.names))
    }

    /// Every ordered pair `i != j` with its shortest route.
    pub fn routes(&self) -> Vec<Route> {
        let n = self.size();
        let mut out = Vec::with_capacity(n * n.saturating_sub(1));
        for from in 0..n {
            for to in 0..n {
                if from == to {
                    continue;
                }
                let outcome = self.route(from, to).unwrap_or(PathOutcome::NoPath);
                out.push(Route { from, to, outcome });
            }
        }
        out
    }

    fn check(&self, ix: usize) -> Result<()> {
        if ix < self.size() {
            Ok(())
        } else {
            Err(Error::invalid_index(ix, self.size()))
        }
    }
}

/// Runs Floyd-Warshall on `matrix` with full step recording.
pub fn run<S: AsRef<str>>(matrix: &DistanceMatrix, names: &[S]) -> Result<FloydRun> {
    run_with(matrix, names, true)
}

/// Runs Floyd-Warshall; `record_steps = false` skips the per-intermediate snapshots.
pub fn run_with<S: AsRef<str>>(
    matrix: &DistanceMatrix,
    names: &[S],
    record_steps: bool,
) -> Result<FloydRun> {
    let n = matrix.size();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }
    let names = resolve_names(names, n)?;
    tracing::debug!(nodes = n, "floyd-warshall: start");

    let mut dist = matrix.clone();
    let mut successors = SuccessorTable::seed(&dist);
    let mut iterations = Vec::new();

    for k in 0..n {
        let mut updates = 0usize;
        for i in 0..n {
            for j in 0..n {
                // The diagonal is pinned at zero.
                if i == j {
                    continue;
                }
                let alt = dist.get(i, k) + dist.get(k, j);
                if alt < dist.get(i, j) {
                    dist.set(i, j, alt);
                    successors.set(i, j, successors.get(i, k));
                    updates += 1;
                }
            }
        }
        tracing::trace!(intermediate = k, updates, "floyd-warshall: relaxed through node");
        if record_steps {
            iterations.push(FloydIteration {
                intermediate: k,
                label: names[k].clone(),
                distances: dist.clone(),
            });
        }
    }

    tracing::debug!(iterations = iterations.len(), "floyd-warshall: done");
    Ok(FloydRun {
        names,
        distances: dist,
        successors,
        iterations,
    })
}
