//! Dijkstra's single-source shortest paths with step recording.
//!
//! The selection step is a linear scan over unvisited nodes (lowest index wins ties), which is
//! the textbook array formulation and keeps every intermediate state easy to display. Weights
//! are non-negative by construction of [`Graph`]; the algorithm is not defined otherwise.

use crate::error::{Error, Result};
use crate::path::{PathOutcome, path_edges, walk_parents};
use pathlab_graph::{Distance, Graph};
use serde::{Deserialize, Serialize};

/// The edge examined by one relaxation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explored {
    pub edge: usize,
    pub from: usize,
    pub to: usize,
}

/// Full algorithm state right after one relaxation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub distances: Vec<Distance>,
    pub parents: Vec<Option<usize>>,
    pub visited: Vec<bool>,
    pub explored: Explored,
    /// Whether this attempt lowered the tentative distance of `explored.to`.
    pub improved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierEntry {
    pub node: usize,
    pub distance: Distance,
    pub parent: Option<usize>,
}

/// Settled/frontier partition after one node has been settled and its edges relaxed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationSummary {
    /// 1-based round number.
    pub iteration: usize,
    /// The node settled in this round.
    pub current: usize,
    pub settled: Vec<usize>,
    pub frontier: Vec<FrontierEntry>,
}

/// Text row of the iteration table, e.g. `settled = "A, B"`, `frontier = "C:[3, B]  D:[∞, -]"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationRow {
    pub iteration: usize,
    pub settled: String,
    pub frontier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraRun {
    pub source: usize,
    pub target: usize,
    pub distances: Vec<Distance>,
    pub parents: Vec<Option<usize>>,
    pub snapshots: Vec<Snapshot>,
    pub iterations: Vec<IterationSummary>,
    pub outcome: PathOutcome,
}

impl DijkstraRun {
    /// Consecutive `(from, to)` pairs of the found path.
    pub fn path_edges(&self) -> Vec<(usize, usize)> {
        path_edges(self.outcome.nodes())
    }

    /// Shortest path from the source to any node, reusing the recorded parents.
    pub fn outcome_for(&self, target: usize) -> Result<PathOutcome> {
        if target >= self.distances.len() {
            return Err(Error::invalid_index(target, self.distances.len()));
        }
        Ok(outcome(&self.distances, &self.parents, self.source, target))
    }

    pub fn iteration_rows<S: AsRef<str>>(&self, names: &[S]) -> Vec<IterationRow> {
        let name = |ix: usize| names.get(ix).map_or("?", |s| s.as_ref());
        self.iterations
            .iter()
            .map(|it| IterationRow {
                iteration: it.iteration,
                settled: it
                    .settled
                    .iter()
                    .map(|&ix| name(ix))
                    .collect::<Vec<_>>()
                    .join(", "),
                frontier: it
                    .frontier
                    .iter()
                    .map(|f| {
                        format!(
                            "{}:[{}, {}]",
                            name(f.node),
                            f.distance,
                            f.parent.map_or("-", name)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("  "),
            })
            .collect()
    }
}

struct State {
    distances: Vec<Distance>,
    parents: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl State {
    fn new(n: usize, source: usize) -> Self {
        let mut distances = vec![Distance::Unreachable; n];
        distances[source] = Distance::ZERO;
        Self {
            distances,
            parents: vec![None; n],
            visited: vec![false; n],
        }
    }

    /// First unvisited node with the smallest finite distance.
    fn closest_unvisited(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (ix, d) in self.distances.iter().enumerate() {
            if self.visited[ix] {
                continue;
            }
            match best {
                Some(b) if *d >= self.distances[b] => {}
                _ => best = Some(ix),
            }
        }
        best.filter(|&ix| self.distances[ix].is_finite())
    }

    fn snapshot(&self, explored: Explored, improved: bool) -> Snapshot {
        Snapshot {
            distances: self.distances.clone(),
            parents: self.parents.clone(),
            visited: self.visited.clone(),
            explored,
            improved,
        }
    }

    fn summary(&self, iteration: usize, current: usize) -> IterationSummary {
        let mut settled = Vec::new();
        let mut frontier = Vec::new();
        for (ix, &visited) in self.visited.iter().enumerate() {
            if visited {
                settled.push(ix);
            } else {
                frontier.push(FrontierEntry {
                    node: ix,
                    distance: self.distances[ix],
                    parent: self.parents[ix],
                });
            }
        }
        IterationSummary {
            iteration,
            current,
            settled,
            frontier,
        }
    }
}

fn outcome(
    distances: &[Distance],
    parents: &[Option<usize>],
    source: usize,
    target: usize,
) -> PathOutcome {
    let Distance::Finite(distance) = distances[target] else {
        return PathOutcome::NoPath;
    };
    match walk_parents(parents, source, target) {
        Some(nodes) => PathOutcome::Found { distance, nodes },
        None => PathOutcome::NoPath,
    }
}

/// Runs Dijkstra from `source`, reporting the path to `target`, with full step recording.
pub fn run(graph: &Graph, source: usize, target: usize) -> Result<DijkstraRun> {
    run_with(graph, source, target, true)
}

/// Runs Dijkstra; `record_steps = false` skips snapshots and iteration summaries.
pub fn run_with(
    graph: &Graph,
    source: usize,
    target: usize,
    record_steps: bool,
) -> Result<DijkstraRun> {
    if graph.node_count() == 0 || graph.edge_count() == 0 {
        return Err(Error::EmptyGraph);
    }
    graph.check_index(source)?;
    graph.check_index(target)?;

    let n = graph.node_count();
    tracing::debug!(
        nodes = n,
        edges = graph.edge_count(),
        source,
        target,
        "dijkstra: start"
    );

    let mut state = State::new(n, source);
    let mut snapshots = Vec::new();
    let mut iterations = Vec::new();

    for round in 1..=n {
        let Some(u) = state.closest_unvisited() else {
            tracing::debug!(round, "dijkstra: no reachable unvisited node left");
            break;
        };
        state.visited[u] = true;

        for step in graph.outgoing(u) {
            let v = step.to;
            if state.visited[v] {
                continue;
            }
            let candidate = state.distances[u].add_weight(step.weight);
            let improved = candidate < state.distances[v];
            if improved {
                state.distances[v] = candidate;
                state.parents[v] = Some(u);
            }
            tracing::trace!(edge = step.edge, from = u, to = v, improved, "dijkstra: relax");
            if record_steps {
                snapshots.push(state.snapshot(
                    Explored {
                        edge: step.edge,
                        from: u,
                        to: v,
                    },
                    improved,
                ));
            }
        }

        if record_steps {
            iterations.push(state.summary(round, u));
        }
    }

    let outcome = outcome(&state.distances, &state.parents, source, target);
    tracing::debug!(
        found = outcome.is_found(),
        snapshots = snapshots.len(),
        "dijkstra: done"
    );

    Ok(DijkstraRun {
        source,
        target,
        distances: state.distances,
        parents: state.parents,
        snapshots,
        iterations,
        outcome,
    })
}
