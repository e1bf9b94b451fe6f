use crate::dijkstra::{self, DijkstraRun};
use crate::error::{Error, Result};
use crate::floyd::{self, FloydRun};
use crate::options::SessionOptions;
use crate::path::path_edges;
use pathlab_graph::{
    Action, Direction, DistanceMatrix, Graph, GraphDocument, Point, from_matrix, to_matrix,
};
use serde::{Deserialize, Serialize};

/// Nodes and edges of a route mapped onto the current graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub nodes: Vec<usize>,
    pub edges: Vec<(usize, usize)>,
}

impl Highlight {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One graph-editing session.
///
/// A session exclusively owns its graph; there is no shared state between sessions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: SessionOptions,
    graph: Graph,
    last_floyd: Option<FloydRun>,
}

impl Session {
    fn run_timing_enabled() -> bool {
        static ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
        *ENABLED.get_or_init(|| {
            matches!(
                std::env::var("PATHLAB_RUN_TIMING").as_deref(),
                Ok("1") | Ok("true")
            )
        })
    }

    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            graph: Graph::new(options.graph_options()),
            last_floyd: None,
        }
    }

    /// Starts a session from a graph document. The document's edits are undoable.
    ///
    /// Naming options stored in the document take precedence over `options.node_naming`;
    /// [`Session::options`] reports the scheme actually in use.
    pub fn from_document(options: SessionOptions, document: &GraphDocument) -> Result<Self> {
        let graph = document.into_graph_with(options.graph_options())?;
        let options = options.with_node_naming(graph.options().node_naming);
        Ok(Self {
            options,
            graph,
            last_floyd: None,
        })
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn add_node(&mut self, position: Point) -> usize {
        self.graph.add_node(position)
    }

    pub fn add_named_node(&mut self, name: &str, position: Point) -> Result<usize> {
        Ok(self.graph.add_named_node(name, position)?)
    }

    pub fn add_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: f64,
        direction: Direction,
    ) -> Result<usize> {
        self.graph
            .add_edge(from, to, weight, direction)
            .map_err(|err| {
                tracing::warn!(from, to, weight, %err, "rejected edge");
                Error::from(err)
            })
    }

    pub fn add_edge_str(
        &mut self,
        from: usize,
        to: usize,
        weight: &str,
        direction: Direction,
    ) -> Result<usize> {
        self.graph
            .add_edge_str(from, to, weight, direction)
            .map_err(|err| {
                tracing::warn!(from, to, weight, %err, "rejected edge");
                Error::from(err)
            })
    }

    pub fn undo(&mut self) -> Option<Action> {
        self.graph.undo()
    }

    pub fn redo(&mut self) -> Option<Action> {
        self.graph.redo()
    }

    pub fn run_dijkstra(&self, source: usize, target: usize) -> Result<DijkstraRun> {
        let start = Self::run_timing_enabled().then(std::time::Instant::now);
        let run = dijkstra::run_with(&self.graph, source, target, self.options.record_steps)?;
        if let Some(start) = start {
            eprintln!(
                "[run-timing] engine=dijkstra total={:?} nodes={} edges={} snapshots={}",
                start.elapsed(),
                self.graph.node_count(),
                self.graph.edge_count(),
                run.snapshots.len(),
            );
        }
        Ok(run)
    }

    pub fn run_dijkstra_by_name(&self, source: &str, target: &str) -> Result<DijkstraRun> {
        let source = self.lookup(source)?;
        let target = self.lookup(target)?;
        self.run_dijkstra(source, target)
    }

    pub fn to_matrix(&self) -> DistanceMatrix {
        to_matrix(&self.graph)
    }

    /// Runs Floyd-Warshall over the current graph and remembers the result.
    pub fn run_floyd_warshall(&mut self) -> Result<&FloydRun> {
        if self.graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let matrix = self.to_matrix();
        let names = self.graph.node_names();
        self.run_floyd_warshall_on(&matrix, &names)
    }

    /// Runs Floyd-Warshall over a user-supplied matrix and remembers the result.
    pub fn run_floyd_warshall_on<S: AsRef<str>>(
        &mut self,
        matrix: &DistanceMatrix,
        names: &[S],
    ) -> Result<&FloydRun> {
        let start = Self::run_timing_enabled().then(std::time::Instant::now);
        let run = floyd::run_with(matrix, names, self.options.record_steps)?;
        if let Some(start) = start {
            eprintln!(
                "[run-timing] engine=floyd-warshall total={:?} nodes={}",
                start.elapsed(),
                matrix.size(),
            );
        }
        Ok(&*self.last_floyd.insert(run))
    }

    pub fn last_floyd_run(&self) -> Option<&FloydRun> {
        self.last_floyd.as_ref()
    }

    /// Replaces the graph with one reseeded from `matrix`. History starts empty.
    pub fn load_matrix<S: AsRef<str>>(&mut self, matrix: &DistanceMatrix, names: &[S]) -> Result<()> {
        self.graph = from_matrix(matrix, names)?;
        self.last_floyd = None;
        Ok(())
    }

    /// Maps the remembered Floyd-Warshall route `origin -> destination` onto the current graph.
    ///
    /// The route is matched by node name, so it still works after the graph was edited as long
    /// as the names on the route exist. An unreachable pair gives an empty highlight.
    pub fn highlight_route(&self, origin: usize, destination: usize) -> Result<Highlight> {
        let run = self.last_floyd.as_ref().ok_or(Error::MissingFloydRun)?;
        if origin == destination {
            return Err(Error::SameEndpoints);
        }
        let names = run.route_names(origin, destination)?;
        let nodes = names
            .iter()
            .map(|name| self.lookup(name))
            .collect::<Result<Vec<_>>>()?;
        let edges = path_edges(&nodes);
        Ok(Highlight { nodes, edges })
    }

    fn lookup(&self, name: &str) -> Result<usize> {
        self.graph.node_index(name.trim()).ok_or_else(|| {
            Error::from(pathlab_graph::Error::UnknownNode {
                name: name.to_string(),
            })
        })
    }
}
