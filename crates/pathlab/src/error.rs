pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] pathlab_graph::Error),

    #[error("graph is empty: add at least one node and one edge before running")]
    EmptyGraph,

    #[error("no Floyd-Warshall result yet: run Floyd-Warshall before highlighting a route")]
    MissingFloydRun,

    #[error("origin and destination must be different nodes")]
    SameEndpoints,
}

impl Error {
    pub(crate) fn invalid_index(index: usize, len: usize) -> Self {
        Error::Graph(pathlab_graph::Error::InvalidIndex { index, len })
    }
}
