pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid edge weight {value:?}: expected a finite number >= 0")]
    InvalidWeight { value: String },

    #[error("node index {index} is out of range (graph has {len} nodes)")]
    InvalidIndex { index: usize, len: usize },

    #[error("node name {name:?} is already in use")]
    DuplicateNode { name: String },

    #[error("node name must not be blank")]
    InvalidName,

    #[error("unknown node {name:?}")]
    UnknownNode { name: String },

    #[error("invalid matrix cell at row {row}, column {col}: {value:?}")]
    InvalidMatrixCell {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("matrix row {row} has {len} cells, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("{names} names supplied for a {nodes}-node matrix")]
    NameCountMismatch { names: usize, nodes: usize },
}
