//! Dense distance matrices and the adapter between them and [`Graph`].

use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::graph::{Direction, Graph, GraphOptions, NodeNaming, Point, validate_weight};
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Square row-major matrix of distances. The diagonal is always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Distance>>", into = "Vec<Vec<Distance>>")]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// `size x size` matrix with zeros on the diagonal and no other connections.
    pub fn new(size: usize) -> Self {
        let mut cells = vec![Distance::Unreachable; size * size];
        for i in 0..size {
            cells[i * size + i] = Distance::ZERO;
        }
        Self { size, cells }
    }

    /// Builds a matrix from rows. Diagonal entries are forced to zero; off-diagonal finite
    /// cells must be non-negative.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self> {
        let size = rows.len();
        let mut m = Self::new(size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: size,
                });
            }
            for (j, d) in row.into_iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Distance::Finite(v) = d {
                    validate_weight(v).map_err(|_| Error::InvalidMatrixCell {
                        row: i,
                        col: j,
                        value: v.to_string(),
                    })?;
                }
                m.set(i, j, d);
            }
        }
        Ok(m)
    }

    /// Parses the editable text form. See [`parse_cell`] for the cell grammar.
    pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let size = rows.len();
        let mut m = Self::new(size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(Error::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: size,
                });
            }
            for (j, raw) in row.iter().enumerate() {
                if i == j {
                    continue;
                }
                m.set(i, j, parse_cell(raw.as_ref(), i, j)?);
            }
        }
        Ok(m)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// # Panics
    ///
    /// Panics when `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> Distance {
        assert!(i < self.size && j < self.size, "matrix index out of range");
        self.cells[i * self.size + j]
    }

    /// Stores `d` at `(i, j)`. Writes to the diagonal are ignored.
    ///
    /// # Panics
    ///
    /// Panics when `i` or `j` is out of range.
    pub fn set(&mut self, i: usize, j: usize, d: Distance) {
        assert!(i < self.size && j < self.size, "matrix index out of range");
        if i != j {
            self.cells[i * self.size + j] = d;
        }
    }

    /// # Panics
    ///
    /// Panics when `i` is out of range.
    pub fn row(&self, i: usize) -> &[Distance] {
        assert!(i < self.size, "matrix index out of range");
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Editable text form: numbers as written, blank for unreachable.
    pub fn to_text_rows(&self) -> Vec<Vec<String>> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|d| d.value().map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<Distance>>> for DistanceMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Distance>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<Distance>> {
    fn from(m: DistanceMatrix) -> Self {
        m.rows().map(<[Distance]>::to_vec).collect()
    }
}

/// Parses one off-diagonal matrix cell.
///
/// Blank text, `∞` and `inf` (any case) mean unreachable; anything else must be a finite,
/// non-negative number.
pub fn parse_cell(raw: &str, row: usize, col: usize) -> Result<Distance> {
    let text = raw.trim();
    if text.is_empty() || text == "∞" || text.eq_ignore_ascii_case("inf") {
        return Ok(Distance::Unreachable);
    }
    text.parse::<f64>()
        .ok()
        .and_then(|v| validate_weight(v).ok())
        .map(Distance::Finite)
        .ok_or_else(|| Error::InvalidMatrixCell {
            row,
            col,
            value: raw.to_string(),
        })
}

/// Names for an `n`-node matrix: trimmed, with `N{i+1}` filling blanks and missing entries.
///
/// A filler that collides with another name moves on to the next free `N{k}`.
pub fn resolve_names<S: AsRef<str>>(names: &[S], n: usize) -> Result<Vec<String>> {
    if names.len() > n {
        return Err(Error::NameCountMismatch {
            names: names.len(),
            nodes: n,
        });
    }
    let given: Vec<Option<&str>> = (0..n)
        .map(|i| {
            names
                .get(i)
                .map(|s| s.as_ref().trim())
                .filter(|s| !s.is_empty())
        })
        .collect();
    let mut taken: HashSet<String> = given.iter().flatten().map(|s| s.to_string()).collect();

    let mut resolved = Vec::with_capacity(n);
    for (i, name) in given.into_iter().enumerate() {
        if let Some(name) = name {
            resolved.push(name.to_string());
            continue;
        }
        let mut candidate = i;
        let name = loop {
            let name = NodeNaming::Numbered.name_for(candidate);
            if !taken.contains(&name) {
                break name;
            }
            candidate += 1;
        };
        taken.insert(name.clone());
        resolved.push(name);
    }
    Ok(resolved)
}

/// Dense matrix of `graph`: zero diagonal, the minimum weight per ordered pair, `Both` edges
/// counted in each direction.
pub fn to_matrix(graph: &Graph) -> DistanceMatrix {
    let mut m = DistanceMatrix::new(graph.node_count());
    for e in graph.edges() {
        let w = Distance::Finite(e.weight);
        if e.from != e.to {
            m.set(e.from, e.to, m.get(e.from, e.to).min(w));
            if e.direction == Direction::Both {
                m.set(e.to, e.from, m.get(e.to, e.from).min(w));
            }
        }
    }
    m
}

/// Reseeds a graph from a matrix. The returned graph has an empty history.
///
/// A symmetric finite pair becomes one `Both` edge; every other finite off-diagonal cell becomes
/// a `Forward` edge. Node positions are left at the origin.
pub fn from_matrix<S: AsRef<str>>(matrix: &DistanceMatrix, names: &[S]) -> Result<Graph> {
    let n = matrix.size();
    let names = resolve_names(names, n)?;
    let mut graph = Graph::new(GraphOptions {
        node_naming: NodeNaming::Numbered,
    });
    for name in &names {
        graph.add_named_node(name, Point::default())?;
    }
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let Distance::Finite(w) = matrix.get(i, j) else {
                continue;
            };
            let symmetric = matrix.get(j, i) == Distance::Finite(w);
            if !symmetric {
                graph.add_edge(i, j, w, Direction::Forward)?;
            } else if i < j {
                graph.add_edge(i, j, w, Direction::Both)?;
            }
        }
    }
    graph.clear_history();
    Ok(graph)
}

impl Graph {
    pub fn to_matrix(&self) -> DistanceMatrix {
        to_matrix(self)
    }
}
