//! Tagged shortest-path distances.
//!
//! Unreachable pairs are an explicit variant instead of a float infinity, so sums and
//! comparisons never touch `f64::INFINITY`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;

/// A path length, or the absence of any path.
///
/// Every finite distance orders before [`Distance::Unreachable`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Distance {
    Finite(f64),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0.0);

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Distance::Finite(v) => Some(v),
            Distance::Unreachable => None,
        }
    }

    /// Extends this distance by one edge of the given weight.
    pub fn add_weight(self, weight: f64) -> Distance {
        self + Distance::Finite(weight)
    }

    pub fn min(self, other: Distance) -> Distance {
        if other < self { other } else { self }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        match (self, rhs) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a + b),
            _ => Distance::Unreachable,
        }
    }
}

impl From<Option<f64>> for Distance {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(v) => write!(f, "{v}"),
            Distance::Unreachable => f.write_str("∞"),
        }
    }
}

// JSON has no infinity; unreachable cells travel as `null`.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(Distance::from)
    }
}
