use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Display};
use std::ops::Deref;

const TYPICAL_NUM_DIMENSIONS: usize = 2;
pub type Coordinates = SmallVec<[i64; TYPICAL_NUM_DIMENSIONS]>;

/// A [`Position`] is a point on a discrete grid. Equality is exact and
/// element-wise, so two positions are only equal if they have the same number
/// of dimensions and the same coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(Coordinates);

impl Position {
    pub fn new(coordinates: Coordinates) -> Self {
        Self(coordinates)
    }

    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Straight-line (Euclidean) distance to another position of the same
    /// dimension.
    pub fn distance_to(&self, other: &Position) -> f64 {
        debug_assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "Cannot measure distance between positions of different dimensions"
        );
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let delta = (a - b) as f64;
                delta * delta
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Sum of absolute coordinate differences.
    pub fn manhattan_distance_to(&self, other: &Position) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs() as f64)
            .sum()
    }

    /// The position reached by adding `offset` coordinate-wise.
    pub fn offset_by(&self, offset: &[i64]) -> Position {
        Position(
            self.0
                .iter()
                .zip(offset.iter())
                .map(|(coordinate, delta)| coordinate + delta)
                .collect(),
        )
    }
}

impl Deref for Position {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<i64>> for Position {
    fn from(coordinates: Vec<i64>) -> Self {
        Self(Coordinates::from_vec(coordinates))
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, col): (i64, i64)) -> Self {
        let mut coordinates = Coordinates::new();
        coordinates.push(row);
        coordinates.push(col);
        Self(coordinates)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

// based on [`smallvec::smallvec`]
#[allow(unused_macros)]
macro_rules! position {
    // count helper: transform any expression into 1
    (@one $x:expr) => (1usize);
    ($($x:expr),*$(,)*) => ({
        let count = 0usize $(+ $crate::search::position!(@one $x))*;
        #[allow(unused_mut)]
        let mut coordinates = $crate::search::Coordinates::new();
        if count <= coordinates.inline_size() {
            $(coordinates.push($x);)*
            $crate::search::Position::new(coordinates)
        } else {
            $crate::search::Position::new(
                $crate::search::Coordinates::from_vec(vec![$($x,)*])
            )
        }
    });
}
#[allow(unused_imports)]
pub(crate) use position;
