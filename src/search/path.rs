//! A path is the sequence of positions from the start of a search to a node on
//! the frontier. This module provides the [`Path`] struct, and the
//! [`CostedPath`] struct which pairs a path with its accumulated cost.

use crate::search::{HeuristicValue, Position};
use itertools::Itertools;
use std::fmt::{self, Display};
use std::ops::Deref;

/// A non-empty sequence of positions. The first position is where the search
/// started, the last is the node the path leads to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    positions: Vec<Position>,
}

impl Path {
    /// A path consisting of a single position.
    pub fn new(start: Position) -> Self {
        Self {
            positions: vec![start],
        }
    }

    /// Build a path from a sequence of positions, returns `None` if the
    /// sequence is empty.
    pub fn from_positions(positions: Vec<Position>) -> Option<Self> {
        if positions.is_empty() {
            None
        } else {
            Some(Self { positions })
        }
    }

    /// A new path that follows this one and then steps to `next`.
    pub fn extended(&self, next: Position) -> Self {
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(next);
        Self { positions }
    }

    pub fn start(&self) -> &Position {
        &self.positions[0]
    }

    /// The node the path leads to.
    pub fn terminal(&self) -> &Position {
        self.positions
            .last()
            .expect("Paths always hold at least one position")
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of moves in the path, one less than the number of positions.
    pub fn num_edges(&self) -> usize {
        self.positions.len() - 1
    }

    /// Sum of the straight-line distances between consecutive positions.
    pub fn cost(&self) -> f64 {
        self.positions
            .iter()
            .tuple_windows()
            .map(|(from, to)| from.distance_to(to))
            .sum()
    }

    /// Whether any position occurs more than once.
    pub fn has_repeated_positions(&self) -> bool {
        !self.positions.iter().all_unique()
    }
}

impl Deref for Path {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.positions
    }
}

impl IntoIterator for Path {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.positions.iter().join(" -> "))
    }
}

/// A [`Path`] together with the accumulated cost of following it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CostedPath {
    pub path: Path,
    pub cost: HeuristicValue,
}

impl CostedPath {
    pub fn new(path: Path, cost: HeuristicValue) -> Self {
        Self { path, cost }
    }

    /// The zero cost path consisting of the start position only.
    pub fn start(start: Position) -> Self {
        Self::new(Path::new(start), (0.).into())
    }

    /// Extend the path to `next`, adding the straight-line distance from the
    /// current terminal to the cost.
    pub fn extended(&self, next: Position) -> Self {
        let step_cost = self.path.terminal().distance_to(&next);
        Self {
            path: self.path.extended(next),
            cost: self.cost + step_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::position;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn extend_keeps_original() {
        let path = Path::new(position![0, 0]);
        let extended = path.extended(position![0, 1]);
        assert_eq!(path.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.start(), &position![0, 0]);
        assert_eq!(extended.terminal(), &position![0, 1]);
        assert_eq!(extended.num_edges(), 1);
    }

    #[test]
    fn empty_path_rejected() {
        assert!(Path::from_positions(vec![]).is_none());
    }

    #[test]
    fn cost_sums_edge_lengths() {
        let path = Path::from_positions(vec![position![0, 0], position![1, 1], position![1, 2]])
            .unwrap();
        assert_approx_eq!(path.cost(), 2f64.sqrt() + 1.0);
    }

    #[test]
    fn repeated_positions_detected() {
        let path = Path::new(position![0, 0])
            .extended(position![0, 1])
            .extended(position![0, 0]);
        assert!(path.has_repeated_positions());
        assert!(!Path::new(position![0, 0]).has_repeated_positions());
    }

    #[test]
    fn costed_extension_matches_path_cost() {
        let costed = CostedPath::start(position![0, 0])
            .extended(position![1, 0])
            .extended(position![2, 1]);
        assert_approx_eq!(costed.cost.into_inner(), costed.path.cost());
    }

    #[test]
    fn display() {
        let path = Path::new(position![0, 0]).extended(position![1, 0]);
        assert_eq!(path.to_string(), "(0, 0) -> (1, 0)");
    }
}
