use crate::search::{Heuristic, HeuristicValue, Position};

/// Sum of the absolute coordinate differences to the target. Tighter than the
/// straight-line distance on 4-connected grids, but overestimates as soon as
/// diagonal moves are allowed.
#[derive(Clone, Debug, Default)]
pub struct ManhattanDistance {}

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&mut self, position: &Position, target: &Position) -> HeuristicValue {
        position.manhattan_distance_to(target).into()
    }
}
