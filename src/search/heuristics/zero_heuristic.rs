use crate::search::{Heuristic, HeuristicValue, Position};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _position: &Position, _target: &Position) -> HeuristicValue {
        (0.).into()
    }
}
