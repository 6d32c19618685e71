use crate::search::{Heuristic, HeuristicValue, Position};

/// The Euclidean distance between a position and the target. Never
/// overestimates as long as each step costs its own straight-line length, and
/// is consistent, so A* with it returns optimal paths.
#[derive(Clone, Debug, Default)]
pub struct StraightLineDistance {}

impl StraightLineDistance {
    pub fn new() -> Self {
        StraightLineDistance {}
    }
}

impl Heuristic for StraightLineDistance {
    fn evaluate(&mut self, position: &Position, target: &Position) -> HeuristicValue {
        position.distance_to(target).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::position;

    #[test]
    fn straight_line() {
        let mut heuristic = StraightLineDistance::new();
        assert_eq!(
            heuristic.evaluate(&position![0, 0], &position![3, 4]),
            HeuristicValue::from(5.)
        );
        assert_eq!(
            heuristic.evaluate(&position![3, 4], &position![3, 4]),
            HeuristicValue::from(0.)
        );
    }

    #[test]
    fn batch_matches_single() {
        let mut heuristic = StraightLineDistance::new();
        let target = position![2, 2];
        let positions = vec![position![0, 0], position![2, 0], position![2, 2]];
        let values = heuristic.evaluate_batch(&positions, &target);
        assert_eq!(values.len(), 3);
        assert_eq!(values[1], HeuristicValue::from(2.));
        assert_eq!(values[2], HeuristicValue::from(0.));
    }
}
