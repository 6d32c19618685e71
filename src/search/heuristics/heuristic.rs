use crate::search::heuristics::{ManhattanDistance, StraightLineDistance, ZeroHeuristic};
use crate::search::Position;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost of getting from `position` to `target`.
    fn evaluate(&mut self, position: &Position, target: &Position) -> HeuristicValue;

    /// Evaluate a batch of positions against the same target. The default
    /// implementation simply calls `evaluate` for each position sequentially.
    fn evaluate_batch(&mut self, positions: &[Position], target: &Position) -> Vec<HeuristicValue> {
        positions
            .iter()
            .map(|position| self.evaluate(position, target))
            .collect()
    }
}

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Straight-line distance to the target. Admissible for any \
        movement model whose step cost is the straight-line step length.")]
    StraightLine,
    #[clap(help = "Manhattan distance to the target. Only admissible when \
        diagonal moves are not allowed.")]
    Manhattan,
    #[clap(help = "The zero heuristic, turns A* into uniform cost search.")]
    Zero,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::StraightLine => Box::new(StraightLineDistance::new()),
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
