mod heuristic;
mod manhattan;
mod straight_line;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanDistance;
pub use straight_line::StraightLineDistance;
pub use zero_heuristic::ZeroHeuristic;
