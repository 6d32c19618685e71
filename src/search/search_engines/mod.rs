mod astar;
mod bfs;
mod branch_and_bound;
mod dfs;
mod frontier;
mod greedy;
mod iterative_deepening;
mod random_walk;
mod search_engine;
mod search_statistics;
mod termination_condition;
mod traversal;

pub use astar::AStar;
pub use bfs::Bfs;
pub use branch_and_bound::BranchAndBound;
pub use dfs::Dfs;
pub use frontier::HeapFrontier;
pub use greedy::Greedy;
pub use iterative_deepening::IterativeDeepening;
pub use random_walk::RandomWalk;
pub use search_engine::{AgentName, SearchAgent, SearchResult};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
pub use traversal::Traversal;
