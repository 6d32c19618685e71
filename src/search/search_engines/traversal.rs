//! The state every search shares: the environment it talks to, the last
//! percept, the record of visited positions and statistics.

use crate::search::{
    search_engines::{SearchResult, SearchStatistics},
    Action, Environment, Path, Percept, Position,
};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug)]
pub struct Traversal<'env, E: Environment> {
    environment: &'env mut E,
    percepts: Percept,
    initial_position: Position,
    /// Every expanded position, mapped to the number of positions in the
    /// shortest path it was expanded through.
    visited: HashMap<Position, usize>,
    /// The path whose visit produced the current percept.
    last_path: Option<Path>,
    statistics: SearchStatistics,
}

impl<'env, E: Environment> Traversal<'env, E> {
    pub fn new(environment: &'env mut E) -> Self {
        let percepts = environment.initial_percepts();
        percepts.check_well_formed();
        let initial_position = percepts.current_position.clone();
        debug!(start = %initial_position, target = %percepts.target);
        Self {
            environment,
            percepts,
            initial_position,
            visited: HashMap::new(),
            last_path: None,
            statistics: SearchStatistics::new(),
        }
    }

    /// Signal the environment to visit the terminal position of `path`, mark
    /// that position as visited and return the neighbours viable from it.
    pub fn visit(&mut self, path: &Path) -> Vec<Position> {
        debug!(position = %path.terminal(), path_length = path.len(), "visiting");
        self.percepts = self.environment.signal(Action::visit(path));
        self.percepts.check_well_formed();
        self.statistics.increment_expanded_nodes();

        let depth = self
            .visited
            .entry(path.terminal().clone())
            .or_insert(path.len());
        *depth = (*depth).min(path.len());

        self.last_path = Some(path.clone());
        self.percepts.neighbours.clone()
    }

    /// Whether `neighbour` already occurs in `path`.
    pub fn is_cycle(&self, neighbour: &Position, path: &Path) -> bool {
        path.iter().any(|node| node == neighbour)
    }

    /// Whether `neighbour` has been expanded by any branch.
    pub fn is_explored(&self, neighbour: &Position) -> bool {
        self.visited.contains_key(neighbour)
    }

    /// Whether `neighbour` has been expanded through a path holding at most
    /// `path_length` positions.
    pub fn is_explored_within(&self, neighbour: &Position, path_length: usize) -> bool {
        self.visited
            .get(neighbour)
            .is_some_and(|&depth| depth <= path_length)
    }

    pub fn clear_visited(&mut self) {
        self.visited.clear();
    }

    pub fn percepts(&self) -> &Percept {
        &self.percepts
    }

    pub fn target(&self) -> &Position {
        &self.percepts.target
    }

    pub fn initial_position(&self) -> &Position {
        &self.initial_position
    }

    pub fn reached_target(&self) -> bool {
        self.percepts.is_at_target()
    }

    pub fn environment_mut(&mut self) -> &mut E {
        self.environment
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.statistics
    }

    /// [`SearchResult::Success`] with the path that reached the target, or
    /// [`SearchResult::Unsolvable`] if the target has not been reached.
    pub fn outcome(&self) -> SearchResult {
        self.statistics.finalise_search();
        if !self.reached_target() {
            return SearchResult::Unsolvable;
        }
        match &self.last_path {
            Some(path) => SearchResult::Success(path.clone()),
            // Only possible when the search starts on the target
            None => SearchResult::Success(Path::new(self.initial_position.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::position;
    use crate::test_utils::*;

    #[test]
    fn cycles_are_within_path() {
        let mut room = grid(OPEN_3X3_TEXT);
        let traversal = Traversal::new(&mut room);
        let path = Path::new(position![0, 0]).extended(position![0, 1]);
        assert!(traversal.is_cycle(&position![0, 0], &path));
        assert!(traversal.is_cycle(&position![0, 1], &path));
        assert!(!traversal.is_cycle(&position![1, 1], &path));
    }

    #[test]
    fn visit_marks_explored() {
        let mut room = grid(OPEN_3X3_TEXT);
        let mut traversal = Traversal::new(&mut room);
        assert!(!traversal.is_explored(&position![0, 0]));

        let start = Path::new(traversal.initial_position().clone());
        let neighbours = traversal.visit(&start);
        assert_eq!(neighbours, vec![position![1, 0], position![0, 1]]);
        assert!(traversal.is_explored(&position![0, 0]));
        assert!(!traversal.is_explored(&position![1, 0]));
        assert_eq!(traversal.statistics().expanded_nodes(), 1);
        assert!(!traversal.reached_target());
        assert_eq!(traversal.outcome(), SearchResult::Unsolvable);

        traversal.clear_visited();
        assert!(!traversal.is_explored(&position![0, 0]));
    }

    #[test]
    fn explored_within_keeps_shallowest_depth() {
        let mut room = grid(OPEN_3X3_TEXT);
        let mut traversal = Traversal::new(&mut room);
        let deep = Path::new(position![0, 0])
            .extended(position![0, 1])
            .extended(position![1, 1]);
        let shallow = Path::new(position![0, 0]).extended(position![1, 1]);

        traversal.visit(&deep);
        assert!(traversal.is_explored_within(&position![1, 1], 3));
        assert!(!traversal.is_explored_within(&position![1, 1], 2));

        traversal.visit(&shallow);
        assert!(traversal.is_explored_within(&position![1, 1], 2));

        traversal.visit(&deep);
        assert!(traversal.is_explored_within(&position![1, 1], 2));
    }

    #[test]
    fn outcome_is_last_visited_path() {
        let mut room = grid(CORRIDOR_TEXT);
        let mut traversal = Traversal::new(&mut room);
        let path = Path::from_positions((0..5).map(|col| position![0, col]).collect()).unwrap();
        traversal.visit(&path);
        assert!(traversal.reached_target());
        assert_eq!(traversal.outcome(), SearchResult::Success(path));
    }
}
