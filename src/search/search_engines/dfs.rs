//! Depth first search

use crate::search::{
    search_engines::{SearchAgent, SearchResult, Traversal},
    Environment, Path, Position,
};
use std::collections::VecDeque;
use tracing::trace;

/// Depth first search. New paths go to the front of the frontier, which is
/// also where paths are removed from.
#[derive(Debug)]
pub struct Dfs<'env, E: Environment> {
    traversal: Traversal<'env, E>,
    frontier: VecDeque<Path>,
}

impl<'env, E: Environment> Dfs<'env, E> {
    pub fn new(environment: &'env mut E) -> Self {
        let traversal = Traversal::new(environment);
        let frontier = VecDeque::from([Path::new(traversal.initial_position().clone())]);
        Self {
            traversal,
            frontier,
        }
    }

    pub fn traversal(&self) -> &Traversal<'env, E> {
        &self.traversal
    }
}

impl<'env, E: Environment> SearchAgent for Dfs<'env, E> {
    type Candidate = Path;

    fn remove_from_frontier(&mut self) -> Option<Path> {
        while let Some(path) = self.frontier.pop_front() {
            if self.traversal.is_explored(path.terminal()) {
                self.traversal.statistics_mut().increment_stale_paths();
                continue;
            }
            return Some(path);
        }
        None
    }

    fn visit_neighbours(&mut self, path: &Path) -> Vec<Position> {
        self.traversal.visit(path)
    }

    fn update_frontier(&mut self, path: Path, neighbours: Vec<Position>) {
        let mut num_generated = 0;
        for neighbour in neighbours {
            if self.traversal.is_cycle(&neighbour, &path) || self.traversal.is_explored(&neighbour)
            {
                trace!(neighbour = %neighbour, "pruned");
                self.traversal.statistics_mut().increment_pruned_paths();
                continue;
            }
            self.frontier.push_front(path.extended(neighbour));
            num_generated += 1;
        }
        self.traversal
            .statistics_mut()
            .increment_generated_paths(num_generated);
    }

    fn frontier_is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    fn reached_target(&self) -> bool {
        self.traversal.reached_target()
    }

    fn outcome(&self) -> SearchResult {
        self.traversal.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::position;
    use crate::test_utils::*;

    #[test]
    fn reaches_target_on_open_grid() {
        let mut room = grid(OPEN_3X3_TEXT);
        let result = Dfs::new(&mut room).run();
        let path = result.path().unwrap();
        // Last neighbour in, first out: right before down, snaking through
        // every cell
        assert_eq!(
            path.positions(),
            &[
                position![0, 0],
                position![0, 1],
                position![0, 2],
                position![1, 2],
                position![1, 1],
                position![1, 0],
                position![2, 0],
                position![2, 1],
                position![2, 2],
            ]
        );
        assert!(path.num_edges() > 4);
        assert!(!path.has_repeated_positions());
    }

    #[test]
    fn unreachable_target_exhausts_frontier() {
        let mut room = grid(WALLED_OFF_TEXT);
        let mut dfs = Dfs::new(&mut room);
        assert_eq!(dfs.run(), SearchResult::Unsolvable);
        assert_eq!(dfs.traversal().statistics().expanded_nodes(), 3);
    }

    #[test]
    fn acting_step_by_step() {
        let mut room = grid(CORRIDOR_TEXT);
        let mut dfs = Dfs::new(&mut room);
        let mut steps = 0;
        while !dfs.reached_target() {
            crate::search::Agent::act(&mut dfs);
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert!(dfs.outcome().is_success());
    }
}
