//! Breadth first search

use crate::search::{
    search_engines::{SearchAgent, SearchResult, Traversal},
    Environment, Path, Position,
};
use std::collections::VecDeque;
use tracing::trace;

/// Breadth first search. New paths join the back of the frontier and are
/// removed from the front, so the first path to reach the target has the
/// fewest moves.
#[derive(Debug)]
pub struct Bfs<'env, E: Environment> {
    traversal: Traversal<'env, E>,
    frontier: VecDeque<Path>,
}

impl<'env, E: Environment> Bfs<'env, E> {
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

impl<'env, E: Environment> SearchAgent for Bfs<'env, E> {
    type Candidate = Path;

    fn remove_from_frontier(&mut self) -> Option<Path> {
        while let Some(path) = self.frontier.pop_front() {
            // The same position can be queued through several paths before
            // any of them is expanded
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
            self.frontier.push_back(path.extended(neighbour));
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
