//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{HeapFrontier, SearchAgent, SearchResult, Traversal},
    Environment, Heuristic, Path, Position,
};
use tracing::trace;

/// Greedy best-first search. Always expands the path whose terminal position
/// has the lowest heuristic estimate, ignoring the cost so far. Fast, but the
/// paths it finds can be far from optimal.
#[derive(Debug)]
pub struct Greedy<'env, E: Environment> {
    traversal: Traversal<'env, E>,
    heuristic: Box<dyn Heuristic>,
    frontier: HeapFrontier<Path>,
}

impl<'env, E: Environment> Greedy<'env, E> {
    pub fn new(environment: &'env mut E, mut heuristic: Box<dyn Heuristic>) -> Self {
        let traversal = Traversal::new(environment);
        let start = traversal.initial_position().clone();
        let h = heuristic.evaluate(&start, traversal.target());

        let mut frontier = HeapFrontier::new();
        frontier.push(Path::new(start), h);

        Self {
            traversal,
            heuristic,
            frontier,
        }
    }

    pub fn traversal(&self) -> &Traversal<'env, E> {
        &self.traversal
    }
}

impl<'env, E: Environment> SearchAgent for Greedy<'env, E> {
    type Candidate = Path;

    fn remove_from_frontier(&mut self) -> Option<Path> {
        while let Some((path, h)) = self.frontier.pop() {
            if self.traversal.is_explored(path.terminal()) {
                self.traversal.statistics_mut().increment_stale_paths();
                continue;
            }
            self.traversal.statistics_mut().register_heuristic_value(h);
            return Some(path);
        }
        None
    }

    fn visit_neighbours(&mut self, path: &Path) -> Vec<Position> {
        self.traversal.visit(path)
    }

    fn update_frontier(&mut self, path: Path, neighbours: Vec<Position>) {
        let mut candidates = Vec::with_capacity(neighbours.len());
        for neighbour in neighbours {
            if self.traversal.is_cycle(&neighbour, &path) || self.traversal.is_explored(&neighbour)
            {
                trace!(neighbour = %neighbour, "pruned");
                self.traversal.statistics_mut().increment_pruned_paths();
                continue;
            }
            candidates.push(neighbour);
        }
        self.traversal
            .statistics_mut()
            .increment_generated_paths(candidates.len());

        let h_values = self
            .heuristic
            .evaluate_batch(&candidates, self.traversal.target());
        for (neighbour, h) in candidates.into_iter().zip(h_values) {
            self.frontier.push(path.extended(neighbour), h);
        }
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
