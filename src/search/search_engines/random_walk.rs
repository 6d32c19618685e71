//! Random walk

use crate::search::{
    search_engines::{SearchAgent, SearchResult, Traversal},
    Environment, Path, Position,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

/// Follows a single path, stepping to a uniformly random neighbour not yet on
/// the path. Fails as soon as every neighbour of the current position is
/// already on the path.
#[derive(Debug)]
pub struct RandomWalk<'env, E: Environment> {
    traversal: Traversal<'env, E>,
    frontier: Option<Path>,
    rng: StdRng,
}

impl<'env, E: Environment> RandomWalk<'env, E> {
    pub fn new(environment: &'env mut E, seed: u64) -> Self {
        let traversal = Traversal::new(environment);
        let frontier = Some(Path::new(traversal.initial_position().clone()));
        Self {
            traversal,
            frontier,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn traversal(&self) -> &Traversal<'env, E> {
        &self.traversal
    }
}

impl<'env, E: Environment> SearchAgent for RandomWalk<'env, E> {
    type Candidate = Path;

    fn remove_from_frontier(&mut self) -> Option<Path> {
        self.frontier.take()
    }

    fn visit_neighbours(&mut self, path: &Path) -> Vec<Position> {
        self.traversal.visit(path)
    }

    fn update_frontier(&mut self, path: Path, neighbours: Vec<Position>) {
        let candidates: Vec<Position> = neighbours
            .into_iter()
            .filter(|neighbour| !self.traversal.is_cycle(neighbour, &path))
            .collect();
        match candidates.choose(&mut self.rng) {
            Some(next) => {
                self.frontier = Some(path.extended(next.clone()));
                self.traversal.statistics_mut().increment_generated_paths(1);
            }
            None => debug!(position = %path.terminal(), "dead end"),
        }
    }

    fn frontier_is_empty(&self) -> bool {
        self.frontier.is_none()
    }

    fn reached_target(&self) -> bool {
        self.traversal.reached_target()
    }

    fn outcome(&self) -> SearchResult {
        self.traversal.outcome()
    }
}
