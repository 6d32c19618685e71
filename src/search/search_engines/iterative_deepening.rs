//! Iterative deepening depth first search

use crate::search::{
    search_engines::{SearchAgent, SearchResult, TerminationCondition, Traversal},
    Agent, Environment, Path, Position,
};
use std::collections::VecDeque;
use tracing::{info, trace};

/// Depth first search limited to paths of at most `bound` positions, restarted
/// from scratch with a bound one larger every time the frontier runs out. The
/// first solution is found with `bound` equal to the number of positions on a
/// shortest path.
///
/// Within one iteration a position only counts as explored for paths at least
/// as long as the one it was expanded through. Otherwise a position first
/// reached by a long detour would block a shorter path to it, and the search
/// could miss a solution that fits within the bound.
#[derive(Debug)]
pub struct IterativeDeepening<'env, E: Environment> {
    traversal: Traversal<'env, E>,
    frontier: VecDeque<Path>,
    bound: usize,
}

impl<'env, E: Environment> IterativeDeepening<'env, E> {
    pub fn new(environment: &'env mut E) -> Self {
        let traversal = Traversal::new(environment);
        let frontier = VecDeque::from([Path::new(traversal.initial_position().clone())]);
        Self {
            traversal,
            frontier,
            bound: 1,
        }
    }

    /// Maximum number of positions on a path in the current iteration.
    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn traversal(&self) -> &Traversal<'env, E> {
        &self.traversal
    }

    fn restart(&mut self) {
        self.frontier.clear();
        self.frontier
            .push_back(Path::new(self.traversal.initial_position().clone()));
        self.traversal.clear_visited();
    }
}

impl<'env, E: Environment> SearchAgent for IterativeDeepening<'env, E> {
    type Candidate = Path;

    fn remove_from_frontier(&mut self) -> Option<Path> {
        while let Some(path) = self.frontier.pop_front() {
            if self
                .traversal
                .is_explored_within(path.terminal(), path.len())
            {
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
        if path.len() >= self.bound {
            return;
        }
        let mut num_generated = 0;
        for neighbour in neighbours {
            if self.traversal.is_cycle(&neighbour, &path)
                || self
                    .traversal
                    .is_explored_within(&neighbour, path.len() + 1)
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

    /// Never gives up by itself, an unreachable target keeps the bound growing
    /// until `termination` stops the search.
    fn run_with(&mut self, termination: &mut TerminationCondition) -> SearchResult {
        self.bound = 1;
        while !self.reached_target() {
            self.restart();
            while !self.reached_target() && !self.frontier_is_empty() {
                if let Some(result) = termination.should_terminate() {
                    return result;
                }
                self.act();
                termination.record_step();
            }
            if !self.reached_target() {
                self.bound += 1;
                info!(bound = self.bound, "deepening");
            }
        }
        self.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environments::Connectivity;
    use crate::search::{position, search_engines::Bfs};
    use crate::test_utils::*;

    #[test]
    fn succeeds_at_shortest_path_length() {
        let mut room = grid(OPEN_3X3_TEXT);
        let mut agent = IterativeDeepening::new(&mut room);
        let result = agent.run();
        assert_eq!(agent.bound(), 5);
        assert_eq!(
            result.path().unwrap().positions(),
            &[
                position![0, 0],
                position![0, 1],
                position![0, 2],
                position![1, 2],
                position![2, 2],
            ]
        );
        drop(agent);
        assert_eq!(room.visited_positions().len(), 25);
    }

    #[test]
    fn bound_matches_bfs_path_length() {
        for text in [OPEN_3X3_TEXT, GREEDY_TRAP_TEXT, CORRIDOR_TEXT, DIAGONAL_DETOUR_TEXT] {
            for connectivity in [Connectivity::Four, Connectivity::Eight] {
                let mut room = grid(text).with_connectivity(connectivity);
                let shortest = Bfs::new(&mut room).run().path().unwrap().len();

                let mut room = grid(text).with_connectivity(connectivity);
                let mut agent = IterativeDeepening::new(&mut room);
                let path = agent.run().path().unwrap().clone();
                assert_eq!(agent.bound(), shortest);
                assert_eq!(path.len(), shortest);
                assert!(!path.has_repeated_positions());
            }
        }
    }

    #[test]
    fn no_solution_below_shortest_length() {
        let mut room = grid(GREEDY_TRAP_TEXT);
        let mut agent = IterativeDeepening::new(&mut room);
        // One iteration per bound below 9 positions, stopped well before the
        // bound could reach 9
        let mut termination = TerminationCondition::new(Some(60), None);
        assert_eq!(
            agent.run_with(&mut termination),
            SearchResult::StepLimitReached
        );
        assert!(agent.bound() < 9);
        assert!(!agent.reached_target());
    }

    #[test]
    fn unreachable_target_needs_a_limit() {
        let mut room = grid(WALLED_OFF_TEXT);
        let mut agent = IterativeDeepening::new(&mut room);
        let mut termination = TerminationCondition::new(Some(100), None);
        assert_eq!(
            agent.run_with(&mut termination),
            SearchResult::StepLimitReached
        );
        assert!(agent.bound() > 3);
    }
}
