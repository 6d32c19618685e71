//! Depth first branch and bound

use crate::search::{
    search_engines::{SearchAgent, SearchResult, TerminationCondition, Traversal},
    Agent, CostedPath, Environment, Heuristic, HeuristicValue, Path, Position,
};
use tracing::{info, trace};

/// Depth first branch and bound. Keeps searching after the first solution,
/// cutting every branch whose cost plus heuristic estimate cannot beat the
/// best solution found so far. Unlike the other searches it does not prune
/// positions visited by other branches, as a later branch may reach them more
/// cheaply, only positions already on the branch itself.
#[derive(Debug)]
pub struct BranchAndBound<'env, E: Environment> {
    traversal: Traversal<'env, E>,
    heuristic: Box<dyn Heuristic>,
    /// Paths are popped from the back, together with their cost.
    frontier: Vec<CostedPath>,
    bound: HeuristicValue,
    best_path: Option<CostedPath>,
}

impl<'env, E: Environment> BranchAndBound<'env, E> {
    /// Only solutions strictly cheaper than `initial_bound` are found.
    ///
    /// Panics if `initial_bound` is NaN or not positive.
    pub fn new(
        environment: &'env mut E,
        heuristic: Box<dyn Heuristic>,
        initial_bound: HeuristicValue,
    ) -> Self {
        assert!(
            !initial_bound.into_inner().is_nan() && initial_bound > HeuristicValue::from(0.),
            "Initial bound must be positive, got {}",
            initial_bound
        );
        let traversal = Traversal::new(environment);
        let frontier = vec![CostedPath::start(traversal.initial_position().clone())];
        info!(initial_bound = initial_bound.into_inner());
        Self {
            traversal,
            heuristic,
            frontier,
            bound: initial_bound,
            best_path: None,
        }
    }

    pub fn bound(&self) -> HeuristicValue {
        self.bound
    }

    pub fn best_path(&self) -> Option<&Path> {
        self.best_path.as_ref().map(|best| &best.path)
    }

    pub fn best_cost(&self) -> Option<HeuristicValue> {
        self.best_path.as_ref().map(|best| best.cost)
    }

    pub fn traversal(&self) -> &Traversal<'env, E> {
        &self.traversal
    }
}

impl<'env, E: Environment> SearchAgent for BranchAndBound<'env, E> {
    type Candidate = CostedPath;

    fn remove_from_frontier(&mut self) -> Option<CostedPath> {
        self.frontier.pop()
    }

    fn visit_neighbours(&mut self, candidate: &CostedPath) -> Vec<Position> {
        let h = self
            .heuristic
            .evaluate(candidate.path.terminal(), self.traversal.target());
        if candidate.cost + h >= self.bound {
            trace!(position = %candidate.path.terminal(), cost = candidate.cost.into_inner(), "cut");
            self.traversal.statistics_mut().increment_pruned_paths();
            return vec![];
        }

        let neighbours = self.traversal.visit(&candidate.path);
        if self.traversal.reached_target() {
            // The cut above guarantees the new solution is strictly cheaper
            self.bound = candidate.cost;
            self.best_path = Some(candidate.clone());
            info!(
                cost = candidate.cost.into_inner(),
                path_length = candidate.path.len(),
                "found better solution"
            );
            self.traversal.statistics_mut().register_bound(self.bound);
            // Any extension would cost more than the new bound
            return vec![];
        }
        neighbours
    }

    fn update_frontier(&mut self, candidate: CostedPath, neighbours: Vec<Position>) {
        let mut num_generated = 0;
        for neighbour in neighbours {
            if self.traversal.is_cycle(&neighbour, &candidate.path) {
                self.traversal.statistics_mut().increment_pruned_paths();
                continue;
            }
            self.frontier.push(candidate.extended(neighbour));
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
        self.traversal.statistics().finalise_search();
        match &self.best_path {
            Some(best) => SearchResult::Success(best.path.clone()),
            None => SearchResult::Unsolvable,
        }
    }

    /// Only an exhausted frontier proves the best solution is optimal, so
    /// reaching the target does not stop the search.
    fn run_with(&mut self, termination: &mut TerminationCondition) -> SearchResult {
        if self.traversal.reached_target() {
            self.best_path = Some(CostedPath::start(
                self.traversal.initial_position().clone(),
            ));
            return self.outcome();
        }
        while !self.frontier_is_empty() {
            if let Some(result) = termination.should_terminate() {
                return result;
            }
            self.act();
            termination.record_step();
        }
        if let Some(best) = &self.best_path {
            let best = best.path.clone();
            self.traversal.environment_mut().present_solution(&best);
        }
        self.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environments::{Connectivity, GridRoom};
    use crate::search::{heuristics::StraightLineDistance, position};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn new_bnb(room: &mut GridRoom, bound: f64) -> BranchAndBound<'_, GridRoom> {
        BranchAndBound::new(room, Box::new(StraightLineDistance::new()), bound.into())
    }

    #[test]
    fn finds_optimal_path_on_open_grid() {
        let mut room = grid(OPEN_3X3_TEXT);
        let result = new_bnb(&mut room, 100.).run();
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
        assert_eq!(room.visited_positions().len(), 15);
        assert_eq!(room.presented_solution(), result.path());
    }

    #[test]
    fn bound_never_increases() {
        let mut room = grid(OPEN_3X3_TEXT);
        let mut bnb = new_bnb(&mut room, 100.);
        let mut bounds = vec![bnb.bound()];
        while !bnb.frontier_is_empty() {
            bnb.act();
            if bnb.bound() != *bounds.last().unwrap() {
                bounds.push(bnb.bound());
            }
        }
        assert_eq!(
            bounds,
            vec![
                HeuristicValue::from(100.),
                HeuristicValue::from(8.),
                HeuristicValue::from(6.),
                HeuristicValue::from(4.),
            ]
        );
        assert_eq!(bnb.best_cost(), Some(HeuristicValue::from(4.)));
    }

    #[test]
    fn revisits_positions_across_branches() {
        let mut room = grid(OPEN_3X3_TEXT);
        new_bnb(&mut room, 100.).run();
        let visited = room.visited_positions();
        let unique: std::collections::HashSet<_> = visited.iter().collect();
        assert!(unique.len() < visited.len());
    }

    #[test]
    fn avoids_greedy_trap() {
        let mut room = grid(GREEDY_TRAP_TEXT);
        let mut bnb = new_bnb(&mut room, 100.);
        let path = bnb.run().path().unwrap().clone();
        assert_eq!(path.num_edges(), 8);
        assert_eq!(bnb.bound(), HeuristicValue::from(8.));
    }

    #[test]
    fn diagonal_solution_cost_is_optimal() {
        let mut room = grid(DIAGONAL_DETOUR_TEXT).with_connectivity(Connectivity::Eight);
        let mut bnb = new_bnb(&mut room, 100.);
        let path = bnb.run().path().unwrap().clone();
        assert_approx_eq!(path.cost(), 2.0 + 2f64.sqrt());
        assert_approx_eq!(bnb.best_cost().unwrap().into_inner(), path.cost());
    }

    #[test]
    fn tight_bound_finds_nothing() {
        let mut room = grid(OPEN_3X3_TEXT);
        let mut bnb = new_bnb(&mut room, 4.);
        assert_eq!(bnb.run(), SearchResult::Unsolvable);
        assert_eq!(bnb.best_path(), None);
        assert_eq!(bnb.bound(), HeuristicValue::from(4.));
        drop(bnb);
        assert_eq!(room.presented_solution(), None);
        assert_eq!(room.visited_positions().len(), 5);
    }

    #[test]
    fn solution_strictly_below_initial_bound() {
        let mut room = grid(OPEN_3X3_TEXT);
        let mut bnb = new_bnb(&mut room, 4.01);
        let result = bnb.run();
        assert!(result.is_success());
        assert!(bnb.best_cost().unwrap() < HeuristicValue::from(4.01));
    }

    #[test]
    #[should_panic(expected = "Initial bound must be positive")]
    fn nan_initial_bound_panics() {
        let mut room = grid(OPEN_3X3_TEXT);
        new_bnb(&mut room, f64::NAN);
    }

    #[test]
    #[should_panic(expected = "Initial bound must be positive")]
    fn zero_initial_bound_panics() {
        let mut room = grid(OPEN_3X3_TEXT);
        new_bnb(&mut room, 0.);
    }

    #[test]
    fn unreachable_target_exhausts_frontier() {
        let mut room = grid(WALLED_OFF_TEXT);
        assert_eq!(new_bnb(&mut room, 100.).run(), SearchResult::Unsolvable);
        assert_eq!(room.visited_positions().len(), 3);
    }
}
