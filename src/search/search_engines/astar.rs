//! A* search

use crate::search::{
    search_engines::{HeapFrontier, SearchAgent, SearchResult, Traversal},
    CostedPath, Environment, Heuristic, HeuristicValue, Position,
};
use tracing::trace;

/// A* search. The frontier is ordered by `f = g + h`, where `g` is the cost of
/// the path so far and `h` the heuristic estimate from its terminal position.
/// With a consistent heuristic, such as the straight-line distance, the first
/// path to reach the target is a cheapest one.
#[derive(Debug)]
pub struct AStar<'env, E: Environment> {
    traversal: Traversal<'env, E>,
    heuristic: Box<dyn Heuristic>,
    frontier: HeapFrontier<CostedPath>,
}

impl<'env, E: Environment> AStar<'env, E> {
    pub fn new(environment: &'env mut E, mut heuristic: Box<dyn Heuristic>) -> Self {
        let traversal = Traversal::new(environment);
        let start = CostedPath::start(traversal.initial_position().clone());
        let f = start.cost + heuristic.evaluate(start.path.terminal(), traversal.target());

        let mut frontier = HeapFrontier::new();
        frontier.push(start, f);

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

impl<'env, E: Environment> SearchAgent for AStar<'env, E> {
    type Candidate = CostedPath;

    fn remove_from_frontier(&mut self) -> Option<CostedPath> {
        // The f value has served its purpose once the entry is popped
        while let Some((candidate, _f)) = self.frontier.pop() {
            if self.traversal.is_explored(candidate.path.terminal()) {
                self.traversal.statistics_mut().increment_stale_paths();
                continue;
            }
            return Some(candidate);
        }
        None
    }

    fn visit_neighbours(&mut self, candidate: &CostedPath) -> Vec<Position> {
        self.traversal.visit(&candidate.path)
    }

    fn update_frontier(&mut self, candidate: CostedPath, neighbours: Vec<Position>) {
        let mut num_generated = 0;
        for neighbour in neighbours {
            if self.traversal.is_cycle(&neighbour, &candidate.path)
                || self.traversal.is_explored(&neighbour)
            {
                trace!(neighbour = %neighbour, "pruned");
                self.traversal.statistics_mut().increment_pruned_paths();
                continue;
            }
            let h = self.heuristic.evaluate(&neighbour, self.traversal.target());
            self.traversal.statistics_mut().register_heuristic_value(h);
            let extended = candidate.extended(neighbour);
            let f: HeuristicValue = extended.cost + h;
            self.frontier.push(extended, f);
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
    use crate::environments::{Connectivity, GridRoom};
    use crate::search::{
        heuristics::{StraightLineDistance, ZeroHeuristic},
        position,
        search_engines::Greedy,
    };
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn new_astar(room: &mut GridRoom) -> AStar<'_, GridRoom> {
        AStar::new(room, Box::new(StraightLineDistance::new()))
    }

    #[test]
    fn optimal_on_open_grid() {
        let mut room = grid(OPEN_3X3_TEXT);
        let result = new_astar(&mut room).run();
        assert_eq!(
            result.path().unwrap().positions(),
            &[
                position![0, 0],
                position![1, 0],
                position![1, 1],
                position![2, 1],
                position![2, 2],
            ]
        );
        assert_eq!(room.visited_positions().len(), 9);
    }

    #[test]
    fn never_worse_than_greedy() {
        for text in [OPEN_3X3_TEXT, GREEDY_TRAP_TEXT, DIAGONAL_DETOUR_TEXT] {
            for connectivity in [Connectivity::Four, Connectivity::Eight] {
                let mut room = grid(text).with_connectivity(connectivity);
                let astar_cost = new_astar(&mut room).run().path().unwrap().cost();
                let mut room = grid(text).with_connectivity(connectivity);
                let greedy_cost = Greedy::new(&mut room, Box::new(StraightLineDistance::new()))
                    .run()
                    .path()
                    .unwrap()
                    .cost();
                assert!(astar_cost <= greedy_cost + 1e-9);
            }
        }
    }

    #[test]
    fn avoids_greedy_trap() {
        let mut room = grid(GREEDY_TRAP_TEXT);
        let path = new_astar(&mut room).run().path().unwrap().clone();
        assert_eq!(path.num_edges(), 8);
        assert_approx_eq!(path.cost(), 8.0);
    }

    #[test]
    fn diagonal_moves_cost_their_length() {
        let mut room = grid(DIAGONAL_DETOUR_TEXT).with_connectivity(Connectivity::Eight);
        let path = new_astar(&mut room).run().path().unwrap().clone();
        assert_eq!(
            path.positions(),
            &[position![0, 0], position![1, 0], position![2, 1], position![2, 2]]
        );
        assert_approx_eq!(path.cost(), 2.0 + 2f64.sqrt());
    }

    #[test]
    fn zero_heuristic_is_uniform_cost() {
        let mut room = grid(GREEDY_TRAP_TEXT);
        let path = AStar::new(&mut room, Box::new(ZeroHeuristic::new()))
            .run()
            .path()
            .unwrap()
            .clone();
        assert_approx_eq!(path.cost(), 8.0);
    }

    #[test]
    fn path_cost_never_decreases() {
        let mut room = grid(GREEDY_TRAP_TEXT);
        let path = new_astar(&mut room).run().path().unwrap().clone();
        let mut previous = 0.0;
        for prefix_length in 1..=path.len() {
            let prefix = crate::search::Path::from_positions(path[..prefix_length].to_vec()).unwrap();
            assert!(prefix.cost() >= previous);
            previous = prefix.cost();
        }
    }

    #[test]
    fn unreachable_target_exhausts_frontier() {
        let mut room = grid(WALLED_OFF_TEXT);
        let mut astar = new_astar(&mut room);
        assert_eq!(astar.run(), SearchResult::Unsolvable);
        assert_eq!(astar.traversal().statistics().expanded_nodes(), 3);
    }
}
