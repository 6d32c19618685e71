use crate::search::{Path, Position};

/// What an agent observes after each exchange with the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Percept {
    /// The position the environment last moved to.
    pub current_position: Position,
    pub target: Position,
    /// Positions reachable in one step from `current_position`. The
    /// environment is responsible for excluding blocked and out of bounds
    /// positions.
    pub neighbours: Vec<Position>,
}

impl Percept {
    pub fn new(current_position: Position, target: Position, neighbours: Vec<Position>) -> Self {
        Self {
            current_position,
            target,
            neighbours,
        }
    }

    pub fn is_at_target(&self) -> bool {
        self.current_position == self.target
    }

    /// Panics if the positions in the percept do not share a dimension. A
    /// percept like that can only come from a broken environment, and there
    /// is nothing sensible a search can do with it.
    pub(crate) fn check_well_formed(&self) {
        let dimensions = self.current_position.dimensions();
        assert_eq!(
            self.target.dimensions(),
            dimensions,
            "Malformed percept: target {} does not match the dimension of current position {}",
            self.target,
            self.current_position
        );
        for neighbour in &self.neighbours {
            assert_eq!(
                neighbour.dimensions(),
                dimensions,
                "Malformed percept: neighbour {} does not match the dimension of current position {}",
                neighbour,
                self.current_position
            );
        }
    }
}

/// A request from an agent to the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub visit_position: Position,
    /// The path that led to `visit_position`. Only used by environments that
    /// want to render the search, searches never depend on it.
    pub path: Path,
}

impl Action {
    /// Visit the terminal position of `path`.
    pub fn visit(path: &Path) -> Self {
        Self {
            visit_position: path.terminal().clone(),
            path: path.clone(),
        }
    }
}
