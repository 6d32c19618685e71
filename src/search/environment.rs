use crate::search::{Action, Path, Percept};

/// An [`Environment`] knows the topology the agents search over. Agents never
/// inspect it directly, they only see the percepts it hands back.
pub trait Environment {
    /// The percept before any action has been taken, positioned at the start.
    fn initial_percepts(&mut self) -> Percept;

    /// Move to `action.visit_position` and report what can be reached from
    /// there. Must be deterministic given the same action and internal state.
    fn signal(&mut self, action: Action) -> Percept;

    /// Show the final solution of a search. Only some searches call this, and
    /// the default implementation does nothing.
    fn present_solution(&mut self, _solution: &Path) {}
}

/// An [`Agent`] acts on an environment it holds a reference to.
pub trait Agent {
    fn act(&mut self);
}
