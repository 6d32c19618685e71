use crate::search::{
    search_engines::{
        AStar, Bfs, BranchAndBound, Dfs, Greedy, IterativeDeepening, RandomWalk,
        TerminationCondition,
    },
    Agent, AgentConfig, Environment, Path, Position,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search reached the target, along the given path
    Success(Path),
    /// The frontier ran out before the target was reached
    Unsolvable,
    /// A caller-imposed step limit stopped the search
    StepLimitReached,
    /// A caller-imposed time limit stopped the search
    TimeLimitExceeded,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }
}

/// The hooks a frontier policy provides. Every policy gets the same three
/// step action cycle (see the [`Agent`] implementation below): remove a
/// candidate from the frontier, visit it, then update the frontier with what
/// the visit revealed.
pub trait SearchAgent {
    /// What the frontier holds, a plain [`Path`] for most policies.
    type Candidate;

    /// Take the next candidate to expand, `None` if there is nothing left to
    /// expand.
    fn remove_from_frontier(&mut self) -> Option<Self::Candidate>;

    /// Signal the environment to visit the candidate's terminal position and
    /// return the neighbours viable from there.
    fn visit_neighbours(&mut self, candidate: &Self::Candidate) -> Vec<Position>;

    /// Decide which extensions of the candidate to insert, and where.
    fn update_frontier(&mut self, candidate: Self::Candidate, neighbours: Vec<Position>);

    fn frontier_is_empty(&self) -> bool;

    /// Whether the most recent percept reports the agent at the target.
    fn reached_target(&self) -> bool;

    /// The result of the search in its current state.
    fn outcome(&self) -> SearchResult;

    /// Act until the target is reached or the frontier is exhausted, checking
    /// `termination` before every step.
    fn run_with(&mut self, termination: &mut TerminationCondition) -> SearchResult {
        while !self.reached_target() && !self.frontier_is_empty() {
            if let Some(result) = termination.should_terminate() {
                return result;
            }
            Agent::act(self);
            termination.record_step();
        }
        self.outcome()
    }

    /// Run without any limit. Against an unreachable target some policies
    /// never return, use [`SearchAgent::run_with`] to bound them.
    fn run(&mut self) -> SearchResult {
        self.run_with(&mut TerminationCondition::unlimited())
    }
}

impl<A: SearchAgent + ?Sized> Agent for A {
    fn act(&mut self) {
        if let Some(candidate) = self.remove_from_frontier() {
            let neighbours = self.visit_neighbours(&candidate);
            self.update_frontier(candidate, neighbours);
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AgentName {
    #[clap(help = "Walk to a random unvisited neighbour until stuck or at the target.")]
    RandomWalk,
    #[clap(help = "Breadth first search, finds a path with the fewest moves.")]
    Bfs,
    #[clap(help = "Depth first search.")]
    Dfs,
    #[clap(help = "Greedy best first search on the heuristic alone.")]
    Greedy,
    #[clap(help = "A* search, optimal with an admissible heuristic.")]
    AStar,
    #[clap(help = "Depth first branch and bound, starting from the initial bound.")]
    BranchAndBound,
    #[clap(help = "Iterative deepening depth first search.")]
    IterativeDeepening,
}

impl AgentName {
    /// Build the selected agent on `environment` and run it with the limits
    /// in `config`.
    pub fn run<E: Environment>(&self, environment: &mut E, config: &AgentConfig) -> SearchResult {
        let mut termination = config.termination_condition();
        match self {
            AgentName::RandomWalk => {
                RandomWalk::new(environment, config.seed).run_with(&mut termination)
            }
            AgentName::Bfs => Bfs::new(environment).run_with(&mut termination),
            AgentName::Dfs => Dfs::new(environment).run_with(&mut termination),
            AgentName::Greedy => {
                Greedy::new(environment, config.heuristic.create()).run_with(&mut termination)
            }
            AgentName::AStar => {
                AStar::new(environment, config.heuristic.create()).run_with(&mut termination)
            }
            AgentName::BranchAndBound => BranchAndBound::new(
                environment,
                config.heuristic.create(),
                config.initial_bound.into(),
            )
            .run_with(&mut termination),
            AgentName::IterativeDeepening => {
                IterativeDeepening::new(environment).run_with(&mut termination)
            }
        }
    }
}
