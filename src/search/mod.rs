mod config;
mod environment;
pub mod heuristics;
mod path;
mod percept;
mod position;
pub mod search_engines;

pub use config::{AgentConfig, ConfigError};
pub use environment::{Agent, Environment};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use path::{CostedPath, Path};
pub use percept::{Action, Percept};
#[allow(unused_imports)]
pub(crate) use position::position;
pub use position::{Coordinates, Position};
pub use search_engines::{AgentName, SearchAgent, SearchResult, TerminationCondition};
