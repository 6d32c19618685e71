//! Environments the agents can be run against.

mod grid_room;

pub use grid_room::{Cell, Connectivity, GridError, GridRoom};
