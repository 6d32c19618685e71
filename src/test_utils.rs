use crate::environments::GridRoom;

pub const OPEN_3X3_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/grids/open-3x3.txt"
));

/// The heuristic pulls towards a dead end along the middle, the shortest
/// path goes around the top and down the right edge.
pub const GREEDY_TRAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/grids/greedy-trap.txt"
));

pub const WALLED_OFF_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/grids/walled-off.txt"
));

pub const CORRIDOR_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/grids/corridor.txt"
));

pub const DIAGONAL_DETOUR_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/grids/diagonal-detour.txt"
));

pub fn grid(text: &str) -> GridRoom {
    GridRoom::from_text(text).expect("Failed to parse test grid")
}
