// waypoint module
mod waypoint;
// pack module
mod pack;
// explorer module
mod explorer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the trail module.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::{PathExplorer, TrailPath};
pub use pack::Pack;
pub use waypoint::{is_obstacle_tag, Waypoint, AXE, FALLEN_TREE, FOOD, RAFT, RIVER};
