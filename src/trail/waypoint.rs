use std::cmp::Ordering;

//─────────────────────────────────────────────────────────────────────────────
// The tag vocabulary. Supplies are consumable units; obstacles are hazards
// that each cost one unit of a specific supply to pass.
//─────────────────────────────────────────────────────────────────────────────

/// Supply consumed to continue past any non-leaf waypoint.
pub const FOOD: &str = "food";
/// Supply consumed to cross one [`RIVER`].
pub const RAFT: &str = "raft";
/// Supply consumed to clear one [`FALLEN_TREE`].
pub const AXE: &str = "axe";
/// Obstacle overcome by one [`AXE`].
pub const FALLEN_TREE: &str = "fallen tree";
/// Obstacle overcome by one [`RAFT`].
pub const RIVER: &str = "river";

/// Returns true for tags that switch a trail map line into obstacle mode.
pub fn is_obstacle_tag(tag: &str) -> bool {
    matches!(tag, FALLEN_TREE | RIVER)
}

/// A labeled stop on the trail carrying the supplies a traveler can pick up
/// and the obstacles they must overcome.
///
/// Both tag sequences preserve insertion order and permit duplicates; each
/// duplicate unit is deposited or overcome independently. The label is the
/// sort key: ordering and equality are defined on it alone, so two
/// waypoints with the same label compare equal regardless of their tags.
#[derive(Debug, Clone)]
pub struct Waypoint {
    label: String,
    supplies: Vec<String>,
    obstacles: Vec<String>,
}

impl Waypoint {
    /// Creates a waypoint with no supplies or obstacles.
    pub fn new(label: impl Into<String>) -> Self {
        Waypoint {
            label: label.into(),
            supplies: Vec::new(),
            obstacles: Vec::new(),
        }
    }

    /// Appends a supply unit. Used during ingestion only.
    pub fn add_supply(&mut self, supply: impl Into<String>) {
        self.supplies.push(supply.into());
    }

    /// Appends an obstacle. Used during ingestion only.
    pub fn add_obstacle(&mut self, obstacle: impl Into<String>) {
        self.obstacles.push(obstacle.into());
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn supplies(&self) -> &[String] {
        &self.supplies
    }

    pub fn obstacles(&self) -> &[String] {
        &self.obstacles
    }
}

impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Waypoint {}

impl PartialOrd for Waypoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Waypoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label.cmp(&other.label)
    }
}
