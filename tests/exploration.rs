use pretty_assertions::assert_eq;
use trail_pathfinder::trail::{
    PathExplorer, TrailPath, Waypoint, AXE, FALLEN_TREE, FOOD, RAFT, RIVER,
};
use trail_pathfinder::tree::OrderedTree;

fn waypoint(label: &str, supplies: &[&str], obstacles: &[&str]) -> Waypoint {
    let mut waypoint = Waypoint::new(label);
    for supply in supplies {
        waypoint.add_supply(*supply);
    }
    for obstacle in obstacles {
        waypoint.add_obstacle(*obstacle);
    }
    waypoint
}

fn mountain_from(waypoints: Vec<Waypoint>) -> OrderedTree<Waypoint> {
    let mut mountain = OrderedTree::new();
    for waypoint in waypoints {
        mountain.insert(waypoint);
    }
    mountain
}

fn labels(paths: &[TrailPath]) -> Vec<Vec<&str>> {
    paths
        .iter()
        .map(|path| path.iter().map(String::as_str).collect())
        .collect()
}

// ─── Core survival scenarios ─────────────────────────────────────────────────

// Shape used by several tests (labels chosen so insertion builds it):
//
//         M
//        / \
//       F   S
//      /     \
//     D       X

#[test]
fn only_the_prepared_branch_reaches_the_bottom() {
    // The raft needed for F's river only appears further down at D, so the
    // left branch dies at F. The right branch picks up the axe at S right
    // before the fallen tree there.
    let mountain = mountain_from(vec![
        waypoint("M", &[FOOD], &[]),
        waypoint("F", &[FOOD], &[RIVER]),
        waypoint("D", &[RAFT], &[]),
        waypoint("S", &[FOOD, AXE], &[FALLEN_TREE]),
        waypoint("X", &[], &[]),
    ]);

    let paths = PathExplorer::explore(&mountain);
    assert_eq!(labels(&paths), vec![vec!["M", "S", "X"]]);
}

#[test]
fn a_summit_without_food_abandons_every_descent() {
    // The summit is not a leaf, so passing it costs one food unit the
    // traveler never gets.
    let mountain = mountain_from(vec![
        waypoint("M", &[], &[]),
        waypoint("F", &[FOOD], &[RIVER]),
        waypoint("D", &[RAFT], &[]),
        waypoint("S", &[FOOD, AXE], &[FALLEN_TREE]),
        waypoint("X", &[], &[]),
    ]);

    assert!(PathExplorer::explore(&mountain).is_empty());
}

#[test]
fn every_prepared_branch_is_reported_in_dfs_order() {
    let mountain = mountain_from(vec![
        waypoint("M", &[FOOD, FOOD], &[]),
        waypoint("F", &[], &[]),
        waypoint("D", &[], &[]),
        waypoint("S", &[], &[]),
        waypoint("X", &[], &[]),
    ]);

    let paths = PathExplorer::explore(&mountain);
    assert_eq!(
        labels(&paths),
        vec![vec!["M", "F", "D"], vec!["M", "S", "X"]]
    );
}

// ─── Leaf handling ───────────────────────────────────────────────────────────

#[test]
fn single_waypoint_is_its_own_descent() {
    // A lone summit is a leaf: the food toll is waived.
    let lone = mountain_from(vec![waypoint("A", &[], &[])]);
    assert_eq!(labels(&PathExplorer::explore(&lone)), vec![vec!["A"]]);
}

#[test]
fn a_lone_summit_with_an_unpayable_obstacle_is_never_accepted() {
    let blocked = mountain_from(vec![waypoint("A", &[], &[RIVER])]);
    assert!(PathExplorer::explore(&blocked).is_empty());
}

#[test]
fn a_waypoints_own_supplies_are_deposited_before_its_obstacles() {
    // The deposit happens first, so a leaf carrying its own raft crosses
    // its own river.
    let self_sufficient = mountain_from(vec![waypoint("A", &[RAFT], &[RIVER])]);
    assert_eq!(
        labels(&PathExplorer::explore(&self_sufficient)),
        vec![vec!["A"]]
    );
}

#[test]
fn shallow_surviving_leaves_are_discarded() {
    // F is a survivable leaf at depth 1, but X sits at depth 2, so only
    // the deeper descent counts.
    let mountain = mountain_from(vec![
        waypoint("M", &[FOOD, FOOD], &[]),
        waypoint("F", &[], &[]),
        waypoint("S", &[], &[]),
        waypoint("X", &[], &[]),
    ]);

    let paths = PathExplorer::explore(&mountain);
    assert_eq!(labels(&paths), vec![vec!["M", "S", "X"]]);
}

// ─── Resource semantics ──────────────────────────────────────────────────────

#[test]
fn sibling_branches_do_not_observe_each_others_consumption() {
    // One raft is on offer at the summit and both leaves need it. Each
    // branch must see the raft untouched by the other.
    let mountain = mountain_from(vec![
        waypoint("M", &[FOOD, RAFT], &[]),
        waypoint("F", &[], &[RIVER]),
        waypoint("S", &[], &[RIVER]),
    ]);

    let paths = PathExplorer::explore(&mountain);
    assert_eq!(labels(&paths), vec![vec!["M", "F"], vec!["M", "S"]]);
}

#[test]
fn duplicate_supply_units_are_consumed_independently() {
    // Two food units carry the traveler past two non-leaf waypoints.
    let provisioned = mountain_from(vec![
        waypoint("A", &[FOOD, FOOD], &[]),
        waypoint("B", &[], &[]),
        waypoint("C", &[], &[]),
    ]);
    assert_eq!(
        labels(&PathExplorer::explore(&provisioned)),
        vec![vec!["A", "B", "C"]]
    );

    // With a single unit the second toll is unpayable.
    let underfed = mountain_from(vec![
        waypoint("A", &[FOOD], &[]),
        waypoint("B", &[], &[]),
        waypoint("C", &[], &[]),
    ]);
    assert!(PathExplorer::explore(&underfed).is_empty());
}

#[test]
fn obstacles_are_evaluated_in_recorded_order() {
    // B's fallen tree comes before its river; without an axe the branch
    // dies there even though the river alone would be crossable.
    let blocked = mountain_from(vec![
        waypoint("A", &[FOOD, RAFT], &[]),
        waypoint("B", &[], &[FALLEN_TREE, RIVER]),
    ]);
    assert!(PathExplorer::explore(&blocked).is_empty());

    let passable = mountain_from(vec![
        waypoint("A", &[FOOD, RAFT], &[]),
        waypoint("B", &[], &[RIVER]),
    ]);
    assert_eq!(
        labels(&PathExplorer::explore(&passable)),
        vec![vec!["A", "B"]]
    );
}

// ─── Edges ───────────────────────────────────────────────────────────────────

#[test]
fn exploring_an_empty_mountain_yields_nothing() {
    let empty: OrderedTree<Waypoint> = OrderedTree::new();
    assert!(PathExplorer::explore(&empty).is_empty());
}

#[test]
fn accepted_paths_outlive_tree_mutation() {
    let mut mountain = mountain_from(vec![
        waypoint("A", &[FOOD], &[]),
        waypoint("B", &[], &[]),
    ]);

    let paths = PathExplorer::explore(&mountain);
    mountain.clear();

    assert_eq!(labels(&paths), vec![vec!["A", "B"]]);
}
