use super::pack::Pack;
use super::waypoint::{Waypoint, AXE, FALLEN_TREE, FOOD, RAFT, RIVER};
use crate::tree::{Node, OrderedTree};

/// An accepted descent: the waypoint labels from the summit to a deepest
/// leaf, copied out at acceptance time so the path outlives later tree
/// mutation.
pub type TrailPath = Vec<String>;

/// `PathExplorer` walks an [`OrderedTree`] of waypoints depth-first and
/// collects every path to a deepest leaf that a traveler survives.
///
/// The traveler starts empty-handed at the root. At each waypoint they
/// first pick up everything on offer, then pay the tolls: one `food` unit
/// to continue past any non-leaf waypoint, one `axe` per fallen tree, and
/// one `raft` per river, in the order the obstacles were recorded. A
/// missing unit abandons the branch immediately. Only leaves at the
/// maximum root-to-leaf depth count as completed descents; shallower
/// leaves are discarded even when survived.
pub struct PathExplorer;

impl PathExplorer {
    /// Runs one full exploration and returns the accepted descents in the
    /// order the depth-first walk produced them, left subtree before right
    /// at every branch. Performs no I/O.
    pub fn explore(mountain: &OrderedTree<Waypoint>) -> Vec<TrailPath> {
        let mut accepted = Vec::new();
        let Some(root) = mountain.root() else {
            return accepted;
        };
        // Depth is measured in edges with the root at depth 0, so the
        // deepest leaves sit at height - 1. The cached height makes this
        // O(1).
        let max_depth = mountain.height() - 1;
        let mut path = Vec::new();
        let mut pack = Pack::new();
        Self::descend(root, &mut path, &mut pack, 0, max_depth, &mut accepted);
        accepted
    }

    /// Visits `node`, then its subtrees. The path and pack are shared
    /// mutable state; the snapshot taken before the deposit is restored on
    /// the way out, so sibling branches never observe each other's
    /// consumption.
    fn descend<'a>(
        node: &'a Node<Waypoint>,
        path: &mut Vec<&'a Waypoint>,
        pack: &mut Pack,
        depth: usize,
        max_depth: usize,
        accepted: &mut Vec<TrailPath>,
    ) {
        let stop = node.value();
        path.push(stop);
        let snapshot = pack.clone();
        pack.stock_from(stop.supplies());

        let is_leaf = node.is_leaf();
        if Self::survives(stop, pack, is_leaf) {
            if is_leaf {
                if depth == max_depth {
                    accepted.push(path.iter().map(|visited| visited.label().to_owned()).collect());
                }
            } else {
                if let Some(left) = node.left() {
                    Self::descend(left, path, pack, depth + 1, max_depth, accepted);
                }
                if let Some(right) = node.right() {
                    Self::descend(right, path, pack, depth + 1, max_depth, accepted);
                }
            }
        }

        *pack = snapshot;
        path.pop();
    }

    /// Applies the survival rules at one waypoint, consuming from `pack` as
    /// tolls are paid. Evaluation short-circuits on the first unpayable
    /// toll, leaving later obstacles unevaluated.
    fn survives(stop: &Waypoint, pack: &mut Pack, is_leaf: bool) -> bool {
        if !is_leaf && !pack.consume(FOOD) {
            return false;
        }
        for obstacle in stop.obstacles() {
            let required = match obstacle.as_str() {
                FALLEN_TREE => AXE,
                RIVER => RAFT,
                // Tags outside the hazard vocabulary impose no toll.
                _ => continue,
            };
            if !pack.consume(required) {
                return false;
            }
        }
        true
    }
}
