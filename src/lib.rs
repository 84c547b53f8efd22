//! Survivable-descent search over an order-statistic binary search tree.
//!
//! The crate is split into three layers:
//!
//! - [`tree`] provides [`OrderedTree`], a generic binary search tree with
//!   subtree-size and height augmentation. Rank-based selection,
//!   predecessor/successor queries, balanced bulk construction, and three
//!   traversal orders all run in O(height) or better.
//! - [`trail`] provides the domain model: [`Waypoint`] records carrying
//!   supplies and obstacles, the traveler's [`trail::Pack`], and
//!   [`PathExplorer`], a depth-first search that collects every path from
//!   the summit to a deepest leaf along which the traveler survives.
//! - [`app`] is the command-line glue: argument parsing, trail map
//!   ingestion, and reporting of the accepted descents.

pub mod app;
pub mod trail;
pub mod tree;

pub use trail::{PathExplorer, TrailPath, Waypoint};
pub use tree::OrderedTree;
