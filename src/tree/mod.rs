// error module
mod error;
// ordered tree module
mod ordered_tree;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the tree module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::TreeError;
pub use ordered_tree::{InOrderIter, Node, OrderedTree, PostOrderIter, PreOrderIter};
