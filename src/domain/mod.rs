//! Domain layer: the balanced tree and its node type
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod render;
pub mod rotation;
pub mod traversal;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use node::Node;
pub use render::TreeRender;
pub use traversal::{BreadthFirst, DepthFirst, Iter};
pub use tree::AvlTree;
