//! Rotation primitives.
//!
//! Both rotations move boxed subtrees between slots; no node is copied.
//! Heights are recomputed bottom-up: the demoted node first, then the
//! promoted one.

use tracing::trace;

use super::node::Node;

/// Promotes the left child to subtree root.
///
/// ```text
///         y              x
///        / \            / \
///       x   c   ==>    a   y
///      / \                / \
///     a   b              b   c
/// ```
///
/// A node without a left child is returned unchanged. The rebalancing code
/// only rotates right on a left-heavy node, so that branch is never taken.
pub fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    trace!(height = node.height, "rotate right");
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Mirror of [`rotate_right`]: promotes the right child to subtree root.
pub fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    trace!(height = node.height, "rotate left");
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}
