//! Node data model: value, cached height, and exclusively owned children.

use std::cmp::max;

/// Owning child slot. `None` is the empty subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single tree node.
///
/// Each node is owned by exactly one slot: its parent's `left`/`right`,
/// or the tree's root. There are no parent pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    /// Height of the subtree rooted here; a leaf has height 1.
    pub(crate) height: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `height(left) - height(right)`.
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }
}

/// Height of a subtree, 0 when empty.
pub fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a subtree, 0 when empty.
pub fn balance_factor<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_link_when_measuring_then_height_and_balance_are_zero() {
        let link: Link<i32> = None;
        assert_eq!(height(&link), 0);
        assert_eq!(balance_factor(&link), 0);
    }

    #[test]
    fn given_leaf_when_measuring_then_height_is_one() {
        let leaf = Node::leaf(7);
        assert_eq!(leaf.height(), 1);
        assert_eq!(leaf.balance_factor(), 0);
        assert!(leaf.is_leaf());
    }

    #[test]
    fn given_left_heavy_node_when_updating_height_then_counts_longest_path() {
        let mut node = Node::leaf(5);
        let mut left = Node::leaf(3);
        left.left = Some(Node::leaf(1));
        left.update_height();
        node.left = Some(left);
        node.update_height();

        assert_eq!(node.height(), 3);
        assert_eq!(node.balance_factor(), 2);
        assert_eq!(balance_factor(&node.left), 1);
    }
}
