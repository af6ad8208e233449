//! The balanced tree container: insertion, deletion, lookup and validation.
//!
//! Mutations descend recursively, take ownership of the child slot they
//! recurse into, and hand back the (possibly new) subtree root. Every frame
//! on the way back up recomputes its height and rebalances itself.

use std::cmp::{max, Ordering};
use std::fmt;

use tracing::{instrument, trace};

use super::error::{DomainError, DomainResult};
use super::node::{balance_factor, height, Link, Node};
use super::rotation::{rotate_left, rotate_right};

/// Self-balancing binary search tree (AVL).
///
/// Values are unique: inserting a value that is already stored is rejected
/// and leaves the tree untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct AvlTree<T> {
    pub(crate) root: Link<T>,
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(Node::value)
    }

    pub fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T: Ord> AvlTree<T> {
    /// Inserts `value`, returning `false` if an equal value is already stored.
    #[instrument(level = "trace", skip_all, fields(len = self.len))]
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(insert_at(self.root.take(), value, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `value`, returning whether it was present.
    ///
    /// Removing an absent value is a no-op.
    #[instrument(level = "trace", skip_all, fields(len = self.len))]
    pub fn delete(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = delete_at(self.root.take(), value, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Iterative descent, O(height).
    pub fn exists(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// `true` when order, stored heights and balance all hold.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Walks the tree in order and reports the first invariant violation.
    pub fn check(&self) -> DomainResult<()> {
        let mut previous = None;
        let mut position = 0;
        check_subtree(&self.root, &mut previous, &mut position).map(|_| ())
    }

    /// Order-only check: the in-order sequence is strictly increasing.
    pub fn is_ordered(&self) -> bool {
        let mut previous = None;
        is_ordered_from(&self.root, &mut previous)
    }
}

fn insert_at<T: Ord>(link: Link<T>, value: T, inserted: &mut bool) -> Box<Node<T>> {
    let Some(mut node) = link else {
        *inserted = true;
        return Node::leaf(value);
    };

    // Where the value falls relative to the child we descend into. Only read
    // when this frame turns out unbalanced, in which case no rotation has
    // replaced that child.
    let below = match value.cmp(&node.value) {
        Ordering::Equal => return node,
        Ordering::Less => {
            let below = node.left.as_ref().map(|left| value.cmp(&left.value));
            node.left = Some(insert_at(node.left.take(), value, inserted));
            below
        }
        Ordering::Greater => {
            let below = node.right.as_ref().map(|right| value.cmp(&right.value));
            node.right = Some(insert_at(node.right.take(), value, inserted));
            below
        }
    };

    node.update_height();
    rebalance_after_insert(node, below)
}

fn rebalance_after_insert<T>(mut node: Box<Node<T>>, below: Option<Ordering>) -> Box<Node<T>> {
    let balance = node.balance_factor();
    match below {
        Some(Ordering::Less) if balance > 1 => {
            trace!("left-left");
            rotate_right(node)
        }
        Some(Ordering::Greater) if balance < -1 => {
            trace!("right-right");
            rotate_left(node)
        }
        Some(Ordering::Greater) if balance > 1 => {
            trace!("left-right");
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Some(Ordering::Less) if balance < -1 => {
            trace!("right-left");
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
        _ => node,
    }
}

fn delete_at<T: Ord>(link: Link<T>, value: &T, removed: &mut bool) -> Link<T> {
    let mut node = link?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete_at(node.left.take(), value, removed),
        Ordering::Greater => node.right = delete_at(node.right.take(), value, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                // The surviving child is already a balanced subtree.
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    let (rest, successor) = take_min(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = rest;
                }
            }
        }
    }

    node.update_height();
    Some(rebalance_after_delete(node))
}

/// Detaches the smallest value of a subtree, rebalancing each frame on the
/// way back up.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            node.update_height();
            (Some(rebalance_after_delete(node)), min)
        }
    }
}

/// Deletion cases depend only on the shape of the remaining subtrees.
fn rebalance_after_delete<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let balance = node.balance_factor();
    if balance > 1 {
        if balance_factor(&node.left) < 0 {
            trace!("left-right");
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!("left-left");
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if balance_factor(&node.right) > 0 {
            trace!("right-left");
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!("right-right");
        }
        return rotate_left(node);
    }
    node
}

fn check_subtree<'a, T: Ord>(
    link: &'a Link<T>,
    previous: &mut Option<&'a T>,
    position: &mut usize,
) -> DomainResult<usize> {
    let Some(node) = link else {
        return Ok(0);
    };

    let left = check_subtree(&node.left, previous, position)?;
    let here = *position;
    if previous.is_some_and(|prev| *prev >= node.value) {
        return Err(DomainError::OutOfOrder { position: here });
    }
    *previous = Some(&node.value);
    *position += 1;
    let right = check_subtree(&node.right, previous, position)?;

    let expected = 1 + max(left, right);
    if node.height != expected {
        return Err(DomainError::HeightMismatch {
            position: here,
            stored: node.height,
            expected,
        });
    }
    let balance = left as i32 - right as i32;
    if balance.abs() > 1 {
        return Err(DomainError::Unbalanced {
            position: here,
            balance,
        });
    }
    Ok(expected)
}

fn is_ordered_from<'a, T: Ord>(link: &'a Link<T>, previous: &mut Option<&'a T>) -> bool {
    let Some(node) = link else {
        return true;
    };
    if !is_ordered_from(&node.left, previous) {
        return false;
    }
    if previous.is_some_and(|prev| *prev >= node.value) {
        return false;
    }
    *previous = Some(&node.value);
    is_ordered_from(&node.right, previous)
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
