//! Traversals over an [`AvlTree`].
//!
//! The three classic orders recurse and collect; depth-first, breadth-first
//! and in-order iteration are lazy and drive an explicit stack or queue.
//! All iterators are one-shot: restart by calling the method again.

use std::collections::VecDeque;

use super::node::{Link, Node};
use super::tree::AvlTree;

impl<T> AvlTree<T> {
    /// Node, left, right.
    pub fn preorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        preorder_into(&self.root, &mut out);
        out
    }

    /// Left, node, right. Always ascending.
    pub fn inorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        inorder_into(&self.root, &mut out);
        out
    }

    /// Left, right, node.
    pub fn postorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        postorder_into(&self.root, &mut out);
        out
    }

    /// Stack-driven depth-first walk; yields in pre-order.
    pub fn depth_first(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self)
    }

    /// Queue-driven level-order walk.
    pub fn breadth_first(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(self)
    }

    /// Lazy in-order iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

fn preorder_into<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
    if let Some(node) = link {
        out.push(&node.value);
        preorder_into(&node.left, out);
        preorder_into(&node.right, out);
    }
}

fn inorder_into<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
    if let Some(node) = link {
        inorder_into(&node.left, out);
        out.push(&node.value);
        inorder_into(&node.right, out);
    }
}

fn postorder_into<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
    if let Some(node) = link {
        postorder_into(&node.left, out);
        postorder_into(&node.right, out);
        out.push(&node.value);
    }
}

pub struct DepthFirst<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> DepthFirst<'a, T> {
    fn new(tree: &'a AvlTree<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root.as_deref() {
            stack.push(root);
        }
        Self { stack }
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so left is popped first
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

pub struct BreadthFirst<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> BreadthFirst<'a, T> {
    fn new(tree: &'a AvlTree<T>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = tree.root.as_deref() {
            queue.push_back(root);
        }
        Self { queue }
    }
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back(right);
        }
        Some(&node.value)
    }
}

/// In-order iterator: the stack holds the left spine of the unvisited part.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a AvlTree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
