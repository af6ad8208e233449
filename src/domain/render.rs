//! Tree diagram output via `termtree`.

use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use super::node::Node;
use super::tree::AvlTree;

pub trait TreeRender {
    fn render(&self) -> Tree<String>;
}

impl<T: Display> TreeRender for AvlTree<T> {
    #[instrument(level = "debug", skip_all)]
    fn render(&self) -> Tree<String> {
        match self.root_node() {
            Some(root) => render_node(root, root.value().to_string()),
            None => Tree::new("(empty)".to_string()),
        }
    }
}

fn render_node<T: Display>(node: &Node<T>, label: String) -> Tree<String> {
    let mut tree = Tree::new(label);
    if let Some(left) = node.left() {
        tree.push(render_node(left, format!("L: {}", left.value())));
    }
    if let Some(right) = node.right() {
        tree.push(render_node(right, format!("R: {}", right.value())));
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_rendering_then_shows_placeholder() {
        let tree: AvlTree<i32> = AvlTree::new();
        assert_eq!(tree.render().to_string().trim_end(), "(empty)");
    }

    #[test]
    fn given_small_tree_when_rendering_then_labels_sides() {
        let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
        let rendered = tree.render();

        assert_eq!(rendered.root, "2");
        let labels: Vec<&str> = rendered.leaves.iter().map(|leaf| leaf.root.as_str()).collect();
        assert_eq!(labels, vec!["L: 1", "R: 3"]);
    }

    #[test]
    fn given_right_only_child_when_rendering_then_single_leaf() {
        let tree: AvlTree<i32> = [1, 2].into_iter().collect();
        let text = tree.render().to_string();
        assert!(text.starts_with("1\n"));
        assert!(text.contains("R: 2"));
        assert!(!text.contains("L:"));
    }
}
