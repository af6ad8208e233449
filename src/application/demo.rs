//! Demonstration scenario: seed a tree, walk it, delete, walk again, probe.

use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::domain::{AvlTree, TreeRender};

use super::error::ApplicationResult;

/// Every traversal order of one tree state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub preorder: Vec<i64>,
    pub inorder: Vec<i64>,
    pub postorder: Vec<i64>,
    pub depth_first: Vec<i64>,
    pub breadth_first: Vec<i64>,
    pub height: usize,
    pub diagram: Option<String>,
}

impl Snapshot {
    fn capture(tree: &AvlTree<i64>, render: bool) -> Self {
        Self {
            preorder: tree.preorder().into_iter().copied().collect(),
            inorder: tree.inorder().into_iter().copied().collect(),
            postorder: tree.postorder().into_iter().copied().collect(),
            depth_first: tree.depth_first().copied().collect(),
            breadth_first: tree.breadth_first().copied().collect(),
            height: tree.height(),
            diagram: render.then(|| tree.render().to_string()),
        }
    }
}

/// Outcome of a full demonstration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Values that were already present when inserted
    pub rejected: Vec<i64>,
    pub before: Snapshot,
    /// `(value, was_present)` per deletion
    pub deletions: Vec<(i64, bool)>,
    pub after: Snapshot,
    /// `(value, exists)` per probe
    pub probes: Vec<(i64, bool)>,
    pub len: usize,
}

/// Runs the scenario described by `settings`.
///
/// Fails only if the tree ends up violating its own invariants.
#[instrument(level = "debug", skip_all)]
pub fn run_demo(settings: &Settings) -> ApplicationResult<DemoReport> {
    let mut tree = AvlTree::new();
    let mut rejected = Vec::new();
    for &value in &settings.values {
        if !tree.insert(value) {
            debug!(value, "duplicate rejected");
            rejected.push(value);
        }
    }
    tree.check()?;
    info!(len = tree.len(), height = tree.height(), "tree seeded");

    let before = Snapshot::capture(&tree, settings.render);

    let deletions = settings
        .delete
        .iter()
        .map(|&value| (value, tree.delete(&value)))
        .collect();
    tree.check()?;

    let after = Snapshot::capture(&tree, settings.render);

    let probes = settings
        .probe
        .iter()
        .map(|&value| (value, tree.exists(&value)))
        .collect();

    Ok(DemoReport {
        rejected,
        before,
        deletions,
        after,
        probes,
        len: tree.len(),
    })
}
