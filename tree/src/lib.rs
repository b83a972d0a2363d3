//! schoolyard Tree - Decision-tree rendering
//!
//! This crate turns the decision tree produced by the engine into text for
//! terminal display: the full exploration diagram, and a one-line summary
//! of the equilibrium pick order. Pure string construction; no I/O.
//!
//! Diagram conventions: `= ` prefixes nodes on the equilibrium path, `- `
//! all other explored picks, and `| ` guides connect parents to children.
//! The root sentinel is shown as `*`.

use schoolyard_engine::error::SolverError;
use schoolyard_engine::node::{DecisionTree, NodeId, ROOT};

/// Render the full exploration diagram, one node per line.
pub fn render(tree: &DecisionTree) -> String {
    let mut out = String::new();
    render_node(tree, ROOT, "", "", &mut out);
    out
}

fn render_node(
    tree: &DecisionTree,
    id: NodeId,
    prefix: &str,
    children_prefix: &str,
    out: &mut String,
) {
    let node = tree.get(id).expect("invalid node id");
    out.push_str(prefix);
    out.push_str(if node.on_path() { "= " } else { "- " });
    match node.player() {
        Some(player) => out.push_str(&player.to_string()),
        None => out.push('*'),
    }
    out.push('\n');

    let children = node.children();
    for (position, &child) in children.iter().enumerate() {
        let child_prefix = format!("{children_prefix}| ");
        let grandchild_prefix = if position + 1 == children.len() {
            format!("{children_prefix}    ")
        } else {
            format!("{children_prefix}|   ")
        };
        render_node(tree, child, &child_prefix, &grandchild_prefix, out);
    }
}

/// Render the equilibrium pick order from the root as a single line,
/// e.g. `4 -> 1 -> 3`. Fails if the tree has an unmarked interior node.
pub fn render_equilibrium(tree: &DecisionTree) -> Result<String, SolverError> {
    let picks = tree.replay_path(ROOT)?;
    Ok(picks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level_tree() -> DecisionTree {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[2, 3]);
        tree.mark_equilibrium(ROOT, 1);
        let chosen = tree.get(ROOT).unwrap().children()[1];
        tree.attach_candidates(chosen, &[2, 4]);
        tree.mark_equilibrium(chosen, 0);
        tree
    }

    #[test]
    fn test_render_root_only() {
        let tree = DecisionTree::new();
        assert_eq!(render(&tree), "= *\n");
    }

    #[test]
    fn test_render_marks_and_guides() {
        let tree = two_level_tree();
        let expected = "\
= *
| - 2
| = 3
    | = 2
    | - 4
";
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn test_render_single_level() {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[5, 6, 7]);
        tree.mark_equilibrium(ROOT, 0);
        let expected = "\
= *
| = 5
| - 6
| - 7
";
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn test_render_equilibrium_line() {
        let tree = two_level_tree();
        assert_eq!(render_equilibrium(&tree).unwrap(), "3 -> 2");
    }

    #[test]
    fn test_render_equilibrium_requires_marks() {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[2, 3]);
        assert!(render_equilibrium(&tree).is_err());
    }
}
