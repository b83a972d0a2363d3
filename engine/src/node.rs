//! Decision tree built during the draft search.
//!
//! Nodes live in a flat arena indexed by `NodeId` and represent "this
//! player was picked here"; the root is a sentinel holding no player. The
//! tree is append-only: a node's children are attached once, when its turn
//! is explored, and nodes are never removed. At most one child of any node
//! is ever marked as the mover's equilibrium choice; following marked
//! children from a node down to a leaf replays the picks the captains
//! would actually make.

use crate::error::SolverError;

/// Node ID type (index into flat array storage).
pub type NodeId = u32;

/// ID of the root sentinel.
pub const ROOT: NodeId = 0;

/// A single explored pick. `player` is `None` only for the root sentinel.
#[derive(Debug, Clone)]
pub struct PickNode {
    player: Option<usize>,
    on_path: bool,
    children: Vec<NodeId>,
}

impl PickNode {
    /// The player picked at this node, or `None` for the root sentinel.
    pub fn player(&self) -> Option<usize> {
        self.player
    }

    /// Whether this pick lies on the equilibrium path.
    pub fn on_path(&self) -> bool {
        self.on_path
    }

    /// Child node IDs, in the order the candidates were considered.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The search tree: one child per candidate considered at each turn.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<PickNode>,
}

impl DecisionTree {
    /// Create a tree holding only the root sentinel. The root is marked
    /// on-path from the start: the realized game always passes through it.
    pub fn new() -> Self {
        DecisionTree {
            nodes: vec![PickNode {
                player: None,
                on_path: true,
                children: Vec::new(),
            }],
        }
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&PickNode> {
        self.nodes.get(id as usize)
    }

    /// Get the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (it never is; the root always exists).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> &PickNode {
        self.nodes.get(id as usize).expect("invalid node id")
    }

    /// Append one child of `parent` per candidate, in the given
    /// (ascending-strength) order. A node's candidates are attached
    /// exactly once per solve; attaching to a node that already has
    /// children is a no-op, never a duplication.
    pub fn attach_candidates(&mut self, parent: NodeId, candidates: &[usize]) {
        if !self.node(parent).children.is_empty() {
            return;
        }
        for &player in candidates {
            let id = self.nodes.len() as NodeId;
            self.nodes.push(PickNode {
                player: Some(player),
                on_path: false,
                children: Vec::new(),
            });
            self.nodes[parent as usize].children.push(id);
        }
    }

    /// Mark the child of `parent` at `position` as the mover's optimal
    /// choice. Called once per node, after all its candidates are scored.
    pub fn mark_equilibrium(&mut self, parent: NodeId, position: usize) {
        let child = self.node(parent).children[position];
        self.nodes[child as usize].on_path = true;
    }

    /// The equilibrium-marked child of `id`, if one has been marked.
    pub fn equilibrium_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).on_path)
    }

    /// Follow equilibrium-marked children from `start` down to a leaf and
    /// collect the picked players in order. A non-leaf node without a
    /// marked child means the tree bookkeeping is broken.
    pub fn replay_path(&self, start: NodeId) -> Result<Vec<usize>, SolverError> {
        let mut picks = Vec::new();
        let mut at = start;
        while !self.node(at).is_leaf() {
            at = self
                .equilibrium_child(at)
                .ok_or(SolverError::MissingEquilibriumChild { node: at })?;
            if let Some(player) = self.node(at).player {
                picks.push(player);
            }
        }
        Ok(picks)
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_is_single_on_path_sentinel() {
        let tree = DecisionTree::new();
        assert_eq!(tree.len(), 1);
        let root = tree.get(ROOT).unwrap();
        assert_eq!(root.player(), None);
        assert!(root.on_path());
        assert!(root.is_leaf());
    }

    #[test]
    fn test_attach_candidates_in_order() {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[2, 3, 5]);
        let children = tree.get(ROOT).unwrap().children().to_vec();
        assert_eq!(children.len(), 3);
        let players: Vec<_> = children
            .iter()
            .map(|&c| tree.get(c).unwrap().player().unwrap())
            .collect();
        assert_eq!(players, vec![2, 3, 5]);
    }

    #[test]
    fn test_attach_candidates_is_idempotent() {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[2, 3]);
        tree.attach_candidates(ROOT, &[2, 3]);
        assert_eq!(tree.get(ROOT).unwrap().children().len(), 2);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_mark_and_find_equilibrium_child() {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[2, 3]);
        assert_eq!(tree.equilibrium_child(ROOT), None);
        tree.mark_equilibrium(ROOT, 1);
        let marked = tree.equilibrium_child(ROOT).unwrap();
        assert_eq!(tree.get(marked).unwrap().player(), Some(3));
    }

    #[test]
    fn test_replay_path_follows_marked_chain() {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[2, 3]);
        tree.mark_equilibrium(ROOT, 0);
        let first = tree.get(ROOT).unwrap().children()[0];
        tree.attach_candidates(first, &[3, 4]);
        tree.mark_equilibrium(first, 1);
        assert_eq!(tree.replay_path(ROOT).unwrap(), vec![2, 4]);
    }

    #[test]
    fn test_replay_path_from_interior_node() {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[2, 3]);
        tree.mark_equilibrium(ROOT, 0);
        let first = tree.get(ROOT).unwrap().children()[0];
        tree.attach_candidates(first, &[3, 4]);
        tree.mark_equilibrium(first, 0);
        assert_eq!(tree.replay_path(first).unwrap(), vec![3]);
    }

    #[test]
    fn test_replay_path_reports_missing_mark() {
        let mut tree = DecisionTree::new();
        tree.attach_candidates(ROOT, &[2, 3]);
        let err = tree.replay_path(ROOT).unwrap_err();
        assert_eq!(err, SolverError::MissingEquilibriumChild { node: ROOT });
    }

    #[test]
    fn test_replay_path_on_leaf_is_empty() {
        let tree = DecisionTree::new();
        assert_eq!(tree.replay_path(ROOT).unwrap(), Vec::<usize>::new());
    }
}
