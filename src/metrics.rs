use serde_json::Value;
use tracing::{instrument, trace};

use crate::tree::TreeUtils;

impl TreeUtils {
    /// Number of nodes in the subtree of `id`, the node itself included.
    ///
    /// An unknown id still counts as one node.
    pub fn get_size(&self, tree: &[Value], id: &Value) -> usize {
        self.count_nodes(self.get_sub_tree(tree, id)) + 1
    }

    fn count_nodes(&self, tree: &[Value]) -> usize {
        tree.iter()
            .filter(|node| node.is_object())
            .map(|node| 1 + self.count_nodes(self.children_of(node)))
            .sum()
    }

    /// Number of leaves below `id`.
    pub fn get_breath(&self, tree: &[Value], id: &Value) -> usize {
        self.get_leafs(tree, id).len()
    }

    /// Number of ancestors; roots have depth 0.
    pub fn get_depth(&self, tree: &[Value], id: &Value) -> usize {
        self.get_path_nodes(tree, id).len()
    }

    /// Depth plus one; roots are on level 1.
    pub fn get_level(&self, tree: &[Value], id: &Value) -> usize {
        self.get_depth(tree, id) + 1
    }

    /// Number of direct children.
    pub fn get_degree(&self, tree: &[Value], id: &Value) -> usize {
        self.get_children(tree, id).len()
    }

    /// Largest number of children of any node in the forest.
    pub fn get_tree_degree(&self, tree: &[Value]) -> usize {
        tree.iter()
            .map(|node| {
                let children = self.children_of(node);
                children.len().max(self.get_tree_degree(children))
            })
            .max()
            .unwrap_or(0)
    }

    /// Nodes `level` edges below the top of the forest (top-level nodes are level 0).
    pub fn get_nodes_at_level<'a>(&self, tree: &'a [Value], level: usize) -> Vec<&'a Value> {
        let mut nodes = Vec::new();
        self.collect_level(tree, level, &mut nodes);
        nodes
    }

    fn collect_level<'a>(&self, tree: &'a [Value], remaining: usize, nodes: &mut Vec<&'a Value>) {
        if remaining == 0 {
            nodes.extend(tree.iter());
            return;
        }
        for node in tree {
            self.collect_level(self.children_of(node), remaining - 1, nodes);
        }
    }

    /// Number of nodes on `level`.
    pub fn get_width(&self, tree: &[Value], level: usize) -> usize {
        self.get_nodes_at_level(tree, level).len()
    }

    /// Edges on the longest downward path from `id` to a leaf.
    pub fn get_height(&self, tree: &[Value], id: &Value) -> usize {
        self.subtree_height(self.get_sub_tree(tree, id), 0)
    }

    fn subtree_height(&self, tree: &[Value], height: usize) -> usize {
        tree.iter()
            .map(|node| self.subtree_height(self.children_of(node), height + 1))
            .fold(height, usize::max)
    }

    /// Edges between two nodes through their lowest common ancestor.
    ///
    /// Returns `-1` when the nodes share no ancestor (different roots) or either id is
    /// unknown, `0` when both ids name the same node.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn get_distance(&self, tree: &[Value], id1: &Value, id2: &Value) -> i64 {
        let (Some(node1), Some(node2)) = (self.get(tree, id1), self.get(tree, id2)) else {
            return -1;
        };
        let mut chain1 = self.get_path_nodes(tree, id1);
        chain1.push(node1);
        let mut chain2 = self.get_path_nodes(tree, id2);
        chain2.push(node2);

        let position = |chain: &[&Value], wanted: &Value| {
            chain.iter().position(|node| std::ptr::eq(*node, wanted))
        };
        let Some((index1, index2)) = chain1
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index1, common)| {
                position(chain2.as_slice(), *common).map(|index2| (index1, index2))
            })
        else {
            trace!("No common ancestor for {} and {}", id1, id2);
            return -1;
        };

        let up = chain1.len() - index1 - 1;
        let down = chain2.len() - index2 - 1;
        (up + down) as i64
    }
}
