use serde_json::Value;
use tracing::instrument;

use crate::tree::TreeUtils;

impl TreeUtils {
    /// Immediate parent of the node; `None` for roots and unknown ids.
    pub fn get_parent<'a>(&self, tree: &'a [Value], id: &Value) -> Option<&'a Value> {
        self.parent_in(tree, id, None).flatten()
    }

    // Some(parent) once the node is located, None while still searching.
    fn parent_in<'a>(
        &self,
        tree: &'a [Value],
        id: &Value,
        parent: Option<&'a Value>,
    ) -> Option<Option<&'a Value>> {
        if tree.iter().any(|node| self.has_id(node, id)) {
            return Some(parent);
        }
        tree.iter()
            .find_map(|node| self.parent_in(self.children_of(node), id, Some(node)))
    }

    /// Path from the root down to, but excluding, the node.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn get_ancestors<'a>(&self, tree: &'a [Value], id: &Value) -> Vec<&'a Value> {
        let mut ancestors = Vec::new();
        let mut parent = self.get_parent(tree, id);
        while let Some(node) = parent {
            ancestors.push(node);
            parent = self
                .id_of(node)
                .and_then(|parent_id| self.get_parent(tree, parent_id));
        }
        ancestors.reverse();
        ancestors
    }

    /// Alias of [`TreeUtils::get_ancestors`].
    pub fn get_path_nodes<'a>(&self, tree: &'a [Value], id: &Value) -> Vec<&'a Value> {
        self.get_ancestors(tree, id)
    }

    /// Every node below the given one: its children, then the descendants of each child.
    pub fn get_descendants<'a>(&self, tree: &'a [Value], id: &Value) -> Vec<&'a Value> {
        let mut descendants = Vec::new();
        if let Some(node) = self.get(tree, id) {
            self.collect_descendants(node, &mut descendants);
        }
        descendants
    }

    fn collect_descendants<'a>(&self, node: &'a Value, descendants: &mut Vec<&'a Value>) {
        let children = self.children_of(node);
        descendants.extend(children.iter());
        for child in children {
            self.collect_descendants(child, descendants);
        }
    }

    /// Direct children of the node; empty for leaves and unknown ids.
    pub fn get_children<'a>(&self, tree: &'a [Value], id: &Value) -> &'a [Value] {
        self.get(tree, id)
            .map(|node| self.children_of(node))
            .unwrap_or(&[])
    }

    /// Alias of [`TreeUtils::get_children`].
    pub fn get_sub_tree<'a>(&self, tree: &'a [Value], id: &Value) -> &'a [Value] {
        self.get_children(tree, id)
    }

    /// Parent (if any) followed by the direct children.
    pub fn get_neighbours<'a>(&self, tree: &'a [Value], id: &Value) -> Vec<&'a Value> {
        self.get_parent(tree, id)
            .into_iter()
            .chain(self.get_children(tree, id))
            .collect()
    }

    /// Other children of the node's parent. Roots have no siblings.
    pub fn get_siblings<'a>(&self, tree: &'a [Value], id: &Value) -> Vec<&'a Value> {
        self.get_parent(tree, id)
            .map(|parent| {
                self.children_of(parent)
                    .iter()
                    .filter(|node| self.id_of(node) != Some(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nodes without children strictly below the given node.
    pub fn get_leafs<'a>(&self, tree: &'a [Value], id: &Value) -> Vec<&'a Value> {
        self.filter(self.get_sub_tree(tree, id), |node| {
            self.children_of(node).is_empty()
        })
    }
}
