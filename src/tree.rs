use serde_json::Value;
use tracing::{instrument, trace};

use crate::config::TreeConfig;

static NULL: Value = Value::Null;

/// Converts between flat parent-linked record lists and nested trees, and queries trees.
///
/// Records are JSON objects (`serde_json::Value::Object`). The three structural fields
/// are looked up by the names held in [`TreeConfig`]; every other field is carried along
/// untouched. A forest is a plain `Vec<Value>` owned by the caller: read-only operations
/// borrow it, mutating ones (`add`, `add_unshift`, `edit`, `delete`) take `&mut Vec<Value>`.
///
/// Lookups by id walk a level before descending, so with duplicate ids the first match in
/// that order wins. Nodes without a children field are treated as leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeUtils {
    config: TreeConfig,
}

impl TreeUtils {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub(crate) fn id_of<'a>(&self, node: &'a Value) -> Option<&'a Value> {
        node.get(&self.config.id_field)
    }

    /// Parent-id of a record; an absent field reads as `Null`.
    pub(crate) fn parent_id_of<'a>(&self, node: &'a Value) -> &'a Value {
        node.get(&self.config.parent_id_field).unwrap_or(&NULL)
    }

    pub(crate) fn has_id(&self, node: &Value, id: &Value) -> bool {
        self.id_of(node) == Some(id)
    }

    pub(crate) fn children_of<'a>(&self, node: &'a Value) -> &'a [Value] {
        node.get(&self.config.children_field)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn children_mut<'a>(&self, node: &'a mut Value) -> Option<&'a mut Vec<Value>> {
        node.get_mut(&self.config.children_field)
            .and_then(Value::as_array_mut)
    }

    /// Returns the first node matching `predicate`.
    ///
    /// All nodes of a level are tested before any of their subtrees is entered.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use tree_utils::TreeUtils;
    ///
    /// let utils = TreeUtils::default();
    /// let tree = vec![json!({"id": 1, "children": [{"id": 2, "name": "b", "children": []}]})];
    /// let node = utils.find(&tree, |n| n["name"] == "b");
    /// assert_eq!(node.map(|n| &n["id"]), Some(&json!(2)));
    /// ```
    pub fn find<'a, F>(&self, tree: &'a [Value], predicate: F) -> Option<&'a Value>
    where
        F: Fn(&Value) -> bool,
    {
        self.find_node(tree, &predicate)
    }

    fn find_node<'a>(&self, tree: &'a [Value], predicate: &dyn Fn(&Value) -> bool) -> Option<&'a Value> {
        if let Some(node) = tree.iter().find(|node| predicate(node)) {
            return Some(node);
        }
        tree.iter()
            .find_map(|node| self.find_node(self.children_of(node), predicate))
    }

    /// Returns every node matching `predicate`, in the same order `find` visits them,
    /// so the first element (if any) is what `find` would return.
    pub fn filter<'a, F>(&self, tree: &'a [Value], predicate: F) -> Vec<&'a Value>
    where
        F: Fn(&Value) -> bool,
    {
        let mut found = Vec::new();
        self.filter_nodes(tree, &predicate, &mut found);
        found
    }

    fn filter_nodes<'a>(
        &self,
        tree: &'a [Value],
        predicate: &dyn Fn(&Value) -> bool,
        found: &mut Vec<&'a Value>,
    ) {
        found.extend(tree.iter().filter(|node| predicate(node)));
        for node in tree {
            self.filter_nodes(self.children_of(node), predicate, found);
        }
    }

    /// Node whose id field equals `id`.
    #[instrument(level = "trace", skip(self, tree))]
    pub fn get<'a>(&self, tree: &'a [Value], id: &Value) -> Option<&'a Value> {
        let node = self.find(tree, |node| self.has_id(node, id));
        if node.is_none() {
            trace!("Node not found: {}", id);
        }
        node
    }
}
