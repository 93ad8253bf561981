use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::tree::TreeUtils;

impl TreeUtils {
    /// Builds a forest from a flat list; roots are the records whose parent-id is `Null`
    /// or absent.
    pub fn list_to_tree(&self, list: &[Value]) -> Vec<Value> {
        self.list_to_tree_from(list, &Value::Null)
    }

    /// Builds a forest from a flat list, taking as roots the records whose parent-id
    /// equals `root_parent_id`.
    ///
    /// Every produced node is a copy of its record with the children field set
    /// (overwriting any existing value). Sibling order follows the input. Records whose
    /// parent is never reached are dropped. The input is not modified.
    ///
    /// The parent links must be acyclic, otherwise this does not terminate.
    #[instrument(level = "debug", skip(self, list))]
    pub fn list_to_tree_from(&self, list: &[Value], root_parent_id: &Value) -> Vec<Value> {
        let tree = self.build_level(list, root_parent_id);
        debug!("Built {} root node(s) from {} record(s)", tree.len(), list.len());
        tree
    }

    fn build_level(&self, list: &[Value], parent_id: &Value) -> Vec<Value> {
        list.iter()
            .filter(|item| item.is_object() && self.parent_id_of(item) == parent_id)
            .map(|item| {
                // a record without an id cannot be referenced as a parent
                let children = match self.id_of(item) {
                    Some(id) => self.build_level(list, id),
                    None => Vec::new(),
                };
                let mut node = item.clone();
                if let Value::Object(map) = &mut node {
                    map.insert(self.config().children_field.clone(), Value::Array(children));
                }
                node
            })
            .collect()
    }

    /// Flattens a forest into a pre-order list; top-level records get a `Null` parent-id.
    pub fn tree_to_list(&self, tree: &[Value]) -> Vec<Value> {
        self.tree_to_list_from(tree, &Value::Null)
    }

    /// Flattens a forest into a pre-order list.
    ///
    /// Each node is copied without its children field and with its parent-id field set:
    /// `parent_id` for the top level, the enclosing node's id below that. The input is
    /// not modified.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn tree_to_list_from(&self, tree: &[Value], parent_id: &Value) -> Vec<Value> {
        let mut list = Vec::new();
        self.flatten_into(tree, parent_id, &mut list);
        debug!("Flattened tree into {} record(s)", list.len());
        list
    }

    fn flatten_into(&self, tree: &[Value], parent_id: &Value, list: &mut Vec<Value>) {
        let config = self.config();
        for node in tree {
            let Value::Object(fields) = node else {
                continue;
            };
            let mut record: Map<String, Value> = fields
                .iter()
                .filter(|(key, _)| **key != config.children_field)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            record.insert(config.parent_id_field.clone(), parent_id.clone());
            list.push(Value::Object(record));

            let children = self.children_of(node);
            if !children.is_empty() {
                let id = self.id_of(node).unwrap_or(&Value::Null);
                self.flatten_into(children, id, list);
            }
        }
    }
}
