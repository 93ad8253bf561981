use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};

use crate::tree::TreeUtils;

#[derive(Debug, Clone, Copy)]
enum Placement {
    Append,
    Prepend,
}

impl TreeUtils {
    /// Removes the first node with the given id and returns it (mutable operation).
    #[instrument(level = "debug", skip(self, tree))]
    pub fn delete(&self, tree: &mut Vec<Value>, id: &Value) -> Option<Value> {
        let removed = self.delete_node(tree, id);
        match &removed {
            Some(_) => debug!("Deleted node {}", id),
            None => debug!("Nothing to delete for {}", id),
        }
        removed
    }

    fn delete_node(&self, tree: &mut Vec<Value>, id: &Value) -> Option<Value> {
        if let Some(index) = tree.iter().position(|node| self.has_id(node, id)) {
            return Some(tree.remove(index));
        }
        tree.iter_mut().find_map(|node| {
            self.children_mut(node)
                .and_then(|children| self.delete_node(children, id))
        })
    }

    /// Appends records as the last children of `parent_id` (mutable operation).
    ///
    /// With `parent_id == Null` the records are appended to the top level as given.
    /// Otherwise each record gets an empty children field unless it has one. Nothing
    /// happens when no node carries `parent_id`.
    ///
    /// # Examples
    /// ```
    /// use serde_json::{json, Value};
    /// use tree_utils::TreeUtils;
    ///
    /// let utils = TreeUtils::default();
    /// let mut tree = vec![json!({"id": 1, "children": []})];
    /// utils.add(&mut tree, &json!(1), [json!({"id": 2})]);
    /// utils.add(&mut tree, &Value::Null, [json!({"id": 3})]);
    /// assert_eq!(tree[0]["children"], json!([{"id": 2, "children": []}]));
    /// assert_eq!(tree[1], json!({"id": 3}));
    /// ```
    pub fn add<I>(&self, tree: &mut Vec<Value>, parent_id: &Value, records: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let records: Vec<Value> = records.into_iter().collect();
        self.add_records(tree, parent_id, records, Placement::Append);
    }

    /// Like [`TreeUtils::add`] but inserts the records in front of the existing ones,
    /// keeping their given order.
    pub fn add_unshift<I>(&self, tree: &mut Vec<Value>, parent_id: &Value, records: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let records: Vec<Value> = records.into_iter().collect();
        self.add_records(tree, parent_id, records, Placement::Prepend);
    }

    #[instrument(level = "debug", skip(self, tree, records))]
    fn add_records(
        &self,
        tree: &mut Vec<Value>,
        parent_id: &Value,
        records: Vec<Value>,
        placement: Placement,
    ) {
        if parent_id.is_null() {
            debug!("Adding {} record(s) at top level", records.len());
            place(tree, records, placement);
            return;
        }
        let records: Vec<Value> = records
            .into_iter()
            .map(|record| self.with_children_field(record))
            .collect();
        if !self.add_below(tree, parent_id, &records, placement) {
            debug!("Parent {} not found, nothing added", parent_id);
        }
    }

    fn add_below(
        &self,
        tree: &mut [Value],
        parent_id: &Value,
        records: &[Value],
        placement: Placement,
    ) -> bool {
        let children_field = &self.config().children_field;
        if let Some(parent) = tree.iter_mut().find(|node| self.has_id(node, parent_id)) {
            let Value::Object(fields) = parent else {
                return false;
            };
            let children = fields
                .entry(children_field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            return match children.as_array_mut() {
                Some(children) => {
                    trace!("Adding {} child record(s) to {}", records.len(), parent_id);
                    place(children, records.to_vec(), placement);
                    true
                }
                None => false,
            };
        }
        // every subtree is searched; with unique ids at most one of them matches
        let mut added = false;
        for node in tree.iter_mut() {
            if let Some(children) = self.children_mut(node) {
                added |= self.add_below(children, parent_id, records, placement);
            }
        }
        added
    }

    fn with_children_field(&self, mut record: Value) -> Value {
        if let Value::Object(fields) = &mut record {
            fields
                .entry(self.config().children_field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
        }
        record
    }

    /// Replaces the node with the given id (mutable operation).
    ///
    /// The replacement keeps the original id, starts with empty children and then takes
    /// every field of `data`; pass the children in `data` to keep them.
    #[instrument(level = "debug", skip(self, tree, data))]
    pub fn edit(&self, tree: &mut [Value], id: &Value, data: &Value) {
        if !self.edit_node(tree, id, data) {
            debug!("Node {} not found, nothing edited", id);
        }
    }

    fn edit_node(&self, tree: &mut [Value], id: &Value, data: &Value) -> bool {
        if let Some(node) = tree.iter_mut().find(|node| self.has_id(node, id)) {
            let config = self.config();
            let mut fields = Map::new();
            if let Some(original_id) = self.id_of(node) {
                fields.insert(config.id_field.clone(), original_id.clone());
            }
            fields.insert(config.children_field.clone(), Value::Array(Vec::new()));
            if let Value::Object(data) = data {
                fields.extend(data.iter().map(|(key, value)| (key.clone(), value.clone())));
            }
            *node = Value::Object(fields);
            return true;
        }
        let mut edited = false;
        for node in tree.iter_mut() {
            if let Some(children) = self.children_mut(node) {
                edited |= self.edit_node(children, id, data);
            }
        }
        edited
    }
}

fn place(target: &mut Vec<Value>, records: Vec<Value>, placement: Placement) {
    match placement {
        Placement::Append => target.extend(records),
        Placement::Prepend => {
            target.splice(0..0, records);
        }
    }
}
