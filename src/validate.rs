use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::tree::TreeUtils;

impl TreeUtils {
    /// Checks that a flat list forms a forest under `root_parent_id`.
    ///
    /// Fails on the first non-object record, record without id, duplicate id, parent-id
    /// that is neither `root_parent_id` nor a known id, or parent cycle. The conversion
    /// and query operations never call this; it is meant to run before them on untrusted
    /// input.
    #[instrument(level = "debug", skip(self, list))]
    pub fn validate_list(&self, list: &[Value], root_parent_id: &Value) -> TreeResult<()> {
        // ids are keyed by their JSON text, so 1 and "1" stay distinct
        let mut parents: HashMap<String, Option<String>> = HashMap::with_capacity(list.len());
        for (index, record) in list.iter().enumerate() {
            let id = self.record_id(record, index)?;
            let parent_id = self.parent_id_of(record);
            let parent_key = (parent_id != root_parent_id).then(|| parent_id.to_string());
            if parents.insert(id.clone(), parent_key).is_some() {
                return Err(TreeError::DuplicateId(id));
            }
        }

        for (id, parent_id) in &parents {
            if let Some(parent_id) = parent_id {
                if !parents.contains_key(parent_id) {
                    return Err(TreeError::DanglingParent {
                        id: id.clone(),
                        parent_id: parent_id.clone(),
                    });
                }
            }
        }

        for start in parents.keys() {
            let mut seen = HashSet::new();
            let mut current = Some(start);
            while let Some(id) = current {
                if !seen.insert(id) {
                    return Err(TreeError::CycleDetected(start.clone()));
                }
                current = parents.get(id).and_then(Option::as_ref);
            }
        }

        debug!("List of {} record(s) is a valid forest", list.len());
        Ok(())
    }

    /// Checks that every node of a tree is an object with an id, and that ids are unique.
    ///
    /// `index` in the reported error is the node's position in pre-order.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn validate_tree(&self, tree: &[Value]) -> TreeResult<()> {
        let mut seen = HashSet::new();
        let mut index = 0;
        self.validate_nodes(tree, &mut seen, &mut index)?;
        debug!("Tree of {} node(s) is valid", index);
        Ok(())
    }

    fn validate_nodes(
        &self,
        tree: &[Value],
        seen: &mut HashSet<String>,
        index: &mut usize,
    ) -> TreeResult<()> {
        for node in tree {
            let id = self.record_id(node, *index)?;
            if !seen.insert(id.clone()) {
                return Err(TreeError::DuplicateId(id));
            }
            *index += 1;
            self.validate_nodes(self.children_of(node), seen, index)?;
        }
        Ok(())
    }

    fn record_id(&self, record: &Value, index: usize) -> TreeResult<String> {
        if !record.is_object() {
            return Err(TreeError::NotAnObject { index });
        }
        match self.id_of(record) {
            Some(id) if !id.is_null() => Ok(id.to_string()),
            _ => Err(TreeError::MissingId { index }),
        }
    }
}
