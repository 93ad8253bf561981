#![allow(dead_code)]

use rstest::fixture;
use serde_json::{json, Value};
use tree_utils::util::testing::init_test_setup;
use tree_utils::{TreeConfig, TreeUtils};

// 1           2
// ├── 3       └── 5
// │   └── 6
// └── 4

#[fixture]
pub fn utils() -> TreeUtils {
    init_test_setup();
    TreeUtils::default()
}

#[fixture]
pub fn list() -> Vec<Value> {
    vec![
        json!({"id": 1, "parentId": null, "name": "Node 1"}),
        json!({"id": 2, "parentId": null, "name": "Node 2"}),
        json!({"id": 3, "parentId": 1, "name": "Node 3"}),
        json!({"id": 4, "parentId": 1, "name": "Node 4"}),
        json!({"id": 5, "parentId": 2, "name": "Node 5"}),
        json!({"id": 6, "parentId": 3, "name": "Node 6"}),
    ]
}

#[fixture]
pub fn tree() -> Vec<Value> {
    vec![
        json!({"id": 1, "parentId": null, "name": "Node 1", "children": [
            {"id": 3, "parentId": 1, "name": "Node 3", "children": [
                {"id": 6, "parentId": 3, "name": "Node 6", "children": []},
            ]},
            {"id": 4, "parentId": 1, "name": "Node 4", "children": []},
        ]}),
        json!({"id": 2, "parentId": null, "name": "Node 2", "children": [
            {"id": 5, "parentId": 2, "name": "Node 5", "children": []},
        ]}),
    ]
}

#[fixture]
pub fn custom_utils() -> TreeUtils {
    init_test_setup();
    TreeUtils::new(
        TreeConfig::default()
            .with_id_field("customId")
            .with_parent_id_field("parentCustomId")
            .with_children_field("customChildren"),
    )
}

#[fixture]
pub fn custom_list() -> Vec<Value> {
    vec![
        json!({"customId": 1, "parentCustomId": null, "name": "Node 1"}),
        json!({"customId": 2, "parentCustomId": null, "name": "Node 2"}),
        json!({"customId": 3, "parentCustomId": 1, "name": "Node 3"}),
        json!({"customId": 4, "parentCustomId": 1, "name": "Node 4"}),
        json!({"customId": 5, "parentCustomId": 2, "name": "Node 5"}),
        json!({"customId": 6, "parentCustomId": 3, "name": "Node 6"}),
    ]
}

#[fixture]
pub fn custom_tree() -> Vec<Value> {
    vec![
        json!({"customId": 1, "parentCustomId": null, "name": "Node 1", "customChildren": [
            {"customId": 3, "parentCustomId": 1, "name": "Node 3", "customChildren": [
                {"customId": 6, "parentCustomId": 3, "name": "Node 6", "customChildren": []},
            ]},
            {"customId": 4, "parentCustomId": 1, "name": "Node 4", "customChildren": []},
        ]}),
        json!({"customId": 2, "parentCustomId": null, "name": "Node 2", "customChildren": [
            {"customId": 5, "parentCustomId": 2, "name": "Node 5", "customChildren": []},
        ]}),
    ]
}

/// Values of the `id` field, in order.
pub fn ids(nodes: &[&Value]) -> Vec<i64> {
    nodes.iter().filter_map(|node| node["id"].as_i64()).collect()
}

pub fn sort_by_id(list: &mut [Value], field: &str) {
    list.sort_by_key(|record| record[field].as_i64());
}
