//! Conversion between flat, parent-linked record lists and nested trees of records,
//! plus search, mutation and structural queries over such trees.
//!
//! Records are `serde_json` objects; which fields hold the id, the parent-id and the
//! children is set once through [`TreeConfig`].
//!
//! ```
//! use serde_json::json;
//! use tree_utils::TreeUtils;
//!
//! let utils = TreeUtils::default();
//! let list = vec![
//!     json!({"id": 1, "parentId": null}),
//!     json!({"id": 2, "parentId": 1}),
//! ];
//! let tree = utils.list_to_tree(&list);
//! assert_eq!(utils.get_depth(&tree, &json!(2)), 1);
//! assert_eq!(utils.tree_to_list(&tree), list);
//! ```

pub mod config;
pub mod errors;
pub mod util;

mod convert;
mod metrics;
mod mutate;
mod query;
mod tree;
mod validate;

pub use config::TreeConfig;
pub use errors::{TreeError, TreeResult};
pub use tree::TreeUtils;
