//! Engine configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (`id`, `parentId`, `children`)
//! 2. Optional TOML file
//! 3. Environment variables: `TREE_UTILS_*` prefix (or a caller-chosen prefix)

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::TreeResult;

pub const DEFAULT_ID_FIELD: &str = "id";
pub const DEFAULT_PARENT_ID_FIELD: &str = "parentId";
pub const DEFAULT_CHILDREN_FIELD: &str = "children";

/// Default prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "TREE_UTILS";

/// Field-name bindings used by [`crate::TreeUtils`] to read records.
///
/// Field names are not validated: an empty name is accepted and simply never matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeConfig {
    /// Name of the unique identifier field
    pub id_field: String,
    /// Name of the field referencing the parent's identifier
    pub parent_id_field: String,
    /// Name of the field holding the child nodes
    pub children_field: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.into(),
            parent_id_field: DEFAULT_PARENT_ID_FIELD.into(),
            children_field: DEFAULT_CHILDREN_FIELD.into(),
        }
    }
}

impl TreeConfig {
    pub fn with_id_field(mut self, name: impl Into<String>) -> Self {
        self.id_field = name.into();
        self
    }

    pub fn with_parent_id_field(mut self, name: impl Into<String>) -> Self {
        self.parent_id_field = name.into();
        self
    }

    pub fn with_children_field(mut self, name: impl Into<String>) -> Self {
        self.children_field = name.into();
        self
    }

    /// Load configuration with layered precedence using the default `TREE_UTILS` prefix.
    ///
    /// # Arguments
    /// * `path` - Optional TOML file, e.g.
    ///   ```toml
    ///   id_field = "customId"
    ///   children_field = "items"
    ///   ```
    ///
    /// Keys missing from every layer keep their compiled defaults.
    pub fn load(path: Option<&Path>) -> TreeResult<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Same as [`TreeConfig::load`] but reads environment overrides from `<prefix>_*`.
    #[instrument(level = "debug")]
    pub fn load_with_prefix(path: Option<&Path>, prefix: &str) -> TreeResult<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("id_field", defaults.id_field)?
            .set_default("parent_id_field", defaults.parent_id_field)?
            .set_default("children_field", defaults.children_field)?;

        if let Some(path) = path {
            debug!("Reading config file: {}", path.display());
            builder = builder.add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            );
        }

        let settings: Self = builder
            .add_source(Environment::with_prefix(prefix))
            .build()?
            .try_deserialize()?;

        debug!(?settings, "Loaded tree config");
        Ok(settings)
    }
}
