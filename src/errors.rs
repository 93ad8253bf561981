use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Record at position {index} is not an object")]
    NotAnObject { index: usize },

    #[error("Record at position {index} has no identifier")]
    MissingId { index: usize },

    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),

    #[error("Record {id} references unknown parent {parent_id}")]
    DanglingParent { id: String, parent_id: String },

    #[error("Cycle detected in hierarchy starting at: {0}")]
    CycleDetected(String),
}

impl From<config::ConfigError> for TreeError {
    fn from(e: config::ConfigError) -> Self {
        TreeError::Config {
            message: e.to_string(),
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
