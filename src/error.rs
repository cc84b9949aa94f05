use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HoursError>;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Repository at {0} is a shallow clone; fetch the full history (git fetch --unshallow) and retry")]
    ShallowClone(PathBuf),
    #[error("Branch not found: {0}")]
    BranchNotFound(String),
    #[error("Reference error: {0}")]
    Reference(String),
    #[error("Traversal error: {0}")]
    Traversal(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid alias: {0}")]
    InvalidAlias(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementation for unboxed to boxed conversion
impl From<gix::discover::Error> for HoursError {
    fn from(err: gix::discover::Error) -> Self {
        HoursError::GitDiscover(Box::new(err))
    }
}
