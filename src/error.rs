use crate::runtime::RuntimeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockLabelError {
    /// The queried element does not exist, or the runtime could not be
    /// asked about it. `id` is whatever the caller queried by: a
    /// container or service id, a label name, or a stack name.
    #[error("Element with id {id} was not found")]
    NoSuchElement {
        id: String,
        #[source]
        source: Option<RuntimeError>,
    },
}

impl DockLabelError {
    pub fn no_such_element(id: impl Into<String>, source: RuntimeError) -> Self {
        Self::NoSuchElement {
            id: id.into(),
            source: Some(source),
        }
    }

    /// The identifier the failed query was about.
    pub fn id(&self) -> &str {
        match self {
            Self::NoSuchElement { id, .. } => id,
        }
    }
}

pub type Result<T> = std::result::Result<T, DockLabelError>;
