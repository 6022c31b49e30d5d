//! Capability seam between the label engine and the container runtime.
//!
//! The engine needs exactly two things from a runtime: inspect one
//! entity by id, and list entities matching a single label-equality
//! filter. Connection management, authentication, and transport belong
//! to the client implementing [`Runtime`], not to this crate.

pub mod types;

pub use types::{ContainerRecord, EntityKind, ServiceRecord, ServiceSpec};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The runtime could not be reached or the call failed outright.
    #[error("Container runtime unavailable: {0}")]
    Unavailable(String),

    /// The runtime answered, but no entity with this id exists.
    #[error("No such {kind}: {id}")]
    NotFound { kind: EntityKind, id: String },
}

/// The runtime capabilities the label engine consumes.
///
/// The list methods take one label as an equality filter (`name=value`)
/// and return whatever order the runtime produced; callers must not
/// rely on it.
#[async_trait]
pub trait Runtime: Send + Sync {
    async fn inspect_container(&self, id: &str) -> Result<ContainerRecord, RuntimeError>;

    async fn inspect_service(&self, id: &str) -> Result<ServiceRecord, RuntimeError>;

    async fn list_containers(
        &self,
        label_name: &str,
        label_value: &str,
    ) -> Result<Vec<ContainerRecord>, RuntimeError>;

    async fn list_services(
        &self,
        label_name: &str,
        label_value: &str,
    ) -> Result<Vec<ServiceRecord>, RuntimeError>;
}
