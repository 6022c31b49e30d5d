//! Query and aggregate Docker container, service, and stack labels.
//!
//! The crate talks to the runtime through the [`runtime::Runtime`]
//! trait (inspect one entity by id, list entities matching one
//! label-equality filter) and turns the responses into filterable
//! [`result::QueryResult`] snapshots. [`client::LabelClient`] ties the
//! two together with the five query operations.

pub mod client;
pub mod error;
pub mod result;
pub mod runtime;
pub mod stack;

pub use client::LabelClient;
pub use error::{DockLabelError, Result};
pub use result::{
    Container, ContainerResult, Label, LabelResult, QueryResult, Service, ServiceResult,
};
pub use stack::{ConflictPolicy, STACK_NAMESPACE_LABEL};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
