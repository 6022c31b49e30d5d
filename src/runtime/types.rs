//! Entity records as the runtime reports them.
//!
//! Field names mirror the Docker Engine API JSON so a thin HTTP client
//! can deserialize listing responses straight into these types. The
//! engine itself only ever reads them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The two entity kinds the engine can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Container,
    Service,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Container => write!(f, "container"),
            EntityKind::Service => write!(f, "service"),
        }
    }
}

/// A container as reported by the runtime's listing endpoint.
///
/// `labels` may be absent for containers created without any label;
/// inspect responses nest labels under `Config`, which a runtime
/// client normalizes into this field before handing the record over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Image", default)]
    pub image: Option<String>,

    #[serde(rename = "Labels", default)]
    pub labels: Option<HashMap<String, String>>,
}

/// A Swarm service as reported by the runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Spec", default)]
    pub spec: ServiceSpec,
}

/// The subset of a service spec the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpec {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Labels", default)]
    pub labels: Option<HashMap<String, String>>,
}
