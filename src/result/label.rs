use super::QueryResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A name/value metadata pair attached to a container or service.
///
/// Neither accessor mutation nor construction validates the strings;
/// uniqueness of names is only ever enforced where labels come out of a
/// map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    name: String,
    value: String,
}

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// Snapshot an optional name to value map into a label list. An absent
/// map yields an empty list.
pub(crate) fn snapshot(map: Option<&HashMap<String, String>>) -> Vec<Label> {
    match map {
        Some(map) => map
            .iter()
            .map(|(name, value)| Label::new(name.clone(), value.clone()))
            .collect(),
        None => Vec::new(),
    }
}

impl QueryResult<Label> {
    /// Build a label result from a name to value map, one `Label` per
    /// entry. Entry order follows the map's iteration order, which is
    /// unspecified.
    pub fn from_label_map(map: &HashMap<String, String>) -> Self {
        QueryResult::new(snapshot(Some(map)))
    }
}
