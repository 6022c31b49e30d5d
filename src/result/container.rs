use super::label::{self, Label};
use super::QueryResult;
use crate::runtime::ContainerRecord;
use serde::{Deserialize, Serialize};

/// A container paired with its label snapshot.
///
/// The snapshot is taken from the record's label map when the
/// projection is built and never recomputed afterwards, so filtering
/// stays deterministic even when a fresher record for the same
/// container would disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    raw: ContainerRecord,
    labels: Vec<Label>,
}

impl Container {
    pub fn new(raw: ContainerRecord) -> Self {
        let labels = label::snapshot(raw.labels.as_ref());
        Self { raw, labels }
    }

    /// The runtime record this projection was built from.
    pub fn raw(&self) -> &ContainerRecord {
        &self.raw
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn id(&self) -> &str {
        &self.raw.id
    }
}

impl QueryResult<Container> {
    /// Wrap a runtime container listing, computing each projection's
    /// label snapshot at conversion time. Listing order is preserved.
    pub fn from_records(records: Vec<ContainerRecord>) -> Self {
        QueryResult::new(records.into_iter().map(Container::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ContainerResult;
    use std::collections::HashMap;

    fn record(id: &str, labels: Option<&[(&str, &str)]>) -> ContainerRecord {
        ContainerRecord {
            id: id.to_string(),
            image: Some("nginx:latest".to_string()),
            labels: labels.map(|pairs| {
                pairs
                    .iter()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect::<HashMap<_, _>>()
            }),
        }
    }

    #[test]
    fn test_labels_snapshot_at_construction() {
        let container = Container::new(record("c1", Some(&[("env", "prod")])));

        assert_eq!(container.id(), "c1");
        assert_eq!(container.labels(), &[Label::new("env", "prod")]);
        assert_eq!(container.raw().image.as_deref(), Some("nginx:latest"));
    }

    #[test]
    fn test_absent_label_map_yields_empty_snapshot() {
        let container = Container::new(record("c1", None));

        assert!(container.labels().is_empty());
    }

    #[test]
    fn test_from_records_preserves_listing_order() {
        let result = ContainerResult::from_records(vec![
            record("c1", Some(&[("env", "prod")])),
            record("c2", None),
            record("c3", Some(&[("env", "dev")])),
        ]);

        let ids: Vec<&str> = result.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert!(result.items()[1].labels().is_empty());
    }
}
