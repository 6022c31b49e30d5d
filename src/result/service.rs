use super::label::{self, Label};
use super::QueryResult;
use crate::runtime::ServiceRecord;
use serde::{Deserialize, Serialize};

/// A Swarm service paired with its label snapshot.
///
/// Like [`super::Container`], the snapshot is computed once from the
/// record's spec labels and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    raw: ServiceRecord,
    labels: Vec<Label>,
}

impl Service {
    pub fn new(raw: ServiceRecord) -> Self {
        let labels = label::snapshot(raw.spec.labels.as_ref());
        Self { raw, labels }
    }

    /// The runtime record this projection was built from.
    pub fn raw(&self) -> &ServiceRecord {
        &self.raw
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn name(&self) -> Option<&str> {
        self.raw.spec.name.as_deref()
    }
}

impl QueryResult<Service> {
    /// Wrap a runtime service listing, computing each projection's
    /// label snapshot at conversion time. Listing order is preserved.
    pub fn from_records(records: Vec<ServiceRecord>) -> Self {
        QueryResult::new(records.into_iter().map(Service::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ServiceResult;
    use crate::runtime::ServiceSpec;
    use std::collections::HashMap;

    fn record(id: &str, name: Option<&str>, labels: Option<&[(&str, &str)]>) -> ServiceRecord {
        ServiceRecord {
            id: id.to_string(),
            spec: ServiceSpec {
                name: name.map(str::to_string),
                labels: labels.map(|pairs| {
                    pairs
                        .iter()
                        .map(|(n, v)| (n.to_string(), v.to_string()))
                        .collect::<HashMap<_, _>>()
                }),
            },
        }
    }

    #[test]
    fn test_labels_snapshot_at_construction() {
        let service = Service::new(record("s1", Some("web"), Some(&[("env", "prod")])));

        assert_eq!(service.id(), "s1");
        assert_eq!(service.name(), Some("web"));
        assert_eq!(service.labels(), &[Label::new("env", "prod")]);
    }

    #[test]
    fn test_absent_label_map_yields_empty_snapshot() {
        let service = Service::new(record("s1", None, None));

        assert!(service.labels().is_empty());
        assert!(service.name().is_none());
    }

    #[test]
    fn test_from_records_preserves_listing_order() {
        let result = ServiceResult::from_records(vec![
            record("s1", Some("web"), Some(&[("env", "prod")])),
            record("s2", Some("db"), None),
        ]);

        let ids: Vec<&str> = result.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }
}
