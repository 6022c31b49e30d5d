//! Stack label aggregation.
//!
//! A stack is the set of Swarm services sharing one value of the stack
//! namespace label. Its effective label set is the union of the
//! services' label maps, with a configurable policy for names two
//! services disagree on.

use crate::runtime::ServiceRecord;
use std::collections::HashMap;

/// Label every Swarm stack service carries, naming its stack.
pub const STACK_NAMESPACE_LABEL: &str = "com.docker.stack.namespace";

/// How aggregation resolves two services in the same stack disagreeing
/// on a label value.
///
/// The runtime does not guarantee a listing order, so under
/// `LastWriterWins` the effective winner for a conflicting name depends
/// on the order the listing happened to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// A later service's value overwrites an earlier one's.
    #[default]
    LastWriterWins,
    /// The first value seen for a name sticks.
    FirstWriterWins,
}

/// Union-merge the label maps of `services` into one name to value map,
/// in slice order. Services without a label map contribute nothing.
pub fn merge_service_labels(
    services: &[ServiceRecord],
    policy: ConflictPolicy,
) -> HashMap<String, String> {
    let mut merged = HashMap::new();

    for service in services {
        if let Some(labels) = &service.spec.labels {
            for (name, value) in labels {
                match policy {
                    ConflictPolicy::LastWriterWins => {
                        merged.insert(name.clone(), value.clone());
                    }
                    ConflictPolicy::FirstWriterWins => {
                        merged
                            .entry(name.clone())
                            .or_insert_with(|| value.clone());
                    }
                }
            }
        }
    }

    merged
}
