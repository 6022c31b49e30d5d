//! Query results: immutable snapshots of entities with a combined
//! filter/map operation.

pub mod container;
pub mod label;
pub mod service;

pub use container::Container;
pub use label::Label;
pub use service::Service;

use serde::{Deserialize, Serialize};

/// Result of a listing or aggregation query.
///
/// Entities are held in the order the source produced them; for
/// map-backed sources that order is unspecified. A `QueryResult` is
/// never mutated after construction: [`QueryResult::filter`] builds a
/// new one and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult<T> {
    items: Vec<T>,
}

pub type LabelResult = QueryResult<Label>;
pub type ContainerResult = QueryResult<Container>;
pub type ServiceResult = QueryResult<Service>;

impl<T> QueryResult<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// The entities in this result, in listing order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the result, returning the owned entities.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Filter and transform in a single pass.
    ///
    /// `f` decides per element. `Some(v)` keeps `v` in the output,
    /// which may be a modified copy, so one pass can filter and map at
    /// once; `None` drops the element. Survivors keep their relative
    /// order.
    pub fn filter<F>(&self, mut f: F) -> QueryResult<T>
    where
        F: FnMut(&T) -> Option<T>,
    {
        QueryResult {
            items: self.items.iter().filter_map(|item| f(item)).collect(),
        }
    }
}

impl<T> IntoIterator for QueryResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a QueryResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QueryResult<Label> {
        QueryResult::new(vec![
            Label::new("env", "prod"),
            Label::new("team", "infra"),
            Label::new("tier", "web"),
        ])
    }

    #[test]
    fn test_filter_keeps_survivor_order() {
        let result = sample();

        let filtered = result.filter(|l| {
            if l.name() == "team" {
                None
            } else {
                Some(l.clone())
            }
        });

        let names: Vec<&str> = filtered.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["env", "tier"]);
    }

    #[test]
    fn test_filter_drop_all_is_empty() {
        let result = sample();

        let filtered = result.filter(|_| None);

        assert!(filtered.is_empty());
        assert_eq!(filtered.len(), 0);
    }

    #[test]
    fn test_filter_identity_is_independent_copy() {
        let result = sample();

        let copied = result.filter(|l| Some(l.clone()));

        assert_eq!(copied, result);
        // dropping the copy must leave the original intact
        drop(copied);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_filter_can_transform_survivors() {
        let result = sample();

        let upper = result.filter(|l| {
            let mut l = l.clone();
            l.set_value(l.value().to_uppercase());
            Some(l)
        });

        assert_eq!(upper.items()[0], Label::new("env", "PROD"));
        // the receiver keeps its original values
        assert_eq!(result.items()[0], Label::new("env", "prod"));
    }

    #[test]
    fn test_iteration_over_borrow_and_owned() {
        let result = sample();

        let borrowed: Vec<&str> = (&result).into_iter().map(|l| l.name()).collect();
        assert_eq!(borrowed, vec!["env", "team", "tier"]);

        let owned: Vec<Label> = result.into_iter().collect();
        assert_eq!(owned.len(), 3);
    }
}
