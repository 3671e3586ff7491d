use crate::models::Activity;
use crate::query::filter::ActivityFilter;

/// A composed feed query: the set union of filter terms.
///
/// Union semantics are part of the contract. A row matched by several terms
/// appears exactly once in the executed result, and a query with no terms
/// selects nothing (the union over an empty set). Terms keep their
/// composition order, though execution order never affects the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    terms: Vec<ActivityFilter>,
}

impl FeedQuery {
    /// Query selecting exactly the rows matched by one filter.
    pub fn from_filter(filter: ActivityFilter) -> Self {
        Self { terms: vec![filter] }
    }

    /// Query selecting the union of the given terms.
    pub fn from_terms(terms: Vec<ActivityFilter>) -> Self {
        Self { terms }
    }

    /// Adds one more term to the union.
    pub fn union(mut self, filter: ActivityFilter) -> Self {
        self.terms.push(filter);
        self
    }

    /// The union's terms, in composition order.
    pub fn terms(&self) -> &[ActivityFilter] {
        &self.terms
    }

    /// Evaluates the union against one row: true when any term matches.
    pub fn matches(&self, activity: &Activity) -> bool {
        self.terms.iter().any(|term| term.matches(activity))
    }
}
