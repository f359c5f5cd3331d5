//! Inheritance resolver.
//!
//! Aggregates the properties a kind declares with those of its ancestors,
//! most specific first.

use crate::catalog::{self, PropertyDescriptor};
use crate::kind::WidgetKind;
use std::collections::HashSet;

/// `kind` followed by its ancestors, nearest first, each at most once.
pub fn lineage(kind: WidgetKind) -> Vec<WidgetKind> {
    let mut visited = HashSet::new();
    kind.chain().filter(|k| visited.insert(*k)).collect()
}

/// Every property editable on `kind`, own properties first, root last.
///
/// A name contributed by a more specific kind hides the same name further up
/// the chain.
pub fn effective_properties(kind: WidgetKind) -> Vec<&'static PropertyDescriptor> {
    let mut seen = HashSet::new();
    lineage(kind)
        .into_iter()
        .flat_map(catalog::declared_properties)
        .filter(|descriptor| seen.insert(descriptor.key()))
        .collect()
}

/// Find the descriptor `name` resolves to on `kind`, searching the chain.
pub fn resolve_property(kind: WidgetKind, name: &str) -> Option<&'static PropertyDescriptor> {
    lineage(kind)
        .into_iter()
        .find_map(|k| catalog::descriptor(k, name))
}
