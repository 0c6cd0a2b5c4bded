// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit expand/collapse state for same-year event groups.

use alloc::string::String;

use hashbrown::{HashMap, HashSet};

/// Which event groups are currently expanded.
///
/// Clusters are identified by `(person name, year)` — names rather than row
/// indices, because filtering renumbers rows while this state must survive
/// it. Groups default to collapsed; only expanded ones are recorded.
///
/// This is the data-model source of truth for collapse state. Layout and
/// reference resolution read it directly; nothing is ever inferred from
/// rendered output.
#[derive(Clone, Debug, Default)]
pub struct ExpandedGroups {
    expanded: HashMap<String, HashSet<i32>>,
}

impl ExpandedGroups {
    /// Creates a state with every group collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the given cluster is expanded.
    #[must_use]
    pub fn is_expanded(&self, person: &str, year: i32) -> bool {
        self.expanded.get(person).is_some_and(|years| years.contains(&year))
    }

    /// Toggles a cluster and returns its new expanded state.
    pub fn toggle(&mut self, person: &str, year: i32) -> bool {
        if self.is_expanded(person, year) {
            self.collapse(person, year);
            false
        } else {
            self.expand(person, year);
            true
        }
    }

    /// Expands a cluster.
    pub fn expand(&mut self, person: &str, year: i32) {
        self.expanded.entry(String::from(person)).or_default().insert(year);
    }

    /// Collapses a cluster.
    pub fn collapse(&mut self, person: &str, year: i32) {
        if let Some(years) = self.expanded.get_mut(person) {
            years.remove(&year);
            if years.is_empty() {
                self.expanded.remove(person);
            }
        }
    }

    /// Collapses every cluster.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
