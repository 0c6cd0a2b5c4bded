// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=yearline_filter --heading-base-level=0

//! Yearline Filter: narrowing a person set before layout.
//!
//! A [`FilterSpec`] combines three independent gates:
//!
//! - **Text search**: whitespace-split, case-insensitive terms matched
//!   against a person's name or any single event's title and description,
//!   combined per [`TermMode`] (`Any` = OR, `All` = AND).
//! - **Attribution**: pass everyone, or only persons with one exact
//!   attribution (persons without one count as the default attribution).
//! - **Categories**: an optional multi-select over event categories.
//!   `birth` and `death` events are always retained so lifespan bands
//!   survive filtering; a person is dropped once no other events remain
//!   while at least one category is selected.
//!
//! [`FilterSpec::apply`] produces a *fresh* [`PersonSet`], re-aggregated
//! from the retained records, so the downstream layout and reference
//! passes see filtered data through exactly the same shape as unfiltered
//! data. Filtering is monotonic (the output is always a subset of the
//! input) and the empty spec is the identity.
//!
//! ## Minimal example
//!
//! ```rust
//! use yearline_filter::FilterSpec;
//! use yearline_model::{PersonSet, normalize_rows, sample_rows};
//!
//! let persons = PersonSet::aggregate(normalize_rows(sample_rows()));
//! let filtered = FilterSpec::with_query("ライト").apply(&persons);
//! assert!(filtered.len() <= persons.len());
//! assert!(FilterSpec::new().apply(&persons).len() == persons.len());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use yearline_model::{Category, EventRecord, PersonSet, PersonTimeline};

/// How multiple search terms combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TermMode {
    /// A candidate passes when any term matches (the reference behavior).
    #[default]
    Any,
    /// A candidate passes only when every term matches.
    All,
}

/// The attribution gate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AttributionFilter {
    /// No restriction.
    #[default]
    All,
    /// Only persons whose attribution equals this value exactly. A person
    /// with no recorded attribution compares as
    /// [`yearline_model::DEFAULT_ATTRIBUTION`].
    Only(String),
}

/// A complete filter configuration.
///
/// The default spec is the identity: no terms, all attributions, no
/// category restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    terms: Vec<String>,
    mode: TermMode,
    attribution: AttributionFilter,
    /// `None` leaves every category in. `Some` retains only the listed
    /// categories (plus lifespan events); an empty selection strips all
    /// non-lifespan events without dropping anyone.
    categories: Option<Vec<String>>,
}

impl FilterSpec {
    /// Creates the identity filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter from a free-text query, with defaults elsewhere.
    #[must_use]
    pub fn with_query(query: &str) -> Self {
        let mut spec = Self::new();
        spec.set_query(query);
        spec
    }

    /// Replaces the search terms with the whitespace-split, lowercased
    /// words of `query`.
    pub fn set_query(&mut self, query: &str) {
        self.terms = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
    }

    /// Sets how multiple terms combine.
    pub fn set_mode(&mut self, mode: TermMode) {
        self.mode = mode;
    }

    /// Sets the attribution gate.
    pub fn set_attribution(&mut self, attribution: AttributionFilter) {
        self.attribution = attribution;
    }

    /// Sets the category multi-select; `None` removes the restriction.
    pub fn set_categories(&mut self, categories: Option<Vec<String>>) {
        self.categories = categories;
    }

    /// Returns `true` if applying this spec can never remove anything.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.terms.is_empty()
            && self.attribution == AttributionFilter::All
            && self.categories.is_none()
    }

    /// Applies the filter, producing a fresh person set.
    ///
    /// Persons are visited in insertion order and retained records are
    /// re-aggregated, so the output preserves the input's relative person
    /// order and re-derives lifespans and attributions from the surviving
    /// records alone.
    #[must_use]
    pub fn apply(&self, persons: &PersonSet) -> PersonSet {
        let mut retained: Vec<EventRecord> = Vec::new();
        for person in persons.iter() {
            if !self.passes_attribution(person) || !self.passes_text(person) {
                continue;
            }
            let Some(events) = self.selected_events(person) else {
                continue;
            };
            retained.extend(events.into_iter().cloned());
        }
        PersonSet::aggregate(retained)
    }

    fn passes_attribution(&self, person: &PersonTimeline) -> bool {
        match &self.attribution {
            AttributionFilter::All => true,
            AttributionFilter::Only(wanted) => person.attribution_or_default() == wanted,
        }
    }

    fn passes_text(&self, person: &PersonTimeline) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        if self.matches_terms(&person.name().to_lowercase()) {
            return true;
        }
        person.events().iter().any(|event| {
            let mut text = event.title.to_lowercase();
            if let Some(description) = &event.description {
                text.push(' ');
                text.push_str(&description.to_lowercase());
            }
            self.matches_terms(&text)
        })
    }

    fn matches_terms(&self, text: &str) -> bool {
        match self.mode {
            TermMode::Any => self.terms.iter().any(|term| text.contains(term.as_str())),
            TermMode::All => self.terms.iter().all(|term| text.contains(term.as_str())),
        }
    }

    /// The person's retained events, or `None` when the person is dropped
    /// by the category gate.
    fn selected_events<'a>(&self, person: &'a PersonTimeline) -> Option<Vec<&'a EventRecord>> {
        let Some(selection) = &self.categories else {
            return Some(person.events().iter().collect());
        };
        let events: Vec<&EventRecord> = person
            .events()
            .iter()
            .filter(|event| match &event.category {
                Category::Birth | Category::Death => true,
                Category::Other(label) => selection.iter().any(|s| s == label),
            })
            .collect();
        let has_non_lifespan = events.iter().any(|e| !e.category.is_lifespan());
        if !selection.is_empty() && !has_non_lifespan {
            return None;
        }
        Some(events)
    }
}
