// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-person timelines aggregated from normalized event records.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::record::{Category, EventRecord};

/// One person's timeline: their events plus derived lifespan data.
///
/// Timelines are built fresh by [`PersonSet::aggregate`] on every pass and
/// never mutated incrementally; a new aggregation supersedes the previous
/// one wholesale.
#[derive(Clone, Debug)]
pub struct PersonTimeline {
    name: String,
    events: Vec<EventRecord>,
    birth_year: Option<i32>,
    death_year: Option<i32>,
    attribution: Option<String>,
}

impl PersonTimeline {
    fn new(name: String) -> Self {
        Self {
            name,
            events: Vec::new(),
            birth_year: None,
            death_year: None,
            attribution: None,
        }
    }

    /// The person's name, the case-sensitive grouping key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All of the person's events, in input order. Includes birth/death.
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Birth year from the `birth` record, if one was present.
    #[must_use]
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    /// Death year from the `death` record, if one was present.
    #[must_use]
    pub fn death_year(&self) -> Option<i32> {
        self.death_year
    }

    /// The person's attribution, if any record carried one.
    ///
    /// Birth/death records take precedence (last one wins); other
    /// categories contribute only while no attribution is set yet.
    #[must_use]
    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    /// The attribution, falling back to [`crate::DEFAULT_ATTRIBUTION`].
    #[must_use]
    pub fn attribution_or_default(&self) -> &str {
        self.attribution.as_deref().unwrap_or(crate::DEFAULT_ATTRIBUTION)
    }

    fn push(&mut self, record: EventRecord) {
        match record.category {
            Category::Birth => {
                self.birth_year = Some(record.year);
                self.attribution = Some(record.attribution.clone());
            }
            Category::Death => {
                self.death_year = Some(record.year);
                self.attribution = Some(record.attribution.clone());
            }
            Category::Other(_) => {
                if self.attribution.is_none() {
                    self.attribution = Some(record.attribution.clone());
                }
            }
        }
        self.events.push(record);
    }
}

/// An insertion-ordered set of [`PersonTimeline`]s.
///
/// Every person referenced by any input record appears exactly once, in
/// the order of their first occurrence in the input sequence. Downstream
/// layout consumes that order for stable row placement.
#[derive(Clone, Debug, Default)]
pub struct PersonSet {
    persons: Vec<PersonTimeline>,
    index: HashMap<String, usize>,
}

impl PersonSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups records into per-person timelines.
    ///
    /// See [`PersonTimeline`] for the derivation rules applied per record.
    #[must_use]
    pub fn aggregate<I>(records: I) -> Self
    where
        I: IntoIterator<Item = EventRecord>,
    {
        let mut set = Self::new();
        for record in records {
            let idx = match set.index.get(&record.name) {
                Some(&idx) => idx,
                None => {
                    let idx = set.persons.len();
                    set.index.insert(record.name.clone(), idx);
                    set.persons.push(PersonTimeline::new(record.name.clone()));
                    idx
                }
            };
            set.persons[idx].push(record);
        }
        set
    }

    /// Number of persons in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Returns `true` if the set holds no persons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Looks a person up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PersonTimeline> {
        self.index.get(name).map(|&idx| &self.persons[idx])
    }

    /// Returns the timeline at the given insertion index.
    #[must_use]
    pub fn get_index(&self, idx: usize) -> Option<&PersonTimeline> {
        self.persons.get(idx)
    }

    /// Returns the insertion index of a person, if present.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns `true` if the set contains the given person.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over timelines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PersonTimeline> {
        self.persons.iter()
    }

    /// Iterates over person names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.persons.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::PersonSet;
    use crate::record::{Category, EventRecord};

    fn record(name: &str, year: i32, category: Category, attribution: &str) -> EventRecord {
        EventRecord {
            year,
            category,
            name: String::from(name),
            attribution: String::from(attribution),
            title: String::new(),
            description: None,
        }
    }

    #[test]
    fn insertion_order_follows_first_occurrence() {
        let set = PersonSet::aggregate([
            record("b", 1900, Category::Other(String::from("x")), "a1"),
            record("a", 1901, Category::Other(String::from("x")), "a2"),
            record("b", 1902, Category::Other(String::from("x")), "a3"),
        ]);
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(set.position("b"), Some(0));
        assert_eq!(set.get("b").unwrap().events().len(), 2);
    }

    #[test]
    fn lifespan_attribution_outranks_first_write() {
        // A non-lifespan record arrives first; its attribution holds only
        // until a birth record overwrites it.
        let set = PersonSet::aggregate([
            record("x", 1910, Category::Other(String::from("essay")), "writer"),
            record("x", 1880, Category::Birth, "architect"),
        ]);
        assert_eq!(set.get("x").unwrap().attribution(), Some("architect"));
    }

    #[test]
    fn last_birth_record_wins() {
        let set = PersonSet::aggregate([
            record("x", 1880, Category::Birth, "a"),
            record("x", 1881, Category::Birth, "b"),
        ]);
        let x = set.get("x").unwrap();
        assert_eq!(x.birth_year(), Some(1881));
        assert_eq!(x.attribution(), Some("b"));
    }

    #[test]
    fn non_lifespan_attribution_is_first_write_wins() {
        let set = PersonSet::aggregate([
            record("x", 1900, Category::Other(String::from("essay")), "writer"),
            record("x", 1901, Category::Other(String::from("artwork")), "artist"),
        ]);
        assert_eq!(set.get("x").unwrap().attribution(), Some("writer"));
    }
}
