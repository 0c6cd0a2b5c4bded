// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Year buckets: same-year clusters of a person's non-lifespan events.

use alloc::vec::Vec;

use crate::record::{Category, EventRecord};

/// The non-lifespan events of one person sharing a single year.
///
/// A bucket of size 1 renders as a plain event cell; size 2 or more
/// renders as a collapsible group with per-category count badges.
/// Members are stored as indices into the event slice the bucket was
/// grouped from, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearBucket {
    year: i32,
    events: Vec<usize>,
}

impl YearBucket {
    /// The shared event year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Member indices into the grouped event slice, in input order.
    #[must_use]
    pub fn events(&self) -> &[usize] {
        &self.events
    }

    /// Number of events in the bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the bucket holds no events.
    ///
    /// [`group_by_year`] never produces empty buckets; this exists for API
    /// completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns `true` when the bucket must render as a collapsible group.
    #[must_use]
    pub fn is_cluster(&self) -> bool {
        self.events.len() >= 2
    }

    /// Per-category member counts, in first-seen category order.
    ///
    /// This feeds the count badges on a collapsed group's header.
    #[must_use]
    pub fn category_counts<'a>(&self, events: &'a [EventRecord]) -> Vec<(&'a Category, usize)> {
        let mut counts: Vec<(&Category, usize)> = Vec::new();
        for &idx in &self.events {
            let category = &events[idx].category;
            match counts.iter_mut().find(|(c, _)| *c == category) {
                Some((_, n)) => *n += 1,
                None => counts.push((category, 1)),
            }
        }
        counts
    }
}

/// Groups a person's non-lifespan events by year.
///
/// Birth and death records are excluded; they render as the lifespan band,
/// not as cells. Buckets come back sorted by year, numerically ascending,
/// using a stable sort: events sharing a year keep their relative input
/// order inside the bucket.
#[must_use]
pub fn group_by_year(events: &[EventRecord]) -> Vec<YearBucket> {
    let mut buckets: Vec<YearBucket> = Vec::new();
    for (idx, event) in events.iter().enumerate() {
        if event.category.is_lifespan() {
            continue;
        }
        match buckets.iter_mut().find(|b| b.year == event.year) {
            Some(bucket) => bucket.events.push(idx),
            None => buckets.push(YearBucket {
                year: event.year,
                events: alloc::vec![idx],
            }),
        }
    }
    buckets.sort_by_key(|b| b.year);
    buckets
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::group_by_year;
    use crate::record::{Category, EventRecord};

    fn event(year: i32, category: Category) -> EventRecord {
        EventRecord {
            year,
            category,
            name: String::from("y"),
            attribution: String::from("default"),
            title: String::new(),
            description: None,
        }
    }

    #[test]
    fn same_year_events_share_a_bucket() {
        let events = [
            event(1920, Category::Other(String::from("building"))),
            event(1920, Category::Other(String::from("publication"))),
            event(1910, Category::Other(String::from("building"))),
        ];
        let buckets = group_by_year(&events);
        assert_eq!(buckets.len(), 2);
        // Sorted numerically ascending.
        assert_eq!(buckets[0].year(), 1910);
        assert_eq!(buckets[1].year(), 1920);
        assert!(buckets[1].is_cluster());
        assert_eq!(buckets[1].events(), [0, 1]);
    }

    #[test]
    fn lifespan_events_are_excluded() {
        let events = [
            event(1880, Category::Birth),
            event(1900, Category::Other(String::from("artwork"))),
            event(1950, Category::Death),
        ];
        let buckets = group_by_year(&events);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].year(), 1900);
    }

    #[test]
    fn category_counts_keep_first_seen_order() {
        let events = [
            event(1920, Category::Other(String::from("publication"))),
            event(1920, Category::Other(String::from("building"))),
            event(1920, Category::Other(String::from("publication"))),
        ];
        let buckets = group_by_year(&events);
        let counts = buckets[0].category_counts(&events);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].0.as_str(), "publication");
        assert_eq!(counts[0].1, 2);
        assert_eq!(counts[1].0.as_str(), "building");
        assert_eq!(counts[1].1, 1);
    }

    #[test]
    fn numeric_ordering_not_lexical() {
        let events = [
            event(998, Category::Other(String::from("x"))),
            event(1005, Category::Other(String::from("x"))),
        ];
        let buckets = group_by_year(&events);
        assert_eq!(buckets[0].year(), 998);
        assert_eq!(buckets[1].year(), 1005);
    }
}
