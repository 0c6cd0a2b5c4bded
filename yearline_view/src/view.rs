// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render context and its output frame.

use alloc::vec::Vec;

use yearline_filter::FilterSpec;
use yearline_layout::{ExpandedGroups, Layout, LayoutMetrics, ScaleConfig, ZoomControl};
use yearline_links::{CitationSyntax, ConnectionLine, MatchPolicy, build_lines, resolve_references};
use yearline_model::{LoadNotice, PersonSet, RawRow, RowSource, merge_sources, normalize_rows};

/// One complete, internally consistent render result.
///
/// A frame is a value: it never changes after [`TimelineView::render`]
/// returns, and a later render replaces it wholesale. The layout's anchor
/// ids and the lines' endpoints are only meaningful within the same frame.
#[derive(Clone, Debug)]
pub struct Frame {
    /// The persons that survived filtering, in input order.
    pub persons: PersonSet,
    /// Positioned bands, cells, and group members for those persons.
    pub layout: Layout,
    /// The connection-line set, including hidden lines.
    pub lines: Vec<ConnectionLine>,
    /// Data-acquisition notice carried over from loading, if any.
    pub notice: Option<LoadNotice>,
}

impl Frame {
    /// Iterates over the lines the renderer should actually draw.
    pub fn visible_lines(&self) -> impl Iterator<Item = &ConnectionLine> {
        self.lines.iter().filter(|line| !line.hidden)
    }
}

/// The timeline's render context.
///
/// Owns the full (unfiltered) person set together with all presentation
/// state: zoom, filter, per-cluster expansion, vertical metrics, and the
/// citation configuration. Mutators only record state; nothing is derived
/// until [`TimelineView::render`] runs its three phases — filter, layout,
/// reference resolution — and returns a fresh [`Frame`]. Callers re-render
/// after any mutator that returns `true`.
#[derive(Clone, Debug)]
pub struct TimelineView {
    persons: PersonSet,
    scale: ScaleConfig,
    zoom: ZoomControl,
    filter: FilterSpec,
    expanded: ExpandedGroups,
    metrics: LayoutMetrics,
    syntax: CitationSyntax,
    policy: MatchPolicy,
    notice: Option<LoadNotice>,
}

impl TimelineView {
    /// Creates a view over an already-aggregated person set.
    #[must_use]
    pub fn new(persons: PersonSet, scale: ScaleConfig) -> Self {
        Self {
            persons,
            scale,
            zoom: ZoomControl::default(),
            filter: FilterSpec::new(),
            expanded: ExpandedGroups::new(),
            metrics: LayoutMetrics::default(),
            syntax: CitationSyntax::default(),
            policy: MatchPolicy::default(),
            notice: None,
        }
    }

    /// Creates a view from raw rows, dropping malformed ones.
    #[must_use]
    pub fn from_rows(rows: Vec<RawRow>, scale: ScaleConfig) -> Self {
        Self::new(PersonSet::aggregate(normalize_rows(rows)), scale)
    }

    /// Creates a view by merging several row sources.
    ///
    /// Failing sources contribute zero rows; if every source fails the
    /// built-in sample dataset is substituted. Either way the view carries
    /// a [`LoadNotice`] for the presentation layer when something went
    /// wrong — loading never fails the construction itself.
    #[must_use]
    pub fn from_sources<'a, I>(sources: I, scale: ScaleConfig) -> Self
    where
        I: IntoIterator<Item = &'a mut dyn RowSource>,
    {
        let outcome = merge_sources(sources);
        let notice = outcome.notice();
        let mut view = Self::from_rows(outcome.rows, scale);
        view.notice = notice;
        view
    }

    /// The full, unfiltered person set.
    #[must_use]
    pub fn persons(&self) -> &PersonSet {
        &self.persons
    }

    /// The scale at the current zoom level.
    #[must_use]
    pub fn scale(&self) -> ScaleConfig {
        self.scale.with_zoom(self.zoom.level())
    }

    /// The zoom state.
    #[must_use]
    pub fn zoom(&self) -> &ZoomControl {
        &self.zoom
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// The data-acquisition notice, if loading left one.
    #[must_use]
    pub fn notice(&self) -> Option<LoadNotice> {
        self.notice
    }

    /// Replaces the filter.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
    }

    /// Replaces the vertical metrics.
    pub fn set_metrics(&mut self, metrics: LayoutMetrics) {
        self.metrics = metrics;
    }

    /// Replaces the citation delimiters.
    pub fn set_citation_syntax(&mut self, syntax: CitationSyntax) {
        self.syntax = syntax;
    }

    /// Replaces the duplicate-title policy.
    pub fn set_match_policy(&mut self, policy: MatchPolicy) {
        self.policy = policy;
    }

    /// Steps the zoom up. Returns `true` if the level changed.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom.zoom_in()
    }

    /// Steps the zoom down. Returns `true` if the level changed.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom.zoom_out()
    }

    /// Sets the zoom level, clamped. Returns `true` if it changed.
    pub fn set_zoom(&mut self, level: f64) -> bool {
        self.zoom.set_level(level)
    }

    /// Resets the zoom to 1. Returns `true` if it changed.
    pub fn reset_zoom(&mut self) -> bool {
        self.zoom.reset()
    }

    /// Toggles one cluster's expansion. Returns the new state.
    pub fn toggle_group(&mut self, person: &str, year: i32) -> bool {
        self.expanded.toggle(person, year)
    }

    /// Collapses every expanded cluster.
    pub fn collapse_all(&mut self) {
        self.expanded.collapse_all();
    }

    /// Runs one full derivation pass.
    ///
    /// Filter, layout, and reference resolution always run together and in
    /// that order, against the state recorded at call time. The returned
    /// frame is complete; there is no partially updated intermediate state
    /// to observe.
    #[must_use]
    pub fn render(&self) -> Frame {
        let persons = self.filter.apply(&self.persons);
        let scale = self.scale();
        let layout = Layout::compute(&persons, &scale, &self.expanded, self.metrics);
        let resolved = resolve_references(&persons, &layout, self.syntax, self.policy);
        let lines = build_lines(&layout, &resolved);
        Frame {
            persons,
            layout,
            lines,
            notice: self.notice,
        }
    }
}
