// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=yearline_links --heading-base-level=0

//! Yearline Links: citation-driven connection lines between timeline events.
//!
//! Event descriptions can cite other events by title using a paired
//! delimiter syntax (`「落水荘」` style, see [`CitationSyntax`]). This
//! crate turns those citations into line geometry between the cited
//! elements of a finished layout:
//!
//! - [`CitationSyntax::citations`]: extracts every non-overlapping
//!   citation from a description.
//! - [`resolve_references`]: matches citations against a title index of
//!   the layout's anchors. Members of collapsed groups resolve to their
//!   enclosing group; self-references and invisible targets resolve to
//!   nothing. Duplicate-title handling is governed by [`MatchPolicy`].
//! - [`build_lines`]: computes center-to-center endpoints, length, and
//!   rotation for each resolved pair, hiding degenerate (near-zero-length)
//!   lines and duplicate unordered pairs.
//!
//! The line set is a pure derivation: every recompute pass rebuilds it
//! from scratch against the current layout, which is what keeps lines
//! consistent across zoom, filtering, and expand/collapse changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use yearline_layout::{ExpandedGroups, Layout, LayoutMetrics, ScaleConfig};
//! use yearline_links::{CitationSyntax, MatchPolicy, build_lines, resolve_references};
//! use yearline_model::{PersonSet, RawRow, YearField, normalize_rows};
//!
//! let row = |year: i64, title: &str, description: Option<&str>| RawRow {
//!     year: Some(YearField::Number(year)),
//!     category: Some("building".into()),
//!     name: Some("X".into()),
//!     attribution: None,
//!     title: Some(title.into()),
//!     description: description.map(Into::into),
//! };
//!
//! let persons = PersonSet::aggregate(normalize_rows(vec![
//!     row(1920, "Event A", Some("influenced by 「Event B」")),
//!     row(1930, "Event B", None),
//! ]));
//! let layout = Layout::compute(
//!     &persons,
//!     &ScaleConfig::new(1850, 2025, 200.0),
//!     &ExpandedGroups::new(),
//!     LayoutMetrics::default(),
//! );
//!
//! let resolved = resolve_references(
//!     &persons,
//!     &layout,
//!     CitationSyntax::CORNER_BRACKETS,
//!     MatchPolicy::FanOut,
//! );
//! let lines = build_lines(&layout, &resolved);
//! assert_eq!(lines.iter().filter(|l| !l.hidden).count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cite;
mod line;
mod resolve;

pub use cite::{CitationSyntax, Citations};
pub use line::{ConnectionLine, MIN_VISIBLE_LENGTH, build_lines};
pub use resolve::{MatchPolicy, ResolvedConnection, resolve_references};
