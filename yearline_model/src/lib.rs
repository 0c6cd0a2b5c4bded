// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=yearline_model --heading-base-level=0

//! Yearline Model: event records, person timelines, and year buckets.
//!
//! This crate is the data backbone of Yearline, a headless engine for
//! horizontal, zoomable biographical timelines. It turns the flat row
//! sequences delivered by external data-source loaders into the structures
//! the layout and reference-resolution crates consume:
//!
//! - [`RawRow`] / [`normalize_rows`]: lenient normalization of loader rows
//!   into [`EventRecord`]s. Rows missing a person name or a usable year are
//!   dropped silently; nothing here panics or fails the pipeline.
//! - [`PersonSet`]: per-person timelines aggregated from records, with
//!   derived birth/death years and attribution, in first-occurrence order.
//! - [`group_by_year`] / [`YearBucket`]: same-year event clusters, the
//!   basis for collapsed-group rendering.
//! - [`RowSource`] / [`merge_sources`]: the loader seam. Sources are
//!   fetched independently; a failing source contributes zero rows, and
//!   when every source fails a built-in sample dataset is substituted so
//!   the timeline always has something to show.
//!
//! This crate deliberately does **not** fetch or parse anything itself.
//! CSV retrieval and tabular parsing live in loader collaborators behind
//! [`RowSource`]; presentation concerns live above the layout crates.
//!
//! ## Minimal example
//!
//! ```rust
//! use yearline_model::{PersonSet, RawRow, YearField, normalize_rows};
//!
//! let rows = vec![
//!     RawRow {
//!         year: Some(YearField::Number(1867)),
//!         category: Some("birth".into()),
//!         name: Some("Wright".into()),
//!         attribution: Some("architect".into()),
//!         title: Some("Wright born".into()),
//!         description: None,
//!     },
//!     RawRow {
//!         // A year delivered as text normalizes to the same integer.
//!         year: Some(YearField::Text("1959".into())),
//!         category: Some("death".into()),
//!         name: Some("Wright".into()),
//!         attribution: Some("architect".into()),
//!         title: Some("Wright dies".into()),
//!         description: None,
//!     },
//! ];
//!
//! let persons = PersonSet::aggregate(normalize_rows(rows));
//! let wright = persons.get("Wright").unwrap();
//! assert_eq!(wright.birth_year(), Some(1867));
//! assert_eq!(wright.death_year(), Some(1959));
//! assert_eq!(wright.attribution(), Some("architect"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bucket;
mod person;
mod record;
mod sample;
mod source;

pub use bucket::{YearBucket, group_by_year};
pub use person::{PersonSet, PersonTimeline};
pub use record::{Category, DEFAULT_ATTRIBUTION, EventRecord, RawRow, YearField, normalize_row, normalize_rows};
pub use sample::sample_rows;
pub use source::{LoadNotice, LoadOutcome, RowSource, SourceError, StaticSource, merge_sources};
