// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=yearline_view --heading-base-level=0

//! Yearline View: the render context tying the engine together.
//!
//! [`TimelineView`] owns the full person set plus every piece of
//! presentation state — zoom, filter, cluster expansion, metrics, citation
//! configuration — and derives nothing until asked. One synchronous
//! [`TimelineView::render`] call runs the three phases in order:
//!
//! 1. **Filter** the person set ([`yearline_filter`]).
//! 2. **Layout** the survivors under the zoomed scale
//!    ([`yearline_layout`]).
//! 3. **Resolve** citations and build the line set against that layout
//!    ([`yearline_links`]).
//!
//! and returns a [`Frame`]: persons, positioned anchors, and connection
//! lines that are consistent with each other by construction. State
//! changes between renders are just recorded; a host reacts to any mutator
//! that reports a change by rendering again and swapping the whole frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use yearline_layout::ScaleConfig;
//! use yearline_model::sample_rows;
//! use yearline_view::TimelineView;
//!
//! let mut view = TimelineView::from_rows(sample_rows(), ScaleConfig::default());
//! let frame = view.render();
//! assert_eq!(frame.layout.rows().len(), frame.persons.len());
//!
//! if view.zoom_in() {
//!     let zoomed = view.render();
//!     assert_eq!(zoomed.persons.len(), frame.persons.len());
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod view;

pub use view::{Frame, TimelineView};
