// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=yearline_layout --heading-base-level=0

//! Yearline Layout: headless geometry for a zoomable horizontal timeline.
//!
//! This crate converts aggregated person timelines into positioned visual
//! anchors: lifespan bands, single-event cells, collapsed-group cells, and
//! expanded group members. It owns all coordinate math; no rendering
//! surface is involved and none is needed to test it.
//!
//! The core pieces:
//!
//! - [`ScaleConfig`]: the year→pixel mapping
//!   (`(year − start_year) · pixels_per_year · zoom`).
//! - [`ZoomControl`]: bounded zoom stepping for zoom controls.
//! - [`Anchor`] / [`AnchorArena`]: each rendered element's logical
//!   identity and bounding box, retaining its source years as data.
//! - [`ExpandedGroups`]: explicit per-cluster collapse state, keyed by
//!   `(person name, year)`.
//! - [`Layout::compute`]: the layout pass; [`Layout::relayout`]: rect
//!   recomputation for a new zoom, rederived from the stored years so
//!   rounding error never compounds.
//!
//! Bands clamp to the display window: a birth year before `start_year`
//! pins the band's left edge to the origin, and a death year past
//! `end_year` pins its right edge to the window end. Out-of-window years
//! are clamped, never reported as errors.
//!
//! ## Minimal example
//!
//! ```rust
//! use yearline_layout::{ExpandedGroups, Layout, LayoutMetrics, ScaleConfig};
//! use yearline_model::{PersonSet, RawRow, YearField, normalize_rows};
//!
//! let rows = vec![
//!     RawRow {
//!         year: Some(YearField::Number(1867)),
//!         category: Some("birth".into()),
//!         name: Some("X".into()),
//!         attribution: Some("architect".into()),
//!         title: Some("X born".into()),
//!         description: None,
//!     },
//!     RawRow {
//!         year: Some(YearField::Number(1959)),
//!         category: Some("death".into()),
//!         name: Some("X".into()),
//!         attribution: Some("architect".into()),
//!         title: Some("X dies".into()),
//!         description: None,
//!     },
//! ];
//! let persons = PersonSet::aggregate(normalize_rows(rows));
//!
//! let scale = ScaleConfig::new(1850, 2025, 200.0);
//! let layout = Layout::compute(&persons, &scale, &ExpandedGroups::new(), LayoutMetrics::default());
//!
//! let band = &layout.anchors()[layout.rows()[0].band];
//! assert_eq!(band.rect.x0, (1867 - 1850) as f64 * 200.0);
//! assert_eq!(band.rect.width(), (1959 - 1867) as f64 * 200.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod groups;
mod layout;
mod scale;
mod zoom;

pub use anchor::{Anchor, AnchorArena, AnchorFlags, AnchorId, AnchorKind};
pub use groups::ExpandedGroups;
pub use layout::{CellLayout, Layout, LayoutMetrics, PersonRow};
pub use scale::ScaleConfig;
pub use zoom::ZoomControl;
