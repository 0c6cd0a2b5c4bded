// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass: persons and buckets in, positioned anchors out.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use yearline_model::{PersonSet, group_by_year};

use crate::anchor::{AnchorArena, AnchorFlags, AnchorId, AnchorKind};
use crate::groups::ExpandedGroups;
use crate::scale::ScaleConfig;

/// Vertical metrics of the timeline, in layout units.
///
/// Horizontal geometry comes entirely from [`ScaleConfig`]; this struct
/// supplies everything vertical: the header strip, per-person row pitch,
/// band and cell placement within a row, and the stacking height of
/// expanded group members.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Height of the year-marker header strip.
    pub header_height: f64,
    /// Height of one person row.
    pub row_height: f64,
    /// Offset of the lifespan band from the row top.
    pub band_top: f64,
    /// Height of the lifespan band.
    pub band_height: f64,
    /// Offset of event/group cells from the row top.
    pub cell_top: f64,
    /// Height of an event or group cell.
    pub cell_height: f64,
    /// Height of one expanded group member.
    pub member_height: f64,
    /// Years between adjacent year markers in the header.
    pub years_per_marker: i32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            header_height: 40.0,
            row_height: 140.0,
            band_top: 8.0,
            band_height: 24.0,
            cell_top: 40.0,
            cell_height: 72.0,
            member_height: 28.0,
            years_per_marker: 1,
        }
    }
}

impl LayoutMetrics {
    /// Top edge of the given person row.
    #[must_use]
    pub fn row_top(&self, row: usize) -> f64 {
        self.header_height + row as f64 * self.row_height
    }

    /// Horizontal pitch between adjacent year markers.
    ///
    /// Uses the same formula as cell widths so markers and cells stay
    /// aligned at every zoom level.
    #[must_use]
    pub fn marker_pitch(&self, scale: &ScaleConfig) -> f64 {
        scale.year_width() * f64::from(self.years_per_marker)
    }
}

/// One positioned cell in a person row.
#[derive(Clone, Debug)]
pub enum CellLayout {
    /// A lone event in its year.
    Single {
        /// The event's anchor.
        anchor: AnchorId,
    },
    /// A same-year cluster of two or more events.
    Group {
        /// The group header's anchor.
        anchor: AnchorId,
        /// Whether the group is currently expanded.
        expanded: bool,
        /// Member anchors, in bucket order.
        members: Vec<AnchorId>,
        /// Per-category member counts for the header badges,
        /// in first-seen category order.
        badges: Vec<(String, usize)>,
    },
}

impl CellLayout {
    /// The cell's own anchor (the event for singles, the header for groups).
    #[must_use]
    pub fn anchor(&self) -> AnchorId {
        match self {
            Self::Single { anchor } | Self::Group { anchor, .. } => *anchor,
        }
    }
}

/// One person's positioned row.
#[derive(Clone, Debug)]
pub struct PersonRow {
    /// Index into the laid-out [`PersonSet`].
    pub person: usize,
    /// The lifespan band's anchor.
    pub band: AnchorId,
    /// Event and group cells, sorted by year ascending.
    pub cells: Vec<CellLayout>,
}

/// A complete layout pass over a person set.
///
/// Owns the anchor arena plus the per-person row structure. Layouts are
/// value types: a new pass replaces the previous layout wholesale, and
/// [`Layout::relayout`] rewrites every rect in place from the logical years
/// the anchors retain.
#[derive(Clone, Debug)]
pub struct Layout {
    anchors: AnchorArena,
    rows: Vec<PersonRow>,
    metrics: LayoutMetrics,
}

impl Layout {
    /// Lays out a person set under the given scale and collapse state.
    ///
    /// Pure with respect to its inputs: identical persons, scale, collapse
    /// state, and metrics produce identical coordinates.
    #[must_use]
    pub fn compute(
        persons: &PersonSet,
        scale: &ScaleConfig,
        expanded: &ExpandedGroups,
        metrics: LayoutMetrics,
    ) -> Self {
        let mut anchors = AnchorArena::new();
        let mut rows = Vec::with_capacity(persons.len());

        for (row_idx, person) in persons.iter().enumerate() {
            let row_top = metrics.row_top(row_idx);

            // Lifespan band, window-resolved and clamped.
            let birth_year = person.birth_year().unwrap_or(scale.start_year);
            let death_year = person.death_year().unwrap_or(scale.end_year);
            let band = anchors.push(
                row_idx,
                AnchorKind::Band {
                    birth_year,
                    death_year,
                },
                band_rect(birth_year, death_year, scale, row_top, &metrics),
                AnchorFlags::VISIBLE,
            );

            let events = person.events();
            let mut cells = Vec::new();
            for bucket in group_by_year(events) {
                let x = scale.year_to_x(bucket.year());
                let cell = Rect::new(
                    x,
                    row_top + metrics.cell_top,
                    x + scale.year_width(),
                    row_top + metrics.cell_top + metrics.cell_height,
                );

                if !bucket.is_cluster() {
                    let anchor = anchors.push(
                        row_idx,
                        AnchorKind::Event {
                            year: bucket.year(),
                            event: bucket.events()[0],
                        },
                        cell,
                        AnchorFlags::VISIBLE,
                    );
                    cells.push(CellLayout::Single { anchor });
                    continue;
                }

                let is_expanded = expanded.is_expanded(person.name(), bucket.year());
                let group_flags = if is_expanded {
                    AnchorFlags::VISIBLE
                } else {
                    AnchorFlags::VISIBLE | AnchorFlags::COLLAPSED
                };
                let group = anchors.push(
                    row_idx,
                    AnchorKind::Group {
                        year: bucket.year(),
                    },
                    cell,
                    group_flags,
                );

                let mut members = Vec::with_capacity(bucket.len());
                for (member_idx, &event) in bucket.events().iter().enumerate() {
                    let (rect, flags) = if is_expanded {
                        let top = cell.y1 + member_idx as f64 * metrics.member_height;
                        (
                            Rect::new(cell.x0, top, cell.x1, top + metrics.member_height),
                            AnchorFlags::VISIBLE,
                        )
                    } else {
                        // Collapsed members keep a zero-height rect at the
                        // group position; they are not visible endpoints.
                        (
                            Rect::new(cell.x0, cell.y0, cell.x1, cell.y0),
                            AnchorFlags::COLLAPSED,
                        )
                    };
                    members.push(anchors.push(row_idx, AnchorKind::Member { group, event }, rect, flags));
                }

                let badges = bucket
                    .category_counts(events)
                    .into_iter()
                    .map(|(category, count)| (String::from(category.as_str()), count))
                    .collect();
                cells.push(CellLayout::Group {
                    anchor: group,
                    expanded: is_expanded,
                    members,
                    badges,
                });
            }

            rows.push(PersonRow {
                person: row_idx,
                band,
                cells,
            });
        }

        Self {
            anchors,
            rows,
            metrics,
        }
    }

    /// Recomputes every anchor rect for a new scale (typically a new zoom).
    ///
    /// Horizontal extents are rederived from the logical years stored in
    /// each [`AnchorKind`], never scaled from the previous pixel values.
    /// Structure, ids, and vertical placement are untouched.
    pub fn relayout(&mut self, scale: &ScaleConfig) {
        // Group headers precede their members in id order, so a member can
        // copy its freshly recomputed group extent in a single pass.
        let mut new_rects: Vec<Rect> = Vec::with_capacity(self.anchors.len());
        for anchor in self.anchors.iter() {
            let rect = anchor.rect;
            let new_rect = match anchor.kind {
                AnchorKind::Band {
                    birth_year,
                    death_year,
                } => {
                    let left = band_left(birth_year, scale);
                    let right = band_right(death_year, scale).max(left);
                    Rect::new(left, rect.y0, right, rect.y1)
                }
                AnchorKind::Event { year, .. } | AnchorKind::Group { year } => {
                    let x = scale.year_to_x(year);
                    Rect::new(x, rect.y0, x + scale.year_width(), rect.y1)
                }
                AnchorKind::Member { group, .. } => {
                    let group_rect = new_rects[group.index()];
                    Rect::new(group_rect.x0, rect.y0, group_rect.x1, rect.y1)
                }
            };
            new_rects.push(new_rect);
        }
        for (anchor, rect) in self.anchors.iter_mut().zip(new_rects) {
            anchor.rect = rect;
        }
    }

    /// The anchors of this pass.
    #[must_use]
    pub fn anchors(&self) -> &AnchorArena {
        &self.anchors
    }

    /// Person rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[PersonRow] {
        &self.rows
    }

    /// The vertical metrics this layout was computed with.
    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }
}

fn band_left(birth_year: i32, scale: &ScaleConfig) -> f64 {
    scale.year_to_x(birth_year).max(0.0)
}

fn band_right(death_year: i32, scale: &ScaleConfig) -> f64 {
    scale.year_to_x(death_year).min(scale.span_px())
}

fn band_rect(
    birth_year: i32,
    death_year: i32,
    scale: &ScaleConfig,
    row_top: f64,
    metrics: &LayoutMetrics,
) -> Rect {
    let left = band_left(birth_year, scale);
    let right = band_right(death_year, scale).max(left);
    Rect::new(
        left,
        row_top + metrics.band_top,
        right,
        row_top + metrics.band_top + metrics.band_height,
    )
}
