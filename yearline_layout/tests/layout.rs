// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the layout pass: band geometry, cell placement, group
//! collapse handling, and zoom behavior.

use yearline_layout::{AnchorKind, CellLayout, ExpandedGroups, Layout, LayoutMetrics, ScaleConfig};
use yearline_model::{PersonSet, RawRow, YearField, normalize_rows};

fn raw(year: i64, category: &str, name: &str, title: &str) -> RawRow {
    RawRow {
        year: Some(YearField::Number(year)),
        category: Some(category.into()),
        name: Some(name.into()),
        attribution: Some("architect".into()),
        title: Some(title.into()),
        description: None,
    }
}

fn persons(rows: Vec<RawRow>) -> PersonSet {
    PersonSet::aggregate(normalize_rows(rows))
}

fn compute(persons: &PersonSet, scale: &ScaleConfig) -> Layout {
    Layout::compute(persons, scale, &ExpandedGroups::new(), LayoutMetrics::default())
}

#[test]
fn band_extents_follow_birth_and_death() {
    let persons = persons(vec![
        raw(1867, "birth", "X", "X born"),
        raw(1959, "death", "X", "X dies"),
    ]);
    let scale = ScaleConfig::new(1850, 2025, 200.0);
    let layout = compute(&persons, &scale);

    let band = &layout.anchors()[layout.rows()[0].band];
    assert_eq!(band.rect.x0, f64::from(1867 - 1850) * 200.0);
    assert_eq!(band.rect.width(), f64::from(1959 - 1867) * 200.0);
}

#[test]
fn band_clamps_to_the_window_origin() {
    let persons = persons(vec![
        raw(1700, "birth", "old", "born"),
        raw(1900, "death", "old", "dies"),
    ]);
    let scale = ScaleConfig::new(1850, 2025, 200.0);
    let layout = compute(&persons, &scale);

    let band = &layout.anchors()[layout.rows()[0].band];
    assert_eq!(band.rect.x0, 0.0, "band must never start left of the origin");
}

#[test]
fn band_clamps_to_the_window_end() {
    let persons = persons(vec![
        raw(1990, "birth", "young", "born"),
        raw(2300, "death", "young", "dies"),
    ]);
    let scale = ScaleConfig::new(1850, 2025, 200.0);
    let layout = compute(&persons, &scale);

    let band = &layout.anchors()[layout.rows()[0].band];
    assert_eq!(band.rect.x1, scale.span_px());
}

#[test]
fn missing_lifespan_records_fall_back_to_the_window() {
    let persons = persons(vec![raw(1920, "building", "nameless", "built")]);
    let scale = ScaleConfig::new(1850, 2025, 200.0);
    let layout = compute(&persons, &scale);

    let band = &layout.anchors()[layout.rows()[0].band];
    assert_eq!(band.rect.x0, 0.0);
    assert_eq!(band.rect.x1, scale.span_px());
    match band.kind {
        AnchorKind::Band {
            birth_year,
            death_year,
        } => {
            assert_eq!(birth_year, 1850);
            assert_eq!(death_year, 2025);
        }
        _ => panic!("band anchor expected"),
    }
}

#[test]
fn event_cells_are_one_year_wide() {
    let persons = persons(vec![raw(1920, "building", "X", "built")]);
    let scale = ScaleConfig::new(1850, 2025, 200.0);
    let layout = compute(&persons, &scale);

    let cell = &layout.anchors()[layout.rows()[0].cells[0].anchor()];
    assert_eq!(cell.rect.x0, f64::from(1920 - 1850) * 200.0);
    assert_eq!(cell.rect.width(), scale.year_width());
    // Year markers derive from the identical formula.
    assert_eq!(layout.metrics().marker_pitch(&scale), scale.year_width());
}

#[test]
fn layout_is_idempotent() {
    let persons = persons(vec![
        raw(1867, "birth", "X", "born"),
        raw(1920, "building", "X", "a"),
        raw(1920, "publication", "X", "b"),
        raw(1959, "death", "X", "dies"),
    ]);
    let scale = ScaleConfig::new(1850, 2025, 200.0);
    let a = compute(&persons, &scale);
    let b = compute(&persons, &scale);

    assert_eq!(a.anchors().len(), b.anchors().len());
    for (left, right) in a.anchors().iter().zip(b.anchors().iter()) {
        assert_eq!(left.rect, right.rect);
        assert_eq!(left.flags, right.flags);
    }
}

#[test]
fn zoom_scales_positions_and_widths_linearly() {
    let persons = persons(vec![
        raw(1867, "birth", "X", "born"),
        raw(1920, "building", "X", "a"),
        raw(1920, "publication", "X", "b"),
        raw(1959, "death", "X", "dies"),
    ]);
    let base = ScaleConfig::new(1850, 2025, 200.0);
    let unit = compute(&persons, &base);

    for zoom in [0.5, 1.1, 1.5, 2.0] {
        let zoomed = compute(&persons, &base.with_zoom(zoom));
        for (a, b) in unit.anchors().iter().zip(zoomed.anchors().iter()) {
            assert!((b.rect.x0 - a.rect.x0 * zoom).abs() < 1e-9);
            assert!((b.rect.width() - a.rect.width() * zoom).abs() < 1e-9);
        }
    }
}

#[test]
fn relayout_matches_a_fresh_compute() {
    let persons = persons(vec![
        raw(1867, "birth", "X", "born"),
        raw(1920, "building", "X", "a"),
        raw(1920, "publication", "X", "b"),
        raw(1959, "death", "X", "dies"),
    ]);
    let base = ScaleConfig::new(1850, 2025, 200.0);
    let zoomed = base.with_zoom(1.5);

    let mut relaid = compute(&persons, &base);
    relaid.relayout(&zoomed);
    let fresh = compute(&persons, &zoomed);

    assert_eq!(relaid.anchors().len(), fresh.anchors().len());
    for (a, b) in relaid.anchors().iter().zip(fresh.anchors().iter()) {
        assert_eq!(a.rect, b.rect, "relayout must rederive rects from years");
    }
}

#[test]
fn same_year_events_collapse_into_a_group_cell() {
    let persons = persons(vec![
        raw(1920, "building", "Y", "a"),
        raw(1920, "publication", "Y", "b"),
    ]);
    let scale = ScaleConfig::new(1850, 2025, 200.0);
    let layout = compute(&persons, &scale);

    let cells = &layout.rows()[0].cells;
    assert_eq!(cells.len(), 1);
    match &cells[0] {
        CellLayout::Group {
            anchor,
            expanded,
            members,
            badges,
        } => {
            assert!(!expanded);
            assert_eq!(members.len(), 2);
            assert_eq!(badges.len(), 2);
            let group = &layout.anchors()[*anchor];
            assert!(group.is_collapsed());
            assert_eq!(group.rect.width(), scale.year_width());
            // Collapsed members are zero-height and not visible.
            for &member in members {
                let member = &layout.anchors()[member];
                assert!(!member.is_visible());
                assert!(member.is_collapsed());
                assert_eq!(member.rect.height(), 0.0);
            }
        }
        CellLayout::Single { .. } => panic!("expected a group cell"),
    }
}

#[test]
fn expanded_members_stack_below_the_group() {
    let persons = persons(vec![
        raw(1920, "building", "Y", "a"),
        raw(1920, "publication", "Y", "b"),
    ]);
    let scale = ScaleConfig::new(1850, 2025, 200.0);
    let mut expanded = ExpandedGroups::new();
    expanded.expand("Y", 1920);
    let metrics = LayoutMetrics::default();
    let layout = Layout::compute(&persons, &scale, &expanded, metrics);

    match &layout.rows()[0].cells[0] {
        CellLayout::Group {
            anchor,
            expanded,
            members,
            ..
        } => {
            assert!(*expanded);
            let group = &layout.anchors()[*anchor];
            assert!(!group.is_collapsed());
            let mut top = group.rect.y1;
            for &member in members {
                let member = &layout.anchors()[member];
                assert!(member.is_visible());
                assert_eq!(member.rect.y0, top);
                assert_eq!(member.rect.height(), metrics.member_height);
                assert_eq!(member.rect.x0, group.rect.x0);
                top = member.rect.y1;
            }
        }
        CellLayout::Single { .. } => panic!("expected a group cell"),
    }
}

#[test]
fn rows_stack_by_insertion_order() {
    let persons = persons(vec![
        raw(1900, "building", "first", "a"),
        raw(1900, "building", "second", "b"),
    ]);
    let scale = ScaleConfig::default();
    let metrics = LayoutMetrics::default();
    let layout = compute(&persons, &scale);

    let band0 = &layout.anchors()[layout.rows()[0].band];
    let band1 = &layout.anchors()[layout.rows()[1].band];
    assert_eq!(band0.rect.y0, metrics.row_top(0) + metrics.band_top);
    assert_eq!(band1.rect.y0, metrics.row_top(1) + metrics.band_top);
}
