// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for reference resolution and connection-line construction.

use yearline_layout::{AnchorKind, CellLayout, ExpandedGroups, Layout, LayoutMetrics, ScaleConfig};
use yearline_links::{CitationSyntax, ConnectionLine, MatchPolicy, build_lines, resolve_references};
use yearline_model::{PersonSet, RawRow, YearField, normalize_rows};

fn raw(year: i64, name: &str, title: &str, description: Option<&str>) -> RawRow {
    RawRow {
        year: Some(YearField::Number(year)),
        category: Some("building".into()),
        name: Some(name.into()),
        attribution: None,
        title: Some(title.into()),
        description: description.map(Into::into),
    }
}

fn lines_for(rows: Vec<RawRow>, expanded: &ExpandedGroups, policy: MatchPolicy) -> (PersonSet, Layout, Vec<ConnectionLine>) {
    let persons = PersonSet::aggregate(normalize_rows(rows));
    let layout = Layout::compute(
        &persons,
        &ScaleConfig::new(1850, 2025, 200.0),
        expanded,
        LayoutMetrics::default(),
    );
    let resolved = resolve_references(&persons, &layout, CitationSyntax::CORNER_BRACKETS, policy);
    let lines = build_lines(&layout, &resolved);
    (persons, layout, lines)
}

fn visible(lines: &[ConnectionLine]) -> Vec<&ConnectionLine> {
    lines.iter().filter(|l| !l.hidden).collect()
}

#[test]
fn citation_produces_one_line_between_the_two_anchors() {
    let (_, layout, lines) = lines_for(
        vec![
            raw(1920, "A", "Event A", Some("see 「Event B」 for context")),
            raw(1930, "B", "Event B", None),
        ],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );

    let visible = visible(&lines);
    assert_eq!(visible.len(), 1);
    let line = visible[0];
    let source = &layout.anchors()[line.source];
    let target = &layout.anchors()[line.target];
    assert!(matches!(source.kind, AnchorKind::Event { year: 1920, .. }));
    assert!(matches!(target.kind, AnchorKind::Event { year: 1930, .. }));
    assert_eq!(line.start, source.center());
    assert_eq!(line.end, target.center());
    assert!(line.length > 0.0);
}

#[test]
fn self_citation_produces_no_line() {
    let (_, _, lines) = lines_for(
        vec![raw(1920, "A", "Event A", Some("recursive 「Event A」 mention"))],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );
    assert!(lines.is_empty());
}

#[test]
fn mutual_citations_dedupe_to_one_visible_line() {
    let (_, _, lines) = lines_for(
        vec![
            raw(1920, "A", "Event A", Some("paired with 「Event B」")),
            raw(1930, "B", "Event B", Some("paired with 「Event A」")),
        ],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );
    assert_eq!(lines.len(), 2, "both directions resolve");
    assert_eq!(visible(&lines).len(), 1, "the unordered pair keeps one visible line");
}

#[test]
fn unresolved_citation_is_silently_ignored() {
    let (_, _, lines) = lines_for(
        vec![raw(1920, "A", "Event A", Some("cites 「No Such Event」"))],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );
    assert!(lines.is_empty());
}

#[test]
fn collapsed_member_target_routes_to_its_group() {
    let (_, layout, lines) = lines_for(
        vec![
            raw(1920, "A", "Event A", Some("see 「Clustered」")),
            raw(1930, "B", "Clustered", None),
            raw(1930, "B", "Sibling", None),
        ],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );

    let visible = visible(&lines);
    assert_eq!(visible.len(), 1);
    let line = visible[0];
    assert!(line.target_collapsed);
    assert!(!line.source_collapsed);
    let target = &layout.anchors()[line.target];
    assert!(matches!(target.kind, AnchorKind::Group { year: 1930 }));
}

#[test]
fn expanded_member_target_is_the_member_itself() {
    let mut expanded = ExpandedGroups::new();
    expanded.expand("B", 1930);
    let (_, layout, lines) = lines_for(
        vec![
            raw(1920, "A", "Event A", Some("see 「Clustered」")),
            raw(1930, "B", "Clustered", None),
            raw(1930, "B", "Sibling", None),
        ],
        &expanded,
        MatchPolicy::FanOut,
    );

    let visible = visible(&lines);
    assert_eq!(visible.len(), 1);
    let line = visible[0];
    assert!(!line.target_collapsed);
    assert!(matches!(
        layout.anchors()[line.target].kind,
        AnchorKind::Member { .. }
    ));
}

#[test]
fn members_of_the_same_collapsed_group_never_connect() {
    let (_, _, lines) = lines_for(
        vec![
            raw(1930, "B", "Clustered", Some("next to 「Sibling」")),
            raw(1930, "B", "Sibling", Some("next to 「Clustered」")),
        ],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );
    // Both effective endpoints are the same group element.
    assert!(lines.is_empty());
}

#[test]
fn duplicate_titles_fan_out_by_default() {
    let (_, _, lines) = lines_for(
        vec![
            raw(1920, "A", "Event A", Some("see 「Twin」")),
            raw(1930, "B", "Twin", None),
            raw(1940, "C", "Twin", None),
        ],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );
    assert_eq!(visible(&lines).len(), 2);
}

#[test]
fn unique_only_policy_drops_ambiguous_titles() {
    let rows = vec![
        raw(1920, "A", "Event A", Some("see 「Twin」 and 「Lone」")),
        raw(1930, "B", "Twin", None),
        raw(1940, "C", "Twin", None),
        raw(1950, "D", "Lone", None),
    ];
    let (_, _, lines) = lines_for(rows, &ExpandedGroups::new(), MatchPolicy::UniqueOnly);
    let visible = visible(&lines);
    assert_eq!(visible.len(), 1, "only the unambiguous title connects");
}

#[test]
fn degenerate_lines_are_hidden_not_dropped() {
    // Zero row pitch stacks both persons' cells onto identical centers.
    let metrics = LayoutMetrics {
        row_height: 0.0,
        ..LayoutMetrics::default()
    };
    let persons = PersonSet::aggregate(normalize_rows(vec![
        raw(1920, "A", "Event A", Some("see 「Event B」")),
        raw(1920, "B", "Event B", None),
    ]));
    let layout = Layout::compute(
        &persons,
        &ScaleConfig::new(1850, 2025, 200.0),
        &ExpandedGroups::new(),
        metrics,
    );
    let resolved = resolve_references(&persons, &layout, CitationSyntax::CORNER_BRACKETS, MatchPolicy::FanOut);
    let lines = build_lines(&layout, &resolved);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].hidden, "near-zero-length lines are emitted hidden");
    assert_eq!(lines[0].length, 0.0);
}

#[test]
fn line_angle_matches_the_endpoint_vector() {
    let (_, _, lines) = lines_for(
        vec![
            raw(1920, "A", "Event A", Some("see 「Event B」")),
            raw(1930, "B", "Event B", None),
        ],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );
    let line = lines[0];
    let dx = line.end.x - line.start.x;
    let dy = line.end.y - line.start.y;
    assert!((line.length - (dx * dx + dy * dy).sqrt()).abs() < 1e-9);
    assert!((line.angle - dy.atan2(dx)).abs() < 1e-9);
    assert!((line.angle_degrees() - line.angle.to_degrees()).abs() < 1e-12);
}

#[test]
fn every_cell_anchor_is_reachable_from_the_rows() {
    // Sanity check that resolution only ever sees anchors the layout owns.
    let (_, layout, _) = lines_for(
        vec![
            raw(1920, "A", "Event A", None),
            raw(1930, "B", "Clustered", None),
            raw(1930, "B", "Sibling", None),
        ],
        &ExpandedGroups::new(),
        MatchPolicy::FanOut,
    );
    for row in layout.rows() {
        assert!(layout.anchors().get(row.band).is_some());
        for cell in &row.cells {
            assert!(layout.anchors().get(cell.anchor()).is_some());
            if let CellLayout::Group { members, .. } = cell {
                for &member in members {
                    assert!(layout.anchors().get(member).is_some());
                }
            }
        }
    }
}
