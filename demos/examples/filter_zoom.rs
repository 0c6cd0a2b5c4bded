// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filtering, zooming, and cluster expansion.
//!
//! Drive the render context through the interactions a host would wire to
//! its controls: a text filter, zoom steps, and toggling a same-year
//! cluster open. Each mutation is followed by a full re-render.
//!
//! Run:
//! - `cargo run -p yearline_demos --example filter_zoom`

use yearline_demos::print_frame;
use yearline_filter::FilterSpec;
use yearline_layout::ScaleConfig;
use yearline_model::{RawRow, YearField};
use yearline_view::TimelineView;

fn row(year: i64, category: &str, name: &str, title: &str, description: Option<&str>) -> RawRow {
    RawRow {
        year: Some(YearField::Number(year)),
        category: Some(category.into()),
        name: Some(name.into()),
        attribution: None,
        title: Some(title.into()),
        description: description.map(Into::into),
    }
}

fn main() {
    let rows = vec![
        row(1867, "birth", "Wright", "Wright born", None),
        row(1935, "building", "Wright", "Fallingwater", Some("a reply to 「Villa Savoye」")),
        row(1959, "death", "Wright", "Wright dies", None),
        row(1887, "birth", "Corbusier", "Corbusier born", None),
        row(1928, "building", "Corbusier", "Villa Savoye", None),
        row(1928, "publication", "Corbusier", "Une maison, un palais", None),
        row(1965, "death", "Corbusier", "Corbusier dies", None),
    ];

    let mut view = TimelineView::from_rows(rows, ScaleConfig::new(1850, 2025, 40.0));

    println!("== initial frame ==");
    print_frame(&view.render());

    // The 1928 cluster starts collapsed; the citation line attaches to it.
    view.toggle_group("Corbusier", 1928);
    println!("\n== 1928 cluster expanded ==");
    print_frame(&view.render());

    for _ in 0..3 {
        view.zoom_in();
    }
    println!("\n== zoomed to {:.1} ==", view.zoom().level());
    print_frame(&view.render());

    view.set_filter(FilterSpec::with_query("wright"));
    view.reset_zoom();
    println!("\n== filtered to \"wright\" ==");
    print_frame(&view.render());
}
