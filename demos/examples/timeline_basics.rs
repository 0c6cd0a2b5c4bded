// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline basics.
//!
//! Render the built-in sample dataset headlessly and print the resulting
//! frame: lifespan bands, event cells, clusters, and connection lines.
//!
//! Run:
//! - `cargo run -p yearline_demos --example timeline_basics`

use yearline_demos::print_frame;
use yearline_layout::ScaleConfig;
use yearline_model::sample_rows;
use yearline_view::TimelineView;

fn main() {
    let scale = ScaleConfig::new(1850, 2025, 40.0);
    let view = TimelineView::from_rows(sample_rows(), scale);

    let frame = view.render();
    println!(
        "{} persons, {} anchors",
        frame.persons.len(),
        frame.layout.anchors().len()
    );
    print_frame(&frame);
}
