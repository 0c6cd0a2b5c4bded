// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Yearline demo programs.

use yearline_layout::CellLayout;
use yearline_view::Frame;

/// Prints a frame as an indented text outline.
///
/// One block per person: the lifespan band's pixel extent, then each cell
/// (singles with their title, clusters with badges and member titles),
/// then the visible connection lines.
pub fn print_frame(frame: &Frame) {
    if let Some(notice) = frame.notice {
        println!(
            "note: {} source(s) failed{}",
            notice.failed_sources,
            if notice.used_fallback {
                ", showing sample data"
            } else {
                ""
            }
        );
    }

    for row in frame.layout.rows() {
        let person = frame
            .persons
            .get_index(row.person)
            .expect("row indices come from the same person set");
        let band = &frame.layout.anchors()[row.band];
        println!(
            "{} [{:.0}..{:.0}px]",
            person.name(),
            band.rect.x0,
            band.rect.x1
        );

        for cell in &row.cells {
            let rect = frame.layout.anchors()[cell.anchor()].rect;
            match cell {
                CellLayout::Single { anchor } => {
                    let title = frame.layout.anchors()[*anchor]
                        .event_index()
                        .map(|idx| person.events()[idx].title.as_str())
                        .unwrap_or_default();
                    println!("  at {:.0}px: {title}", rect.x0);
                }
                CellLayout::Group {
                    expanded,
                    members,
                    badges,
                    ..
                } => {
                    let badges: Vec<String> = badges
                        .iter()
                        .map(|(category, count)| format!("{category}×{count}"))
                        .collect();
                    let state = if *expanded { "expanded" } else { "collapsed" };
                    println!("  at {:.0}px: cluster ({state}) {}", rect.x0, badges.join(" "));
                    if *expanded {
                        for member in members {
                            if let Some(idx) = frame.layout.anchors()[*member].event_index() {
                                println!("    - {}", person.events()[idx].title);
                            }
                        }
                    }
                }
            }
        }
    }

    for line in frame.visible_lines() {
        println!(
            "line ({:.0},{:.0}) -> ({:.0},{:.0})  length {:.0}px, {:.0}°",
            line.start.x,
            line.start.y,
            line.end.x,
            line.end.y,
            line.length,
            line.angle_degrees()
        );
    }
}
