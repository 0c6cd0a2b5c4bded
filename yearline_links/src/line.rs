// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connection-line geometry: endpoints, length, angle, and suppression.

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Point;
use yearline_layout::{AnchorId, Layout};

use crate::resolve::ResolvedConnection;

/// Lines shorter than this many pixels are degenerate and hidden.
pub const MIN_VISIBLE_LENGTH: f64 = 2.0;

/// A line between two anchors' centers.
///
/// Suppressed lines (degenerate or duplicate) are emitted with `hidden`
/// set rather than omitted, so a renderer holding prior line elements can
/// hide them explicitly on recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionLine {
    /// The citing side's effective anchor.
    pub source: AnchorId,
    /// The cited side's effective anchor.
    pub target: AnchorId,
    /// Whether the source endpoint is a collapsed group.
    pub source_collapsed: bool,
    /// Whether the target endpoint is a collapsed group.
    pub target_collapsed: bool,
    /// Line origin: the source anchor's center.
    pub start: Point,
    /// Line end: the target anchor's center.
    pub end: Point,
    /// Euclidean length in the timeline's coordinate space.
    pub length: f64,
    /// Rotation from the positive X axis, in radians.
    pub angle: f64,
    /// Whether the renderer must hide this line.
    pub hidden: bool,
}

impl ConnectionLine {
    /// The rotation angle in degrees, for CSS-transform style consumers.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

/// Builds the complete line set for one pass.
///
/// Line state is never patched incrementally: every recompute (zoom,
/// filter, or collapse change) discards the previous line set and calls
/// this again against the fresh layout, so lines can never refer to
/// anchors of a superseded pass.
///
/// Duplicates are keyed by the unordered endpoint pair — two events citing
/// each other produce one visible line, with the latecomer emitted hidden.
/// Lines shorter than [`MIN_VISIBLE_LENGTH`] are likewise emitted hidden.
#[must_use]
pub fn build_lines(layout: &Layout, connections: &[ResolvedConnection]) -> Vec<ConnectionLine> {
    let mut seen: HashSet<(AnchorId, AnchorId)> = HashSet::new();
    let mut lines = Vec::with_capacity(connections.len());

    for connection in connections {
        let start = layout.anchors()[connection.source].center();
        let end = layout.anchors()[connection.target].center();
        let vector = end - start;
        let length = vector.hypot();
        let angle = vector.atan2();

        let key = if connection.source <= connection.target {
            (connection.source, connection.target)
        } else {
            (connection.target, connection.source)
        };
        let duplicate = !seen.insert(key);

        lines.push(ConnectionLine {
            source: connection.source,
            target: connection.target,
            source_collapsed: connection.source_collapsed,
            target_collapsed: connection.target_collapsed,
            start,
            end,
            length,
            angle,
            hidden: duplicate || length < MIN_VISIBLE_LENGTH,
        });
    }
    lines
}
