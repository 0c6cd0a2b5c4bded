// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference resolution: matching citations against rendered titles.

use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;
use yearline_layout::{Anchor, AnchorId, AnchorKind, Layout};
use yearline_model::{EventRecord, PersonSet};

use crate::cite::CitationSyntax;

/// How to resolve a citation whose title matches more than one anchor.
///
/// Titles are expected to be near-unique; duplicates are a data-quality
/// situation rather than a modeled feature, so the policy is explicit
/// instead of hardcoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Connect to every anchor bearing the cited title (the reference
    /// behavior).
    #[default]
    FanOut,
    /// Resolve only titles borne by exactly one anchor; ambiguous titles
    /// produce no connections.
    UniqueOnly,
}

/// A resolved citation: an endpoint pair ready for line construction.
///
/// Endpoints are the *effective* elements: a member of a collapsed group
/// contributes its enclosing group's anchor, with the corresponding
/// collapsed flag set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedConnection {
    /// The citing side's effective anchor.
    pub source: AnchorId,
    /// The cited side's effective anchor.
    pub target: AnchorId,
    /// Whether the source endpoint is a collapsed group.
    pub source_collapsed: bool,
    /// Whether the target endpoint is a collapsed group.
    pub target_collapsed: bool,
}

/// An event-bearing anchor's effective endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Endpoint {
    /// The event-bearing anchor itself.
    member: AnchorId,
    /// The element a line should attach to.
    effective: AnchorId,
    /// Whether `effective` is a collapsed group.
    collapsed: bool,
}

/// Resolves every citation in the laid-out person set.
///
/// Builds an index from trimmed event titles to the anchors bearing them
/// (members of collapsed groups included, mapped to their group), then
/// scans each visible event's description for citations. Self-references
/// never connect, and neither do pairs whose effective endpoints coincide
/// (two members hidden inside the same collapsed group). Citations of
/// titles that are absent, or whose bearers are not visible, resolve to
/// nothing — a miss is not an error.
#[must_use]
pub fn resolve_references(
    persons: &PersonSet,
    layout: &Layout,
    syntax: CitationSyntax,
    policy: MatchPolicy,
) -> Vec<ResolvedConnection> {
    let mut by_title: HashMap<&str, SmallVec<[Endpoint; 1]>> = HashMap::new();
    for anchor in layout.anchors().iter() {
        let Some(endpoint) = endpoint_of(anchor, layout) else {
            continue;
        };
        let Some(event) = event_of(anchor, persons) else {
            continue;
        };
        let title = event.title.trim();
        if title.is_empty() {
            continue;
        }
        by_title.entry(title).or_default().push(endpoint);
    }

    let mut connections = Vec::new();
    for anchor in layout.anchors().iter() {
        let Some(source) = endpoint_of(anchor, layout) else {
            continue;
        };
        let Some(event) = event_of(anchor, persons) else {
            continue;
        };
        let Some(description) = event.description.as_deref() else {
            continue;
        };

        for cited in syntax.citations(description) {
            let Some(matches) = by_title.get(cited) else {
                continue;
            };
            if policy == MatchPolicy::UniqueOnly && matches.len() > 1 {
                continue;
            }
            for target in matches {
                // Never connect an event to itself, nor two events whose
                // effective elements are the same collapsed group.
                if target.member == source.member || target.effective == source.effective {
                    continue;
                }
                connections.push(ResolvedConnection {
                    source: source.effective,
                    target: target.effective,
                    source_collapsed: source.collapsed,
                    target_collapsed: target.collapsed,
                });
            }
        }
    }
    connections
}

/// The effective endpoint of an event-bearing anchor, if it can carry a
/// line right now.
fn endpoint_of(anchor: &Anchor, layout: &Layout) -> Option<Endpoint> {
    match anchor.kind {
        AnchorKind::Event { .. } => anchor.is_visible().then_some(Endpoint {
            member: anchor.id,
            effective: anchor.id,
            collapsed: false,
        }),
        AnchorKind::Member { group, .. } => {
            if anchor.is_visible() {
                return Some(Endpoint {
                    member: anchor.id,
                    effective: anchor.id,
                    collapsed: false,
                });
            }
            let group = &layout.anchors()[group];
            (group.is_visible() && group.is_collapsed()).then_some(Endpoint {
                member: anchor.id,
                effective: group.id,
                collapsed: true,
            })
        }
        AnchorKind::Band { .. } | AnchorKind::Group { .. } => None,
    }
}

fn event_of<'a>(anchor: &Anchor, persons: &'a PersonSet) -> Option<&'a EventRecord> {
    let event = anchor.event_index()?;
    persons.get_index(anchor.person)?.events().get(event)
}
