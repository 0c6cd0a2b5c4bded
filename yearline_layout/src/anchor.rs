// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchors: the geometric identity of rendered timeline elements.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Identifier for an anchor within one layout pass.
///
/// Anchors are regenerated on every layout pass; an `AnchorId` is a plain
/// index into that pass's [`AnchorArena`] and is stable only within the
/// pass. That stability window is exactly what reference resolution needs:
/// it can run (and re-run) against a finished layout without the layout
/// being recomputed underneath it. Holding an id across passes is a logic
/// error and will address an unrelated anchor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AnchorId(pub(crate) u32);

impl AnchorId {
    /// The arena index of this anchor.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Anchor flags controlling visibility and collapse state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AnchorFlags: u8 {
        /// The element is visible and eligible as a connection endpoint.
        const VISIBLE   = 0b0000_0001;
        /// The element is in a collapsed state. For a group anchor this
        /// means the group is folded; for a member anchor it means the
        /// member is hidden inside a folded group.
        const COLLAPSED = 0b0000_0010;
    }
}

impl Default for AnchorFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// What an anchor stands for, retaining its logical year data.
///
/// The years live here — not just in the derived rect — so a zoom change
/// can recompute every extent from first principles instead of scaling
/// previous pixel values and compounding rounding error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    /// A lifespan band. Years are already window-resolved: a person with
    /// no birth/death record gets the display window start/end here.
    Band {
        /// Band start year.
        birth_year: i32,
        /// Band end year.
        death_year: i32,
    },
    /// A single event cell.
    Event {
        /// The event's year.
        year: i32,
        /// Index into the person's event list.
        event: usize,
    },
    /// A collapsed-group cell heading a same-year cluster.
    Group {
        /// The cluster's shared year.
        year: i32,
    },
    /// An event inside a group, expanded or not.
    Member {
        /// The enclosing group's anchor.
        group: AnchorId,
        /// Index into the person's event list.
        event: usize,
    },
}

/// One rendered element's logical position and identity.
#[derive(Clone, Debug)]
pub struct Anchor {
    /// This anchor's id in its arena.
    pub id: AnchorId,
    /// Index of the owning person in the laid-out [`PersonSet`].
    ///
    /// [`PersonSet`]: yearline_model::PersonSet
    pub person: usize,
    /// What the anchor stands for, with its logical years.
    pub kind: AnchorKind,
    /// Bounding box in the timeline's own coordinate space. Horizontal
    /// coordinates carry the zoom factor; vertical ones are layout units.
    pub rect: Rect,
    /// Visibility and collapse state.
    pub flags: AnchorFlags,
}

impl Anchor {
    /// Returns `true` if the element is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(AnchorFlags::VISIBLE)
    }

    /// Returns `true` if the element is in a collapsed state.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.flags.contains(AnchorFlags::COLLAPSED)
    }

    /// The event index this anchor carries, for event and member anchors.
    #[must_use]
    pub fn event_index(&self) -> Option<usize> {
        match self.kind {
            AnchorKind::Event { event, .. } | AnchorKind::Member { event, .. } => Some(event),
            AnchorKind::Band { .. } | AnchorKind::Group { .. } => None,
        }
    }

    /// The enclosing group, for member anchors.
    #[must_use]
    pub fn enclosing_group(&self) -> Option<AnchorId> {
        match self.kind {
            AnchorKind::Member { group, .. } => Some(group),
            _ => None,
        }
    }

    /// The center of the anchor's bounding box. Connection-line endpoint.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect.center()
    }
}

/// The anchors of one layout pass.
#[derive(Clone, Debug, Default)]
pub struct AnchorArena {
    anchors: Vec<Anchor>,
}

impl AnchorArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(
        &mut self,
        person: usize,
        kind: AnchorKind,
        rect: Rect,
        flags: AnchorFlags,
    ) -> AnchorId {
        let id = AnchorId(u32::try_from(self.anchors.len()).expect("anchor count exceeds u32"));
        self.anchors.push(Anchor {
            id,
            person,
            kind,
            rect,
            flags,
        });
        id
    }

    /// Returns the anchor for an id, if it belongs to this arena.
    #[must_use]
    pub fn get(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(id.index())
    }

    /// Number of anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns `true` if the arena holds no anchors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Iterates over all anchors in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Anchor> {
        self.anchors.iter_mut()
    }
}

impl core::ops::Index<AnchorId> for AnchorArena {
    type Output = Anchor;

    fn index(&self, id: AnchorId) -> &Self::Output {
        &self.anchors[id.index()]
    }
}
