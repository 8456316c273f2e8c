//! Z-order and selection queries.
//!
//! [`ZOrder`] is the paint order of entry ids (index 0 is at the back). It
//! holds ids only; frames are looked up through a caller-supplied closure so
//! the document collaborator stays the single owner of entry geometry.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Viewport;
use crate::geom::{Point, Rect};

/// Unique identifier for a board entry.
pub type EntryId = Uuid;

/// Back-to-front paint order of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZOrder {
    ids: Vec<EntryId>,
}

impl ZOrder {
    /// Create an empty order.
    #[must_use]
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Build from ids already in back-to-front order. Later duplicates are
    /// dropped.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = EntryId>) -> Self {
        let mut order = Self::new();
        for id in ids {
            order.push(id);
        }
        order
    }

    /// Add `id` on top. Returns `false` if it is already present.
    pub fn push(&mut self, id: EntryId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.ids.remove(index);
        true
    }

    #[must_use]
    pub fn contains(&self, id: &EntryId) -> bool {
        self.ids.contains(id)
    }

    /// Paint position of `id`, 0 being the back.
    #[must_use]
    pub fn index_of(&self, id: &EntryId) -> Option<usize> {
        self.ids.iter().position(|x| x == id)
    }

    /// Move `id` to the top. Other entries keep their relative order.
    pub fn bring_to_front(&mut self, id: &EntryId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let id = self.ids.remove(index);
        self.ids.push(id);
        true
    }

    /// Move `id` to the bottom. Other entries keep their relative order.
    pub fn send_to_back(&mut self, id: &EntryId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let id = self.ids.remove(index);
        self.ids.insert(0, id);
        true
    }

    /// Ids in paint order, back first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &EntryId> {
        self.ids.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[EntryId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Top-most entry whose on-screen frame contains `screen_pt`.
    ///
    /// `frame_of` returns an entry's world frame; ids it cannot resolve are
    /// skipped.
    pub fn hit_test<F>(&self, screen_pt: Point, viewport: &Viewport, frame_of: F) -> Option<EntryId>
    where
        F: Fn(&EntryId) -> Option<Rect>,
    {
        self.ids
            .iter()
            .rev()
            .find(|id| frame_of(*id).is_some_and(|frame| viewport.rect_to_screen(frame).contains(screen_pt)))
            .copied()
    }

    /// Entries whose world frame intersects the marquee dragged from
    /// `start_screen` to `end_screen`.
    pub fn marquee<F>(&self, start_screen: Point, end_screen: Point, viewport: &Viewport, frame_of: F) -> HashSet<EntryId>
    where
        F: Fn(&EntryId) -> Option<Rect>,
    {
        let area = marquee_rect(start_screen, end_screen, viewport);
        self.ids
            .iter()
            .filter(|id| frame_of(*id).is_some_and(|frame| frame.intersects(&area)))
            .copied()
            .collect()
    }
}

/// World-space rectangle spanned by a marquee drag between two screen points.
#[must_use]
pub fn marquee_rect(start_screen: Point, end_screen: Point, viewport: &Viewport) -> Rect {
    Rect::from_corners(viewport.to_world(start_screen), viewport.to_world(end_screen))
}
