//! Drag-to-reorder adapter for list items.
//!
//! # Responsibility
//! - Track a single drag gesture over a vertical list.
//! - Move the dragged item live while the pointer moves.
//! - Report the resulting order once, when the gesture ends.
//!
//! # Invariants
//! - At most one item is dragged at a time.
//! - The adapter's order is always a permutation of the synced ids.
//! - Every `Dragging -> Idle` transition yields exactly one order report.
//! - There is no cancel path: an aborted drag is a drop in place.

use crate::model::id::EntityId;
use log::debug;

/// Default item height used when the surface does not report one.
pub const DEFAULT_ITEM_HEIGHT: f64 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ListItem {
    id: EntityId,
    height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { id: EntityId },
}

/// Gesture state machine over the presented list order.
#[derive(Debug, Clone)]
pub struct ReorderAdapter {
    items: Vec<ListItem>,
    list_top: f64,
    state: DragState,
}

impl ReorderAdapter {
    /// Builds an adapter over uniformly sized items starting at y = 0.
    pub fn new(ids: &[EntityId]) -> Self {
        Self::with_heights(ids.iter().map(|id| (*id, DEFAULT_ITEM_HEIGHT)))
    }

    /// Builds an adapter from `(id, height)` pairs in presented order.
    pub fn with_heights(items: impl IntoIterator<Item = (EntityId, f64)>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|(id, height)| ListItem { id, height })
                .collect(),
            list_top: 0.0,
            state: DragState::Idle,
        }
    }

    /// Offsets the whole list, e.g. when it sits below a header.
    pub fn set_list_top(&mut self, list_top: f64) {
        self.list_top = list_top;
    }

    /// Re-seeds the items after a re-render. Any drag in flight is dropped.
    pub fn sync(&mut self, ids: &[EntityId]) {
        self.items = ids
            .iter()
            .map(|id| ListItem {
                id: *id,
                height: DEFAULT_ITEM_HEIGHT,
            })
            .collect();
        self.state = DragState::Idle;
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Current presented order.
    pub fn order(&self) -> Vec<EntityId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Vertical midpoint of `id` in the current layout.
    pub fn midpoint_of(&self, id: EntityId) -> Option<f64> {
        let mut top = self.list_top;
        for item in &self.items {
            if item.id == id {
                return Some(top + item.height / 2.0);
            }
            top += item.height;
        }
        None
    }

    /// Starts a gesture on `id`.
    ///
    /// Returns `false`, leaving state untouched, when a drag is already in
    /// progress or `id` is not a list item.
    pub fn drag_start(&mut self, id: EntityId) -> bool {
        if self.state != DragState::Idle || !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.state = DragState::Dragging { id };
        debug!("event=drag_start module=reorder status=ok id={id}");
        true
    }

    /// Handles one pointer move over the list.
    ///
    /// The dragged item is moved in front of the first other item whose
    /// midpoint lies below `pointer_y`, or to the end when none does.
    /// Ignored while idle.
    pub fn drag_over(&mut self, pointer_y: f64) {
        let DragState::Dragging { id } = self.state else {
            return;
        };
        let Some(from) = self.items.iter().position(|item| item.id == id) else {
            return;
        };

        let target = self.insertion_target(id, pointer_y);
        let dragged = self.items.remove(from);
        let to = match target {
            Some(before) => self
                .items
                .iter()
                .position(|item| item.id == before)
                .unwrap_or(self.items.len()),
            None => self.items.len(),
        };
        self.items.insert(to, dragged);
    }

    /// Ends the gesture and reports the resulting order.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn drag_end(&mut self) -> Option<Vec<EntityId>> {
        let DragState::Dragging { id } = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        let order = self.order();
        debug!(
            "event=drag_end module=reorder status=ok id={id} count={}",
            order.len()
        );
        Some(order)
    }

    fn insertion_target(&self, dragged: EntityId, pointer_y: f64) -> Option<EntityId> {
        let mut top = self.list_top;
        let mut closest: Option<(f64, EntityId)> = None;
        for item in &self.items {
            let midpoint = top + item.height / 2.0;
            top += item.height;
            if item.id == dragged {
                continue;
            }
            let offset = pointer_y - midpoint;
            if offset < 0.0 && closest.map_or(true, |(best, _)| offset > best) {
                closest = Some((offset, item.id));
            }
        }
        closest.map(|(_, id)| id)
    }
}
