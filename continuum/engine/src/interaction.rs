//! Pointer interaction state machine.
//!
//! One interaction at a time: `Idle`, `Dragging` a marker body (the drag itself
//! is carried by the host's drag-and-drop protocol) or `Resizing` through one of
//! the eight handles. A resize holds a [`PointerCapture`] for window-level
//! move/up events; the capture is released when the session is dropped, which
//! happens on every exit path.

use std::cell::Cell;
use std::rc::Rc;

use continuum_field::NormalizedPoint;

use crate::geometry::{AreaRect, PointerPos};
use crate::marker::Footprint;
use crate::resize::{resized, ResizeHandle};

/// Token returned by [`PointerEvents::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Host event source able to route window-level pointer move/up events to the board.
pub trait PointerEvents {
    /// Start delivering global move/up events.
    fn subscribe(&self) -> SubscriptionId;
    /// Stop delivering events for `id`.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Event source for hosts that forward every pointer event anyway.
#[derive(Debug, Default)]
pub struct NoopEvents {
    next: Cell<u64>,
}

impl PointerEvents for NoopEvents {
    fn subscribe(&self) -> SubscriptionId {
        let id = self.next.get();
        self.next.set(id + 1);
        SubscriptionId(id)
    }
    fn unsubscribe(&self, _id: SubscriptionId) {}
}

/// Live subscription; unsubscribes on drop.
pub struct PointerCapture {
    events: Rc<dyn PointerEvents>,
    id: SubscriptionId,
}

impl PointerCapture {
    /// Subscribe through `events`.
    pub fn acquire(events: Rc<dyn PointerEvents>) -> Self {
        let id = events.subscribe();
        Self { events, id }
    }

    /// Subscription held by this capture.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.events.unsubscribe(self.id);
    }
}

impl std::fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerCapture").field("id", &self.id).finish()
    }
}

/// An in-progress resize of one marker.
#[derive(Debug)]
pub struct ResizeSession {
    marker_id: String,
    handle: ResizeHandle,
    start: PointerPos,
    start_footprint: Footprint,
    _capture: PointerCapture,
}

impl ResizeSession {
    /// Open a session; acquires the pointer capture.
    pub fn begin(
        marker_id: String,
        handle: ResizeHandle,
        start: PointerPos,
        start_footprint: Footprint,
        events: Rc<dyn PointerEvents>,
    ) -> Self {
        Self {
            marker_id,
            handle,
            start,
            start_footprint,
            _capture: PointerCapture::acquire(events),
        }
    }

    /// Marker being resized.
    pub fn marker_id(&self) -> &str {
        &self.marker_id
    }

    /// Handle that was grabbed.
    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    /// Footprint for the pointer now at `pointer` over `area`, with the marker centred on `center`.
    pub fn footprint_at(
        &self,
        pointer: PointerPos,
        area: &AreaRect,
        center: NormalizedPoint,
    ) -> Footprint {
        let (dx, dy) = area.delta(self.start, pointer);
        resized(self.start_footprint, self.handle, dx, dy, center)
    }
}

/// Current interaction.
#[derive(Debug, Default)]
pub enum Interaction {
    /// Nothing in progress
    #[default]
    Idle,
    /// A marker body is being dragged by the host
    Dragging {
        /// Dragged marker
        marker_id: String,
    },
    /// A marker is being resized
    Resizing(ResizeSession),
}

/// Borrow-free summary of [`Interaction`] for callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionState {
    /// Nothing in progress
    Idle,
    /// Dragging the marker with this id
    Dragging(String),
    /// Resizing the marker with this id through this handle
    Resizing(String, ResizeHandle),
}

impl Interaction {
    /// Summary of the current state.
    pub fn state(&self) -> InteractionState {
        match self {
            Self::Idle => InteractionState::Idle,
            Self::Dragging { marker_id } => InteractionState::Dragging(marker_id.clone()),
            Self::Resizing(s) => InteractionState::Resizing(s.marker_id.clone(), s.handle),
        }
    }

    /// Marker targeted by the current interaction, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Dragging { marker_id } => Some(marker_id),
            Self::Resizing(s) => Some(&s.marker_id),
        }
    }

    /// Return to `Idle`, releasing any capture held by the previous state.
    pub fn end(&mut self) -> InteractionState {
        let prev = self.state();
        *self = Self::Idle;
        prev
    }
}
