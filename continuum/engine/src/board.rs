//! The marker placement model: canonical ordered marker list plus the active
//! pointer interaction. Every list change is written through to the attached
//! store as a full snapshot.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::geometry::{AreaRect, PointerPos};
use crate::interaction::{Interaction, InteractionState, NoopEvents, PointerEvents, ResizeSession};
use crate::marker::Marker;
use crate::resize::ResizeHandle;
use crate::store::{load_markers, save_markers, KeyValueStore};

struct Persistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

/// Owns the markers, in insertion order, and the interaction touching them.
pub struct MarkerBoard {
    markers: Vec<Marker>,
    interaction: Interaction,
    events: Rc<dyn PointerEvents>,
    persistence: Option<Persistence>,
}

impl Default for MarkerBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MarkerBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerBoard")
            .field("markers", &self.markers)
            .field("interaction", &self.interaction)
            .field("persistent", &self.persistence.is_some())
            .finish()
    }
}

impl MarkerBoard {
    /// Empty board without persistence.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            interaction: Interaction::Idle,
            events: Rc::new(NoopEvents::default()),
            persistence: None,
        }
    }

    /// Board seeded from `store[key]` that writes every change back to it.
    pub fn open(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let markers = load_markers(store.as_ref(), &key);
        debug!(count = markers.len(), key = %key, "markers loaded");
        Self { markers, persistence: Some(Persistence { store, key }), ..Self::new() }
    }

    /// Route pointer captures through `events`.
    #[must_use]
    pub fn with_events(mut self, events: Rc<dyn PointerEvents>) -> Self {
        self.events = events;
        self
    }

    /// Markers in insertion order.
    pub fn list(&self) -> &[Marker] {
        &self.markers
    }

    /// Markers that have a center.
    pub fn placed(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.is_placed())
    }

    /// Marker by id.
    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// True without markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Append an unplaced marker named `name` (trimmed). Blank names are ignored.
    pub fn add(&mut self, name: &str) -> Option<&Marker> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let marker = Marker::new(name);
        debug!(id = %marker.id, name, "marker added");
        self.markers.push(marker);
        self.persist();
        self.markers.last()
    }

    /// Delete the marker with `id`; unknown ids are ignored. Ends any interaction on it.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m.id != id);
        if self.markers.len() == before {
            return false;
        }
        if self.interaction.target() == Some(id) {
            self.interaction.end();
        }
        debug!(id, "marker removed");
        self.persist();
        true
    }

    /// Center marker `id` on the raw pointer position `raw` over `area`, clamped
    /// so the footprint stays inside. Unknown ids are ignored.
    pub fn place(&mut self, id: &str, raw: PointerPos, area: &AreaRect) -> bool {
        let Some(marker) = self.markers.iter_mut().find(|m| m.id == id) else {
            debug!(id, "place ignored: unknown marker");
            return false;
        };
        marker.place_at(area.normalize(raw));
        self.persist();
        true
    }

    /// Current interaction summary.
    pub fn interaction(&self) -> InteractionState {
        self.interaction.state()
    }

    /// Pointer pressed on a marker body. Any previous interaction ends first.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        self.interaction.end();
        if self.get(id).is_none() {
            return false;
        }
        self.interaction = Interaction::Dragging { marker_id: id.to_string() };
        debug!(id, "drag started");
        true
    }

    /// Marker `id` dropped at `raw`: place it and end the drag.
    pub fn drop_at(&mut self, id: &str, raw: PointerPos, area: &AreaRect) -> bool {
        if matches!(&self.interaction, Interaction::Dragging { .. }) {
            self.interaction.end();
        }
        self.place(id, raw, area)
    }

    /// Pointer pressed on `handle` of marker `id`. Requires a placed marker;
    /// any previous interaction ends first.
    pub fn begin_resize(&mut self, id: &str, handle: ResizeHandle, pointer: PointerPos) -> bool {
        self.interaction.end();
        let Some(marker) = self.get(id) else {
            return false;
        };
        if !marker.is_placed() {
            debug!(id, "resize ignored: marker not placed");
            return false;
        }
        let session = ResizeSession::begin(
            id.to_string(),
            handle,
            pointer,
            marker.footprint,
            Rc::clone(&self.events),
        );
        self.interaction = Interaction::Resizing(session);
        debug!(id, %handle, "resize started");
        true
    }

    /// Pointer moved while captured; resizes are applied immediately.
    pub fn pointer_move(&mut self, pointer: PointerPos, area: &AreaRect) {
        let Interaction::Resizing(session) = &self.interaction else {
            return;
        };
        let Some(marker) = self.markers.iter_mut().find(|m| m.id == session.marker_id()) else {
            self.interaction.end();
            return;
        };
        let Some(center) = marker.center else {
            self.interaction.end();
            return;
        };
        let next = session.footprint_at(pointer, area, center);
        if next != marker.footprint {
            marker.footprint = next;
            self.persist();
        }
    }

    /// Pointer released anywhere: the interaction ends.
    pub fn pointer_up(&mut self) {
        let prev = self.interaction.end();
        if prev != InteractionState::Idle {
            debug!(?prev, "interaction ended");
        }
    }

    /// Pointer left the window: same as a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    fn persist(&mut self) {
        let Some(p) = self.persistence.as_mut() else {
            return;
        };
        if let Err(e) = save_markers(p.store.as_mut(), &p.key, &self.markers) {
            warn!(error = %e, key = %p.key, "failed to persist markers");
        }
    }
}
