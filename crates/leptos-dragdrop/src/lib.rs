//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for reordering flat lists in Leptos.
//! Uses a movement threshold to distinguish click from drag, and only allows
//! dropping into slots of the same group the dragged row came from.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A draggable row: the list it belongs to plus its id
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragKey<G> {
    pub group: G,
    pub id: i64,
}

/// A gap between rows; `position` is the index the row is inserted before
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropSlot<G> {
    pub group: G,
    pub position: usize,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<G: Copy + PartialEq + Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<DragKey<G>>>,
    pub dragging_write: WriteSignal<Option<DragKey<G>>>,
    pub drop_slot_read: ReadSignal<Option<DropSlot<G>>>,
    pub drop_slot_write: WriteSignal<Option<DropSlot<G>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragKey<G>>>,
    pub pending_write: WriteSignal<Option<DragKey<G>>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<G: Copy + PartialEq + Send + Sync + 'static>() -> DndSignals<G> {
    let (dragging_read, dragging_write) = signal(None::<DragKey<G>>);
    let (drop_slot_read, drop_slot_write) = signal(None::<DropSlot<G>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragKey<G>>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_slot_read,
        drop_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

impl<G: Copy + PartialEq + Send + Sync + 'static> DndSignals<G> {
    /// Row currently being dragged, tracked
    pub fn is_dragging(&self, key: DragKey<G>) -> bool {
        self.dragging_read.get() == Some(key)
    }

    /// Whether a drag of this group is in progress, tracked
    pub fn is_dragging_group(&self, group: G) -> bool {
        matches!(self.dragging_read.get(), Some(k) if k.group == group)
    }

    /// Slot currently hovered, tracked
    pub fn is_active_slot(&self, slot: DropSlot<G>) -> bool {
        self.drop_slot_read.get() == Some(slot)
    }
}

/// Final index of a row moved from `from` into `slot`, or None when the drop
/// leaves the list unchanged.
pub fn insert_index(from: usize, slot: usize) -> Option<usize> {
    if slot == from || slot == from + 1 {
        None
    } else if slot > from {
        Some(slot - 1)
    } else {
        Some(slot)
    }
}

/// Whether releasing the mouse should swallow the click that follows.
/// Only a row that crossed the threshold counts; a pending press is a click.
pub fn suppresses_click<G>(dragging: Option<DragKey<G>>) -> bool {
    dragging.is_some()
}

/// End drag operation
pub fn end_drag<G: Copy + PartialEq + Send + Sync + 'static>(dnd: &DndSignals<G>) {
    let was_dragging = suppresses_click(dnd.dragging_read.get_untracked());
    dnd.dragging_write.set(None);
    dnd.drop_slot_write.set(None);
    dnd.pending_write.set(None);
    if !was_dragging {
        return;
    }
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<G: Copy + PartialEq + Send + Sync + 'static>(
    dnd: DndSignals<G>,
    key: DragKey<G>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Buttons and inputs inside a row keep their own click behavior
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(key));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for a slot; slots of other groups are ignored
pub fn make_on_slot_mouseenter<G: Copy + PartialEq + Send + Sync + 'static>(
    dnd: DndSignals<G>,
    slot: DropSlot<G>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_read.get_untracked() {
            if dragging.group == slot.group {
                dnd.drop_slot_write.set(Some(slot));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<G: Copy + PartialEq + Send + Sync + 'static>(
    dnd: DndSignals<G>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(None);
        }
    }
}

fn bind_global_mousemove<G: Copy + PartialEq + Send + Sync + 'static>(dnd: DndSignals<G>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        if pending.is_none() || dnd.dragging_read.get_untracked().is_some() {
            return;
        }
        let (start_x, start_y) = dnd.start_read.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_write.set(pending);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
/// `on_drop` receives the dragged row and the slot it was released on.
pub fn bind_global_mouseup<G, F>(dnd: DndSignals<G>, on_drop: F)
where
    G: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragKey<G>, DropSlot<G>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let slot = dnd.drop_slot_read.get_untracked();
        end_drag(&dnd);
        if let (Some(dragged), Some(slot)) = (dragging, slot) {
            on_drop(dragged, slot);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_index_noop_slots() {
        assert_eq!(insert_index(2, 2), None);
        assert_eq!(insert_index(2, 3), None);
    }

    #[test]
    fn test_insert_index_moves() {
        // [a, b, c, d]: move b (1) before d (slot 3) -> ends at index 2
        assert_eq!(insert_index(1, 3), Some(2));
        // move d (3) to the front
        assert_eq!(insert_index(3, 0), Some(0));
        // move a (0) to the end (slot 4 of a 4-long list)
        assert_eq!(insert_index(0, 4), Some(3));
    }

    #[test]
    fn test_plain_click_is_not_suppressed() {
        // mousedown only records a pending row; dragging stays None
        assert!(!suppresses_click::<u8>(None));
        assert!(suppresses_click(Some(DragKey { group: 1u8, id: 7 })));
    }
}
