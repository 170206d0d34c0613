//! Leptos DragDrop Utilities
//!
//! Sortable-list drag-and-drop for Leptos using mouse and keyboard events.
//! Uses movement threshold to distinguish click from drag.
//! The gesture lifecycle itself lives in [`gesture`] and is DOM-free.

pub mod gesture;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use gesture::{key_command, DragGesture, DragOutcome, KeyCommand, DRAG_THRESHOLD_PX};

/// How long clicks stay suppressed after a drag ends
const CLICK_SUPPRESS_MS: i32 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Current gesture phase
    pub gesture: RwSignal<DragGesture>,
    /// True for a short moment after a drag, so the release doesn't count as a click
    pub drag_just_ended: RwSignal<bool>,
}

impl DndSignals {
    /// Id being dragged (tracked)
    pub fn dragging_id(&self) -> Option<u32> {
        self.gesture.with(|g| g.dragging_id())
    }

    /// Current drop target (tracked)
    pub fn over_id(&self) -> Option<u32> {
        self.gesture.with(|g| g.over_id())
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        gesture: RwSignal::new(DragGesture::Idle),
        drag_just_ended: RwSignal::new(false),
    }
}

/// Mark the end of a drag and briefly suppress clicks
pub fn end_drag(dnd: &DndSignals) {
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Buttons and inputs inside a row keep their own mouse and key handling
fn is_control(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
}

/// Feed a finished gesture to the drop callback
fn finish<F>(dnd: &DndSignals, outcome: Option<DragOutcome>, on_drop: &F)
where
    F: Fn(u32, u32),
{
    match outcome {
        Some(DragOutcome::Resolved { source, target }) => {
            end_drag(dnd);
            on_drop(source, target);
        }
        Some(DragOutcome::Cancelled) => end_drag(dnd),
        // Plain click - the click event fires naturally on the element
        None => {}
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(
    dnd: DndSignals,
    item_id: u32,
    draggable: bool,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if !draggable || ev.button() != 0 {
            return;
        }
        if ev.target().is_some_and(|t| is_control(&t)) {
            return;
        }
        dnd.gesture.update(|g| g.press(item_id, ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for items; only droppable items become targets
pub fn make_on_item_mouseenter(
    dnd: DndSignals,
    item_id: u32,
    droppable: bool,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if droppable && dnd.gesture.with_untracked(|g| g.is_dragging()) {
            dnd.gesture.update(|g| g.hover(item_id));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.gesture.with_untracked(|g| g.over_id().is_some()) {
            dnd.gesture.update(|g| g.leave());
        }
    }
}

/// Create keydown handler for focusable items
///
/// Space/Enter picks up or drops, arrows move through `targets`, Escape cancels.
pub fn make_on_keydown(
    dnd: DndSignals,
    item_id: u32,
    draggable: bool,
    targets: Signal<Vec<u32>>,
    on_drop: Callback<(u32, u32)>,
) -> impl Fn(web_sys::KeyboardEvent) + Copy + 'static {
    move |ev: web_sys::KeyboardEvent| {
        let dragging = dnd.gesture.with_untracked(|g| g.is_dragging());
        let from_control = ev.target().is_some_and(|t| is_control(&t));
        let Some(command) = key_command(&ev.key(), dragging, draggable, from_control) else {
            return;
        };
        ev.prevent_default();
        match command {
            KeyCommand::PickUp => dnd.gesture.update(|g| g.pick_up(item_id)),
            KeyCommand::Drop => {
                let outcome = dnd.gesture.try_update(|g| g.release()).flatten();
                finish(&dnd, outcome, &|source, target| on_drop.run((source, target)));
            }
            KeyCommand::Step(delta) => {
                let order = targets.get_untracked();
                dnd.gesture.update(|g| g.step(&order, delta));
            }
            KeyCommand::Cancel => {
                let outcome = dnd.gesture.try_update(|g| g.cancel()).flatten();
                finish(&dnd, outcome, &|_, _| {});
            }
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pressed = dnd.gesture.with_untracked(|g| matches!(g, DragGesture::Pressed { .. }));
        if pressed {
            dnd.gesture.update(|g| {
                g.pointer_moved(ev.client_x(), ev.client_y());
            });
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global Escape handler so a pointer drag can be aborted
fn bind_global_escape(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.gesture.with_untracked(|g| g.is_dragging()) {
            let outcome = dnd.gesture.try_update(|g| g.cancel()).flatten();
            finish(&dnd, outcome, &|_, _| {});
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop(source, target)` only fires for a resolved gesture with distinct ids.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, u32) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let live = dnd.gesture.with_untracked(|g| *g != DragGesture::Idle);
        if live {
            let outcome = dnd.gesture.try_update(|g| g.release()).flatten();
            finish(&dnd, outcome, &on_drop);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove and Escape
    bind_global_mousemove(dnd);
    bind_global_escape(dnd);
}
