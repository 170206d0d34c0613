//! Drag Gesture State Machine
//!
//! Pure lifecycle of a single drag: `Idle -> Pressed -> Dragging -> (resolved | cancelled)`.
//! Knows nothing about the DOM; the event bindings in the crate root feed it.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Current phase of a drag gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragGesture {
    /// No gesture in progress
    #[default]
    Idle,
    /// Mouse is down on a source but has not moved past the threshold yet
    Pressed { source: u32, start_x: i32, start_y: i32 },
    /// Source is being dragged; `over` is the current drop target, if any
    Dragging { source: u32, over: Option<u32> },
}

/// How a finished gesture ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dropped on a different target
    Resolved { source: u32, target: u32 },
    /// Released with no target, dropped on itself, or aborted
    Cancelled,
}

/// What a key press on a row does to the gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    PickUp,
    Drop,
    /// Move the hover target by this many rows
    Step(isize),
    Cancel,
}

/// Map a key press on a row to a gesture command.
///
/// `from_control` is set when the key went to a button or input inside the row;
/// Space and Enter then belong to that control.
pub fn key_command(key: &str, dragging: bool, draggable: bool, from_control: bool) -> Option<KeyCommand> {
    match key {
        " " | "Enter" if from_control => None,
        " " | "Enter" if dragging => Some(KeyCommand::Drop),
        " " | "Enter" if draggable => Some(KeyCommand::PickUp),
        "ArrowUp" if dragging => Some(KeyCommand::Step(-1)),
        "ArrowDown" if dragging => Some(KeyCommand::Step(1)),
        "Escape" if dragging => Some(KeyCommand::Cancel),
        _ => None,
    }
}

impl DragGesture {
    /// Id of the item being dragged (not set while only pressed)
    pub fn dragging_id(&self) -> Option<u32> {
        match self {
            DragGesture::Dragging { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// Id of the current drop target
    pub fn over_id(&self) -> Option<u32> {
        match self {
            DragGesture::Dragging { over, .. } => *over,
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    /// Mouse pressed on a draggable source. Ignored while another gesture is live.
    pub fn press(&mut self, source: u32, x: i32, y: i32) {
        if *self == DragGesture::Idle {
            *self = DragGesture::Pressed { source, start_x: x, start_y: y };
        }
    }

    /// Keyboard pick-up: skips the threshold and hovers over the source itself.
    pub fn pick_up(&mut self, source: u32) {
        if *self == DragGesture::Idle {
            *self = DragGesture::Dragging { source, over: Some(source) };
        }
    }

    /// Pointer moved. Returns true when this move started the drag.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        if let DragGesture::Pressed { source, start_x, start_y } = *self {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                *self = DragGesture::Dragging { source, over: None };
                return true;
            }
        }
        false
    }

    /// Pointer entered a drop target
    pub fn hover(&mut self, target: u32) {
        if let DragGesture::Dragging { over, .. } = self {
            *over = Some(target);
        }
    }

    /// Pointer left the current drop target
    pub fn leave(&mut self) {
        if let DragGesture::Dragging { over, .. } = self {
            *over = None;
        }
    }

    /// Move the hover target `delta` steps through `targets` (clamped at both ends).
    /// Starts from the source when nothing is hovered.
    pub fn step(&mut self, targets: &[u32], delta: isize) {
        let DragGesture::Dragging { source, over } = self else {
            return;
        };
        let anchor = over.unwrap_or(*source);
        let Some(current) = targets.iter().position(|id| *id == anchor) else {
            return;
        };
        let last = targets.len() as isize - 1;
        let next = (current as isize + delta).clamp(0, last) as usize;
        *over = Some(targets[next]);
    }

    /// Release the gesture and return to idle.
    ///
    /// A plain click (pressed, never dragged) yields `None`.
    pub fn release(&mut self) -> Option<DragOutcome> {
        let previous = std::mem::take(self);
        match previous {
            DragGesture::Idle | DragGesture::Pressed { .. } => None,
            DragGesture::Dragging { source, over: Some(target) } if target != source => {
                Some(DragOutcome::Resolved { source, target })
            }
            DragGesture::Dragging { .. } => Some(DragOutcome::Cancelled),
        }
    }

    /// Abort the gesture and return to idle
    pub fn cancel(&mut self) -> Option<DragOutcome> {
        match std::mem::take(self) {
            DragGesture::Dragging { .. } => Some(DragOutcome::Cancelled),
            _ => None,
        }
    }
}
