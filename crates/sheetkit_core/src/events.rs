//! Host input events
//!
//! The host runtime translates platform input (touch, back button, keyboard
//! frame changes) into these events and feeds them to widgets. Widgets never
//! talk to the platform directly; everything arrives through an
//! [`EventContext`].

/// Event type identifier
pub type EventType = u32;

/// Event type constants
pub mod event_types {
    use super::EventType;

    /// Pointer/touch pressed down
    pub const POINTER_DOWN: EventType = 1;
    /// Pointer/touch released
    pub const POINTER_UP: EventType = 2;
    /// Pointer moved while pressed; `drag_delta_x/y` hold the offset from
    /// the drag start
    pub const DRAG: EventType = 5;
    /// Pointer released after a drag; `drag_delta_x/y` hold the final offset
    pub const DRAG_END: EventType = 6;
    /// Platform back action (hardware back button, back swipe)
    pub const BACK: EventType = 7;
    /// On-screen keyboard appeared or changed height; `keyboard_height`
    /// holds the new inset
    pub const KEYBOARD_SHOW: EventType = 8;
    /// On-screen keyboard dismissed
    pub const KEYBOARD_HIDE: EventType = 9;
}

/// Context passed with each event
///
/// Only the fields relevant to the event type are meaningful; the rest are
/// left at their defaults.
#[derive(Clone, Debug)]
pub struct EventContext {
    /// The type of event that occurred
    pub event_type: EventType,
    /// Pointer position at time of event (if applicable)
    pub pointer_x: f32,
    pub pointer_y: f32,
    /// Drag delta for DRAG/DRAG_END events (offset from drag start)
    pub drag_delta_x: f32,
    pub drag_delta_y: f32,
    /// Keyboard inset for KEYBOARD_SHOW events (logical pixels)
    pub keyboard_height: f32,
}

impl EventContext {
    /// Create a new event context
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            pointer_x: 0.0,
            pointer_y: 0.0,
            drag_delta_x: 0.0,
            drag_delta_y: 0.0,
            keyboard_height: 0.0,
        }
    }

    /// Set pointer position
    pub fn with_pointer_pos(mut self, x: f32, y: f32) -> Self {
        self.pointer_x = x;
        self.pointer_y = y;
        self
    }

    /// Set drag delta (for DRAG/DRAG_END events)
    pub fn with_drag_delta(mut self, dx: f32, dy: f32) -> Self {
        self.drag_delta_x = dx;
        self.drag_delta_y = dy;
        self
    }

    /// Set keyboard inset (for KEYBOARD_SHOW events)
    pub fn with_keyboard_height(mut self, height: f32) -> Self {
        self.keyboard_height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_context_builder() {
        let ev = EventContext::new(event_types::DRAG).with_drag_delta(0.0, 42.0);
        assert_eq!(ev.event_type, event_types::DRAG);
        assert_eq!(ev.drag_delta_y, 42.0);
        assert_eq!(ev.drag_delta_x, 0.0);
        assert_eq!(ev.keyboard_height, 0.0);
    }

    #[test]
    fn test_pointer_event() {
        let ev = EventContext::new(event_types::POINTER_UP).with_pointer_pos(40.0, 120.0);
        assert_eq!(ev.event_type, event_types::POINTER_UP);
        assert_eq!(ev.pointer_x, 40.0);
        assert_eq!(ev.pointer_y, 120.0);
    }
}
