//! Sheet visibility state machine
//!
//! The sheet lifecycle is a four-state machine; `mounted` and "content
//! rendered" are observations of it, never independently settable flags, so
//! the illegal combination (content without a mount) cannot be represented.
//!
//! ```text
//! Closed -> Opening -> Open -> Closing -> Closed
//!              \__________________/
//!               (close interrupts an opening sheet)
//! ```

use sheetkit_core::StateTransitions;

/// Events for the sheet state machine
pub mod sheet_events {
    /// Open requested (Closed -> Opening)
    pub const OPEN: u32 = 30001;
    /// The driving spring settled (Opening -> Open, Closing -> Closed)
    pub const SETTLED: u32 = 30002;
    /// Imperative close (Open/Opening -> Closing)
    pub const CLOSE: u32 = 30003;
    /// The mask region was tapped
    pub const MASK_PRESS: u32 = 30004;
    /// The platform back action fired
    pub const BACK_PRESS: u32 = 30005;
    /// A released drag passed the dismiss threshold
    pub const DRAG_COMMIT: u32 = 30006;
}

/// State machine for the sheet lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SheetVisibility {
    /// Not presented; the modal is unmounted
    #[default]
    Closed,
    /// Mounted, enter spring driving the offset toward 0
    Opening,
    /// Fully visible and interactive at offset 0
    Open,
    /// Exit spring driving the offset toward the hidden position
    Closing,
}

impl SheetVisibility {
    /// Check if the modal surface is mounted
    pub fn is_mounted(&self) -> bool {
        !matches!(self, SheetVisibility::Closed)
    }

    /// Check if the sheet is fully open
    pub fn is_open(&self) -> bool {
        matches!(self, SheetVisibility::Open)
    }

    /// Check if an enter or exit spring is in flight
    pub fn is_animating(&self) -> bool {
        matches!(self, SheetVisibility::Opening | SheetVisibility::Closing)
    }
}

impl StateTransitions for SheetVisibility {
    fn on_event(&self, event: u32) -> Option<Self> {
        use sheet_events::*;
        use SheetVisibility::*;

        match (self, event) {
            // Closed -> Opening: mount and start the enter spring
            (Closed, OPEN) => Some(Opening),

            // Opening -> Open: enter spring settled
            (Opening, SETTLED) => Some(Open),

            // Open -> Closing: any close path starts the exit spring
            (Open, CLOSE) | (Open, MASK_PRESS) | (Open, BACK_PRESS) | (Open, DRAG_COMMIT) => {
                Some(Closing)
            }

            // Interrupt an opening sheet with any close path
            (Opening, CLOSE)
            | (Opening, MASK_PRESS)
            | (Opening, BACK_PRESS)
            | (Opening, DRAG_COMMIT) => Some(Closing),

            // Closing -> Closed: exit spring settled, unmount
            (Closing, SETTLED) => Some(Closed),

            // Close while closing restarts the exit spring without a
            // state change; open while opening is idempotent
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle() {
        use sheet_events::*;

        let mut state = SheetVisibility::Closed;
        assert!(!state.is_mounted());

        state = state.on_event(OPEN).unwrap();
        assert_eq!(state, SheetVisibility::Opening);
        assert!(state.is_mounted());
        assert!(state.is_animating());

        state = state.on_event(SETTLED).unwrap();
        assert_eq!(state, SheetVisibility::Open);
        assert!(state.is_open());

        state = state.on_event(CLOSE).unwrap();
        assert_eq!(state, SheetVisibility::Closing);

        state = state.on_event(SETTLED).unwrap();
        assert_eq!(state, SheetVisibility::Closed);
    }

    #[test]
    fn test_close_interrupts_opening() {
        use sheet_events::*;

        let state = SheetVisibility::Opening;
        assert_eq!(state.on_event(CLOSE), Some(SheetVisibility::Closing));
        assert_eq!(state.on_event(DRAG_COMMIT), Some(SheetVisibility::Closing));
    }

    #[test]
    fn test_every_close_path_is_equivalent() {
        use sheet_events::*;

        for event in [CLOSE, MASK_PRESS, BACK_PRESS, DRAG_COMMIT] {
            assert_eq!(
                SheetVisibility::Open.on_event(event),
                Some(SheetVisibility::Closing)
            );
        }
    }

    #[test]
    fn test_reentrant_events_do_not_transition() {
        use sheet_events::*;

        // Open while opening, close while closing
        assert_eq!(SheetVisibility::Opening.on_event(OPEN), None);
        assert_eq!(SheetVisibility::Closing.on_event(CLOSE), None);

        // No close path from an unmounted sheet
        assert_eq!(SheetVisibility::Closed.on_event(CLOSE), None);
        assert_eq!(SheetVisibility::Closed.on_event(MASK_PRESS), None);
        assert_eq!(SheetVisibility::Closed.on_event(SETTLED), None);
    }
}
