//! Drag-to-dismiss gesture recognizer
//!
//! Interprets downward drags over the sheet surface. The recognizer only
//! claims the gesture when drag-to-dismiss is enabled; while active it maps
//! positive vertical displacement 1:1 onto the offset scalar, and on release
//! it decides between committing the close and settling back open.
//!
//! The recognizer never starts springs itself - it reports displacements and
//! a release decision, and the sheet switches drive modes around it so the
//! gesture and a spring are never driving the scalar at the same instant.

/// Decision taken when the drag is released
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// Displacement passed the dismiss threshold: commit to closing
    Commit,
    /// Spring the sheet back to fully open
    Settle,
}

/// Recognizer for the drag-to-dismiss gesture
#[derive(Clone, Debug)]
pub struct DragRecognizer {
    enabled: bool,
    active: bool,
}

impl DragRecognizer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            active: false,
        }
    }

    /// First-touch arbitration: claim the gesture only when enabled
    pub fn wants_gesture(&self) -> bool {
        self.enabled
    }

    /// Whether a drag is currently being tracked
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed a drag displacement (offset from the drag start)
    ///
    /// Returns the displacement to drive the offset with, or `None` when the
    /// gesture is not claimed or the drag is upward (the offset is never
    /// pulled negative).
    pub fn update(&mut self, delta_y: f32) -> Option<f32> {
        if !self.enabled {
            return None;
        }
        self.active = true;
        if delta_y > 0.0 {
            Some(delta_y)
        } else {
            None
        }
    }

    /// Release the drag with its final displacement
    ///
    /// Returns `None` if no drag was being tracked. Displacement strictly
    /// greater than a quarter of the sheet height commits the close.
    pub fn release(&mut self, delta_y: f32, height: f32) -> Option<ReleaseDecision> {
        if !self.active {
            return None;
        }
        self.active = false;
        if delta_y > height / 4.0 {
            Some(ReleaseDecision::Commit)
        } else {
            Some(ReleaseDecision::Settle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_recognizer_never_claims() {
        let mut rec = DragRecognizer::new(false);
        assert!(!rec.wants_gesture());
        assert_eq!(rec.update(50.0), None);
        assert!(!rec.is_active());
        assert_eq!(rec.release(50.0, 300.0), None);
    }

    #[test]
    fn test_downward_drag_drives_displacement() {
        let mut rec = DragRecognizer::new(true);
        assert!(rec.wants_gesture());
        assert_eq!(rec.update(10.0), Some(10.0));
        assert_eq!(rec.update(42.5), Some(42.5));
        assert!(rec.is_active());
    }

    #[test]
    fn test_upward_drag_is_ignored_but_claimed() {
        let mut rec = DragRecognizer::new(true);
        assert_eq!(rec.update(-20.0), None);
        // The gesture is still tracked; only the write is suppressed
        assert!(rec.is_active());
        assert_eq!(rec.update(15.0), Some(15.0));
    }

    #[test]
    fn test_release_threshold_is_strict_quarter() {
        let mut rec = DragRecognizer::new(true);

        rec.update(75.0);
        assert_eq!(rec.release(75.0, 300.0), Some(ReleaseDecision::Settle));

        rec.update(76.0);
        assert_eq!(rec.release(76.0, 300.0), Some(ReleaseDecision::Commit));
    }

    #[test]
    fn test_release_deactivates() {
        let mut rec = DragRecognizer::new(true);
        rec.update(30.0);
        assert_eq!(rec.release(30.0, 300.0), Some(ReleaseDecision::Settle));
        assert!(!rec.is_active());
        // A second release without a new drag is ignored
        assert_eq!(rec.release(30.0, 300.0), None);
    }
}
