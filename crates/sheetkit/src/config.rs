//! Sheet configuration
//!
//! All behavior knobs are constructor-time and immutable per instance. The
//! host modal primitive consumes [`ModalPresentation`]; everything else is
//! read by the sheet itself.

use crate::style::SheetStyle;

/// Animation the host modal primitive applies when presenting the surface
///
/// This is separate from the sheet's own spring motion: it describes how the
/// full-screen modal container appears, not how the sheet slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PresentationAnimation {
    /// Modal appears instantly; the sheet's spring provides all motion
    #[default]
    None,
    /// Modal slides in from the bottom
    Slide,
    /// Modal fades in
    Fade,
}

/// Device orientations the presented modal allows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    PortraitUpsideDown,
    Landscape,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    /// Every orientation, the default allow-list
    pub fn all() -> Vec<Orientation> {
        vec![
            Orientation::Portrait,
            Orientation::PortraitUpsideDown,
            Orientation::Landscape,
            Orientation::LandscapeLeft,
            Orientation::LandscapeRight,
        ]
    }
}

/// Configuration for a sheet instance
#[derive(Clone, Debug)]
pub struct SheetConfig {
    /// Height of the sheet surface in logical pixels
    pub height: f32,
    /// Reserved; accepted for API compatibility but never read by any logic
    pub min_closing_height: f32,
    /// Host modal presentation animation
    pub presentation: PresentationAnimation,
    /// Enable the drag-to-dismiss gesture (and the drag handle)
    pub close_on_drag: bool,
    /// Tapping the mask region closes the sheet
    pub close_on_mask_press: bool,
    /// The platform back action closes the sheet
    pub close_on_back_press: bool,
    /// Pad the wrapper by the keyboard inset while the keyboard is up
    pub keyboard_avoidance: bool,
    /// Orientations the presented modal allows
    pub supported_orientations: Vec<Orientation>,
    /// Per-region style overrides
    pub style: SheetStyle,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            height: 260.0,
            min_closing_height: 0.0,
            presentation: PresentationAnimation::None,
            close_on_drag: false,
            close_on_mask_press: true,
            close_on_back_press: true,
            // iOS hosts resize for the keyboard by default; elsewhere the
            // platform usually pans the window itself
            keyboard_avoidance: cfg!(target_os = "ios"),
            supported_orientations: Orientation::all(),
            style: SheetStyle::default(),
        }
    }
}

impl SheetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sheet height
    pub fn height(mut self, px: f32) -> Self {
        if px <= 0.0 {
            // Advisory only; configuration is never rejected
            tracing::debug!("non-positive sheet height {px}");
        }
        self.height = px;
        self
    }

    /// Set the reserved minimum closing height
    pub fn min_closing_height(mut self, px: f32) -> Self {
        self.min_closing_height = px;
        self
    }

    /// Set the host modal presentation animation
    pub fn presentation(mut self, animation: PresentationAnimation) -> Self {
        self.presentation = animation;
        self
    }

    /// Enable or disable drag-to-dismiss
    pub fn close_on_drag(mut self, enabled: bool) -> Self {
        self.close_on_drag = enabled;
        self
    }

    /// Enable or disable close on mask tap
    pub fn close_on_mask_press(mut self, enabled: bool) -> Self {
        self.close_on_mask_press = enabled;
        self
    }

    /// Enable or disable close on the platform back action
    pub fn close_on_back_press(mut self, enabled: bool) -> Self {
        self.close_on_back_press = enabled;
        self
    }

    /// Enable or disable keyboard avoidance
    pub fn keyboard_avoidance(mut self, enabled: bool) -> Self {
        self.keyboard_avoidance = enabled;
        self
    }

    /// Replace the orientation allow-list
    pub fn supported_orientations(mut self, orientations: Vec<Orientation>) -> Self {
        self.supported_orientations = orientations;
        self
    }

    /// Replace the per-region style overrides
    pub fn style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self
    }
}

/// What the host modal primitive must do to present this sheet
#[derive(Clone, Debug)]
pub struct ModalPresentation {
    /// Whether the modal should currently be presented
    pub visible: bool,
    /// The modal surface must not paint behind the sheet regions
    pub transparent: bool,
    /// Composite on the hardware-accelerated path
    pub hardware_accelerated: bool,
    /// Presentation animation for the modal container
    pub animation: PresentationAnimation,
    /// Orientations the modal allows
    pub supported_orientations: Vec<Orientation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SheetConfig::default();
        assert_eq!(config.height, 260.0);
        assert_eq!(config.min_closing_height, 0.0);
        assert_eq!(config.presentation, PresentationAnimation::None);
        assert!(!config.close_on_drag);
        assert!(config.close_on_mask_press);
        assert!(config.close_on_back_press);
        assert_eq!(config.supported_orientations.len(), 5);
    }

    #[test]
    fn test_config_builder() {
        let config = SheetConfig::new()
            .height(300.0)
            .close_on_drag(true)
            .close_on_mask_press(false)
            .presentation(PresentationAnimation::Fade)
            .supported_orientations(vec![Orientation::Portrait]);

        assert_eq!(config.height, 300.0);
        assert!(config.close_on_drag);
        assert!(!config.close_on_mask_press);
        assert_eq!(config.presentation, PresentationAnimation::Fade);
        assert_eq!(config.supported_orientations, vec![Orientation::Portrait]);
    }

    #[test]
    fn test_min_closing_height_accepted() {
        // Reserved field: stored faithfully, no behavioral claims
        let config = SheetConfig::new().min_closing_height(50.0);
        assert_eq!(config.min_closing_height, 50.0);
    }
}
