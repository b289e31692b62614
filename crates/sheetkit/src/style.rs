//! Region styling
//!
//! The sheet exposes a small set of named visual regions. Callers override
//! individual properties per region; anything left unset falls back to the
//! built-in defaults below. The backdrop and mask are not overridable - the
//! backdrop's alpha is driven by the offset interpolation and the mask must
//! stay transparent to be a pure hit target.

use sheetkit_core::Color;

/// Built-in region defaults
pub mod defaults {
    use sheetkit_core::Color;

    /// Backdrop dim color at full opacity
    pub const BACKDROP_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.55);
    /// Mask is a transparent hit target
    pub const MASK_COLOR: Color = Color::TRANSPARENT;
    /// Sheet surface background
    pub const CONTAINER_BACKGROUND: Color = Color::WHITE;
    /// Drag handle pill: 35x5, radius 5, light gray, 10px margin
    pub const HANDLE_COLOR: Color = Color::rgba(0.8, 0.8, 0.8, 1.0);
    pub const HANDLE_WIDTH: f32 = 35.0;
    pub const HANDLE_HEIGHT: f32 = 5.0;
    pub const HANDLE_RADIUS: f32 = 5.0;
    pub const HANDLE_MARGIN: f32 = 10.0;
}

/// Style overrides for one region; unset properties use the defaults
#[derive(Clone, Debug, Default)]
pub struct RegionStyle {
    pub background: Option<Color>,
    pub corner_radius: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub margin: Option<f32>,
}

impl RegionStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn width(mut self, px: f32) -> Self {
        self.width = Some(px);
        self
    }

    pub fn height(mut self, px: f32) -> Self {
        self.height = Some(px);
        self
    }

    pub fn margin(mut self, px: f32) -> Self {
        self.margin = Some(px);
        self
    }

    /// Apply these overrides on top of a resolved base
    fn over(&self, base: ResolvedRegion) -> ResolvedRegion {
        ResolvedRegion {
            background: self.background.unwrap_or(base.background),
            corner_radius: self.corner_radius.unwrap_or(base.corner_radius),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            margin: self.margin.unwrap_or(base.margin),
        }
    }
}

/// Per-region overrides for a sheet instance
#[derive(Clone, Debug, Default)]
pub struct SheetStyle {
    /// Full-screen wrapper behind everything
    pub wrapper: RegionStyle,
    /// The sliding sheet surface
    pub container: RegionStyle,
    /// The drag handle pill
    pub draggable_icon: RegionStyle,
}

impl SheetStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrapper(mut self, style: RegionStyle) -> Self {
        self.wrapper = style;
        self
    }

    pub fn container(mut self, style: RegionStyle) -> Self {
        self.container = style;
        self
    }

    pub fn draggable_icon(mut self, style: RegionStyle) -> Self {
        self.draggable_icon = style;
        self
    }

    /// Resolve overrides against the built-in defaults
    pub fn resolve(&self) -> ResolvedSheetStyle {
        ResolvedSheetStyle {
            wrapper: self.wrapper.over(ResolvedRegion {
                background: Color::TRANSPARENT,
                corner_radius: 0.0,
                width: None,
                height: None,
                margin: 0.0,
            }),
            backdrop_color: defaults::BACKDROP_COLOR,
            mask_color: defaults::MASK_COLOR,
            container: self.container.over(ResolvedRegion {
                background: defaults::CONTAINER_BACKGROUND,
                corner_radius: 0.0,
                width: None, // full width
                height: None, // the configured sheet height
                margin: 0.0,
            }),
            draggable_icon: self.draggable_icon.over(ResolvedRegion {
                background: defaults::HANDLE_COLOR,
                corner_radius: defaults::HANDLE_RADIUS,
                width: Some(defaults::HANDLE_WIDTH),
                height: Some(defaults::HANDLE_HEIGHT),
                margin: defaults::HANDLE_MARGIN,
            }),
        }
    }
}

/// Concrete style for one region after defaults are applied
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRegion {
    pub background: Color,
    pub corner_radius: f32,
    /// None means fill the available width
    pub width: Option<f32>,
    /// None means sized by the layout (the container uses the configured
    /// sheet height)
    pub height: Option<f32>,
    pub margin: f32,
}

/// Fully resolved styles for every sheet region
#[derive(Clone, Debug)]
pub struct ResolvedSheetStyle {
    pub wrapper: ResolvedRegion,
    pub backdrop_color: Color,
    pub mask_color: Color,
    pub container: ResolvedRegion,
    pub draggable_icon: ResolvedRegion,
}
