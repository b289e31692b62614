//! Sheet presentation layer
//!
//! A registry the application embeds once. It owns the motion driver and
//! routes the host-runtime signals that are not addressed to a specific
//! sheet: frame ticks, the platform back action, mask taps, and keyboard
//! inset changes. Sheets register on creation and stay registered across
//! opens and closes.
//!
//! # Example
//!
//! ```
//! use sheetkit::SheetLayer;
//!
//! let layer = SheetLayer::new();
//! let (_handle, sheet) = layer
//!     .sheet()
//!     .height(300.0)
//!     .close_on_drag(true)
//!     .show();
//!
//! layer.tick(1.0 / 60.0);
//! assert!(sheet.is_mounted());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;
use sheetkit_animation::{DriverHandle, MotionDriver};

use crate::config::{ModalPresentation, SheetConfig};
use crate::sheet::{Sheet, SheetCallback, SheetFrame};

/// Handle to a registered sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SheetHandle(u64);

impl SheetHandle {
    /// Get the raw ID
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Object-safe view of a registered sheet, erasing its context type
trait ManagedSheet {
    fn is_mounted(&self) -> bool;
    fn frame(&self) -> SheetFrame;
    fn presentation(&self) -> ModalPresentation;
    fn handle_back_press(&self) -> bool;
    fn handle_mask_press(&self) -> bool;
    fn set_keyboard_inset(&self, inset: f32);
}

impl<C: 'static> ManagedSheet for Sheet<C> {
    fn is_mounted(&self) -> bool {
        Sheet::is_mounted(self)
    }

    fn frame(&self) -> SheetFrame {
        Sheet::frame(self)
    }

    fn presentation(&self) -> ModalPresentation {
        Sheet::presentation(self)
    }

    fn handle_back_press(&self) -> bool {
        Sheet::handle_back_press(self)
    }

    fn handle_mask_press(&self) -> bool {
        Sheet::handle_mask_press(self)
    }

    fn set_keyboard_inset(&self, inset: f32) {
        Sheet::set_keyboard_inset(self, inset)
    }
}

/// Registry of sheets plus the motion driver that animates them
pub struct SheetLayer {
    driver: MotionDriver,
    sheets: RefCell<IndexMap<u64, Box<dyn ManagedSheet>>>,
    next_id: Cell<u64>,
}

impl SheetLayer {
    pub fn new() -> Self {
        Self {
            driver: MotionDriver::new(),
            sheets: RefCell::new(IndexMap::new()),
            next_id: Cell::new(1),
        }
    }

    /// Handle to the layer's motion driver, for constructing sheets directly
    pub fn driver_handle(&self) -> DriverHandle {
        self.driver.handle()
    }

    /// Start building a sheet attached to this layer
    pub fn sheet(&self) -> SheetBuilder<'_> {
        SheetBuilder::new(self)
    }

    /// Register an externally constructed sheet
    pub fn register<C: 'static>(&self, sheet: Sheet<C>) -> SheetHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        tracing::debug!(id, "sheet registered");
        self.sheets.borrow_mut().insert(id, Box::new(sheet));
        SheetHandle(id)
    }

    /// Remove a sheet from the registry
    pub fn remove(&self, handle: SheetHandle) {
        self.sheets.borrow_mut().shift_remove(&handle.0);
    }

    /// Advance all animations by `dt` seconds
    ///
    /// Returns true if another tick is needed.
    pub fn tick(&self, dt: f32) -> bool {
        self.driver.tick(dt)
    }

    /// Route the platform back action to the topmost mounted sheet
    ///
    /// Returns true if a sheet consumed it. A mounted sheet with back-press
    /// closing disabled still blocks the action from falling through.
    pub fn handle_back_press(&self) -> bool {
        let sheets = self.sheets.borrow();
        if let Some(sheet) = sheets.values().rev().find(|s| s.is_mounted()) {
            return sheet.handle_back_press();
        }
        false
    }

    /// Route a mask tap to the topmost mounted sheet
    pub fn handle_mask_press(&self) -> bool {
        let sheets = self.sheets.borrow();
        if let Some(sheet) = sheets.values().rev().find(|s| s.is_mounted()) {
            return sheet.handle_mask_press();
        }
        false
    }

    /// Broadcast the current keyboard inset to every sheet
    pub fn set_keyboard_inset(&self, inset: f32) {
        for sheet in self.sheets.borrow().values() {
            sheet.set_keyboard_inset(inset);
        }
    }

    /// Render snapshots for every mounted sheet, in registration order
    pub fn frames(&self) -> Vec<(SheetHandle, SheetFrame)> {
        self.sheets
            .borrow()
            .iter()
            .filter(|(_, s)| s.is_mounted())
            .map(|(id, s)| (SheetHandle(*id), s.frame()))
            .collect()
    }

    /// Presentation request for a specific sheet
    pub fn presentation(&self, handle: SheetHandle) -> Option<ModalPresentation> {
        self.sheets.borrow().get(&handle.0).map(|s| s.presentation())
    }

    /// Check if any sheet is mounted
    pub fn has_visible(&self) -> bool {
        self.sheets.borrow().values().any(|s| s.is_mounted())
    }

    /// Number of registered sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.borrow().len()
    }
}

impl Default for SheetLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a sheet attached to a [`SheetLayer`]
///
/// Covers the common contextless case; construct [`Sheet::new`] directly
/// when a context payload type is needed.
pub struct SheetBuilder<'a> {
    layer: &'a SheetLayer,
    config: SheetConfig,
    on_open: Option<SheetCallback<()>>,
    on_close: Option<SheetCallback<()>>,
}

impl<'a> SheetBuilder<'a> {
    fn new(layer: &'a SheetLayer) -> Self {
        Self {
            layer,
            config: SheetConfig::default(),
            on_open: None,
            on_close: None,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the sheet height
    pub fn height(mut self, px: f32) -> Self {
        self.config = self.config.height(px);
        self
    }

    /// Enable drag-to-dismiss
    pub fn close_on_drag(mut self, enabled: bool) -> Self {
        self.config = self.config.close_on_drag(enabled);
        self
    }

    /// Set the open callback
    pub fn on_open<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&()>) + 'static,
    {
        self.on_open = Some(Rc::new(f));
        self
    }

    /// Set the close callback
    pub fn on_close<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&()>) + 'static,
    {
        self.on_close = Some(Rc::new(f));
        self
    }

    /// Build the sheet and register it, without opening
    pub fn attach(self) -> (SheetHandle, Sheet<()>) {
        let sheet = Sheet::new(self.layer.driver_handle(), self.config);
        if let Some(cb) = self.on_open {
            sheet.set_on_open_rc(cb);
        }
        if let Some(cb) = self.on_close {
            sheet.set_on_close_rc(cb);
        }
        let handle = self.layer.register(sheet.clone());
        (handle, sheet)
    }

    /// Build, register, and open the sheet
    pub fn show(self) -> (SheetHandle, Sheet<()>) {
        let (handle, sheet) = self.attach();
        sheet.open(None);
        (handle, sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SheetVisibility;

    fn run(layer: &SheetLayer, frames: u32) {
        for _ in 0..frames {
            layer.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn test_builder_show_opens_on_next_tick() {
        let layer = SheetLayer::new();
        let (_handle, sheet) = layer.sheet().height(300.0).show();

        assert!(!sheet.is_mounted());
        layer.tick(1.0 / 60.0);
        assert!(sheet.is_mounted());
        assert!(layer.has_visible());

        run(&layer, 300);
        assert_eq!(sheet.state(), SheetVisibility::Open);
    }

    #[test]
    fn test_back_press_routes_to_topmost() {
        let layer = SheetLayer::new();
        let (_h1, bottom) = layer.sheet().show();
        let (_h2, top) = layer.sheet().show();
        run(&layer, 300);

        assert!(layer.handle_back_press());
        assert_eq!(top.state(), SheetVisibility::Closing);
        assert_eq!(bottom.state(), SheetVisibility::Open);

        // Once the top sheet is gone the next back press reaches the other
        run(&layer, 300);
        assert!(layer.handle_back_press());
        assert_eq!(bottom.state(), SheetVisibility::Closing);
    }

    #[test]
    fn test_back_press_with_no_mounted_sheet() {
        let layer = SheetLayer::new();
        let (_h, _sheet) = layer.sheet().attach();
        assert!(!layer.handle_back_press());
    }

    #[test]
    fn test_mask_press_routes_to_topmost() {
        let layer = SheetLayer::new();
        let (_h, sheet) = layer.sheet().show();
        run(&layer, 300);

        assert!(layer.handle_mask_press());
        assert_eq!(sheet.state(), SheetVisibility::Closing);
    }

    #[test]
    fn test_frames_lists_mounted_only() {
        let layer = SheetLayer::new();
        let (shown_handle, _shown) = layer.sheet().show();
        let (_hidden_handle, _hidden) = layer.sheet().attach();
        run(&layer, 10);

        let frames = layer.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].0, shown_handle);
        assert!(frames[0].1.mounted);
    }

    #[test]
    fn test_keyboard_inset_broadcast() {
        let layer = SheetLayer::new();
        let config = SheetConfig::new().keyboard_avoidance(true);
        let (_h, sheet) = layer.sheet().config(config).show();
        run(&layer, 10);

        layer.set_keyboard_inset(120.0);
        assert_eq!(sheet.frame().keyboard_inset, 120.0);
    }

    #[test]
    fn test_callbacks_through_builder() {
        use std::cell::Cell;

        let layer = SheetLayer::new();
        let opened = Rc::new(Cell::new(0u32));
        let closed = Rc::new(Cell::new(0u32));

        let (_h, sheet) = layer
            .sheet()
            .on_open({
                let opened = Rc::clone(&opened);
                move |_| opened.set(opened.get() + 1)
            })
            .on_close({
                let closed = Rc::clone(&closed);
                move |_| closed.set(closed.get() + 1)
            })
            .show();

        run(&layer, 300);
        assert_eq!(opened.get(), 1);

        sheet.close(None);
        run(&layer, 300);
        assert_eq!(closed.get(), 1);
        assert!(!layer.has_visible());
    }

    #[test]
    fn test_remove_unregisters() {
        let layer = SheetLayer::new();
        let (handle, _sheet) = layer.sheet().attach();
        assert_eq!(layer.sheet_count(), 1);
        assert!(layer.presentation(handle).is_some());

        layer.remove(handle);
        assert_eq!(layer.sheet_count(), 0);
        assert!(layer.presentation(handle).is_none());
    }
}
