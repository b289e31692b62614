//! The bottom sheet widget
//!
//! A `Sheet` couples the visibility state machine, the offset scalar, and
//! the drag recognizer. The host owns a [`MotionDriver`](sheetkit_animation::MotionDriver)
//! (or embeds a [`SheetLayer`](crate::layer::SheetLayer), which owns one),
//! ticks it every frame, feeds input events in, and draws from the
//! [`SheetFrame`] snapshot.
//!
//! # Example
//!
//! ```
//! use sheetkit::{Sheet, SheetConfig};
//! use sheetkit_animation::MotionDriver;
//!
//! let driver = MotionDriver::new();
//! let sheet: Sheet = Sheet::new(driver.handle(), SheetConfig::new().height(300.0))
//!     .on_close(|_| println!("closed"));
//!
//! sheet.open(None);
//! driver.tick(1.0 / 60.0); // the sheet mounts on the next frame
//! assert!(sheet.is_mounted());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use sheetkit_animation::{AnimatedScalar, DriverHandle, Interpolation, SpringConfig};
use sheetkit_core::{event_types, EventContext, StateTransitions};

use crate::config::{ModalPresentation, SheetConfig};
use crate::gesture::{DragRecognizer, ReleaseDecision};
use crate::state::{sheet_events, SheetVisibility};
use crate::style::ResolvedSheetStyle;

/// Callback invoked on open/close with the context passed to the call
///
/// `Rc`-stored since the UI model is single-threaded.
pub type SheetCallback<C> = Rc<dyn Fn(Option<&C>)>;

/// Which input currently drives the offset scalar
///
/// The gesture and a spring are never allowed to drive the scalar at the
/// same instant; springs start only on gesture release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DriveMode {
    Spring,
    Gesture,
}

struct SheetInner<C> {
    config: SheetConfig,
    style: ResolvedSheetStyle,
    state: SheetVisibility,
    /// True while the sheet content is in the render tree. Only meaningful
    /// while mounted; cleared as the first step of teardown so an exit
    /// animation never flashes stale content.
    content_rendered: bool,
    offset: AnimatedScalar,
    backdrop_fade: Interpolation<f32>,
    recognizer: DragRecognizer,
    drive: DriveMode,
    /// An open was requested and is waiting for the next frame tick
    pending_open: bool,
    keyboard_inset: f32,
    open_context: Option<C>,
    close_context: Option<C>,
    on_open: Option<SheetCallback<C>>,
    on_close: Option<SheetCallback<C>>,
    handle: DriverHandle,
}

/// A bottom sheet instance
///
/// Cheap to clone; clones share the same state. `C` is the caller-defined
/// context payload handed back to the open/close callbacks.
pub struct Sheet<C = ()> {
    inner: Rc<RefCell<SheetInner<C>>>,
}

impl<C> Clone for Sheet<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: 'static> Sheet<C> {
    /// Create a sheet registered with the given driver
    ///
    /// The offset starts at the configured height (fully hidden).
    pub fn new(handle: DriverHandle, config: SheetConfig) -> Self {
        let offset = AnimatedScalar::new(handle.clone(), config.height);
        let backdrop_fade = Interpolation::clamped((0.0, config.height), (1.0, 0.0));
        let recognizer = DragRecognizer::new(config.close_on_drag);
        let style = config.style.resolve();

        Self {
            inner: Rc::new(RefCell::new(SheetInner {
                config,
                style,
                state: SheetVisibility::Closed,
                content_rendered: false,
                offset,
                backdrop_fade,
                recognizer,
                drive: DriveMode::Spring,
                pending_open: false,
                keyboard_inset: 0.0,
                open_context: None,
                close_context: None,
                on_open: None,
                on_close: None,
                handle,
            })),
        }
    }

    /// Set the callback invoked when the sheet becomes visible
    pub fn on_open(self, f: impl Fn(Option<&C>) + 'static) -> Self {
        self.inner.borrow_mut().on_open = Some(Rc::new(f));
        self
    }

    /// Set the callback invoked after the sheet has fully closed
    pub fn on_close(self, f: impl Fn(Option<&C>) + 'static) -> Self {
        self.inner.borrow_mut().on_close = Some(Rc::new(f));
        self
    }

    pub(crate) fn set_on_open_rc(&self, cb: SheetCallback<C>) {
        self.inner.borrow_mut().on_open = Some(cb);
    }

    pub(crate) fn set_on_close_rc(&self, cb: SheetCallback<C>) {
        self.inner.borrow_mut().on_close = Some(cb);
    }

    // =========================================================================
    // Imperative surface
    // =========================================================================

    /// Open the sheet
    ///
    /// The mount is deferred to the next frame tick so it never races the
    /// host's initial layout. The open callback fires on that tick, as soon
    /// as the sheet is visible and before the enter animation completes.
    /// Opening an already opening or open sheet is a no-op.
    pub fn open(&self, context: Option<C>) {
        let mut inner = self.inner.borrow_mut();
        if inner.pending_open || inner.state.is_mounted() {
            tracing::debug!(state = ?inner.state, "open ignored");
            return;
        }
        inner.pending_open = true;
        inner.open_context = context;
        let handle = inner.handle.clone();
        drop(inner);

        let shared = Rc::clone(&self.inner);
        handle.request_frame(Box::new(move || Self::perform_open(&shared)));
    }

    /// Close the sheet
    ///
    /// Valid while open or opening; closing an already closing sheet
    /// restarts the exit animation (and the latest context wins). Closing a
    /// sheet whose open is still pending cancels the open outright.
    pub fn close(&self, context: Option<C>) {
        self.begin_close(sheet_events::CLOSE, context);
    }

    /// The mask region was tapped
    ///
    /// Takes the same path as [`close`](Self::close) with no context when
    /// `close_on_mask_press` is set. Returns true if a close was initiated.
    pub fn handle_mask_press(&self) -> bool {
        {
            let inner = self.inner.borrow();
            if !inner.config.close_on_mask_press || !inner.state.is_mounted() {
                return false;
            }
        }
        self.begin_close(sheet_events::MASK_PRESS, None);
        true
    }

    /// The platform back action fired
    ///
    /// Returns true if the sheet consumed it (it was mounted and
    /// `close_on_back_press` is set).
    pub fn handle_back_press(&self) -> bool {
        {
            let inner = self.inner.borrow();
            if !inner.config.close_on_back_press || !inner.state.is_mounted() {
                return false;
            }
        }
        self.begin_close(sheet_events::BACK_PRESS, None);
        true
    }

    /// Feed the current keyboard inset (logical pixels, 0 when hidden)
    pub fn set_keyboard_inset(&self, inset: f32) {
        self.inner.borrow_mut().keyboard_inset = inset;
    }

    /// Route a host input event to the sheet
    pub fn handle_event(&self, ev: &EventContext) {
        match ev.event_type {
            event_types::DRAG => self.drag_update(ev.drag_delta_y),
            event_types::DRAG_END => self.drag_release(ev.drag_delta_y),
            event_types::BACK => {
                self.handle_back_press();
            }
            event_types::KEYBOARD_SHOW => self.set_keyboard_inset(ev.keyboard_height),
            event_types::KEYBOARD_HIDE => self.set_keyboard_inset(0.0),
            _ => {}
        }
    }

    /// First-touch arbitration: whether the sheet claims drag gestures
    pub fn wants_gesture(&self) -> bool {
        self.inner.borrow().recognizer.wants_gesture()
    }

    // =========================================================================
    // Lifecycle internals
    // =========================================================================

    fn perform_open(shared: &Rc<RefCell<SheetInner<C>>>) {
        let mut inner = shared.borrow_mut();
        if !inner.pending_open {
            // Cancelled before the frame arrived
            return;
        }
        inner.pending_open = false;

        let Some(next) = inner.state.on_event(sheet_events::OPEN) else {
            return;
        };
        tracing::debug!(from = ?inner.state, to = ?next, "sheet mounting");
        inner.state = next;
        inner.content_rendered = true;
        inner.drive = DriveMode::Spring;

        let settle_target = Rc::clone(shared);
        inner
            .offset
            .animate_to(0.0, SpringConfig::sheet_open(), move || {
                Self::on_show_settled(&settle_target);
            });

        let cb = inner.on_open.clone();
        let context = inner.open_context.take();
        drop(inner);

        // Visible now; the callback runs before the animation completes
        if let Some(cb) = cb {
            cb(context.as_ref());
        }
    }

    /// A spring aimed at offset 0 settled (enter spring or settle-back)
    fn on_show_settled(shared: &Rc<RefCell<SheetInner<C>>>) {
        let mut inner = shared.borrow_mut();
        if inner.state != SheetVisibility::Opening {
            return;
        }
        if let Some(next) = inner.state.on_event(sheet_events::SETTLED) {
            tracing::debug!(to = ?next, "sheet settled open");
            inner.state = next;
        }
    }

    fn begin_close(&self, event: u32, context: Option<C>) {
        let mut inner = self.inner.borrow_mut();

        if inner.pending_open && !inner.state.is_mounted() {
            inner.pending_open = false;
            inner.open_context = None;
            tracing::debug!("close cancelled a pending open");
            return;
        }

        if inner.state == SheetVisibility::Closing && event == sheet_events::CLOSE {
            tracing::debug!("close restarted while closing");
        } else {
            let Some(next) = inner.state.on_event(event) else {
                tracing::trace!(state = ?inner.state, event, "close event ignored");
                return;
            };
            tracing::debug!(from = ?inner.state, to = ?next, "sheet closing");
            inner.state = next;
        }

        inner.close_context = context;
        inner.drive = DriveMode::Spring;
        let height = inner.config.height;
        let shared = Rc::clone(&self.inner);
        inner
            .offset
            .animate_to(height, SpringConfig::sheet_close(), move || {
                Self::finish_close(&shared);
            });
    }

    /// The exit spring settled: run the sequenced teardown
    fn finish_close(shared: &Rc<RefCell<SheetInner<C>>>) {
        let mut inner = shared.borrow_mut();
        if inner.state != SheetVisibility::Closing {
            return;
        }

        // Teardown order matters: content leaves the render tree first, the
        // scalar resets while still mounted, then the modal unmounts, and
        // only then does the caller hear about it.
        inner.content_rendered = false;
        let hidden = inner.config.height;
        inner.offset.set_immediate(hidden);
        if let Some(next) = inner.state.on_event(sheet_events::SETTLED) {
            tracing::debug!(to = ?next, "sheet unmounted");
            inner.state = next;
        }
        let cb = inner.on_close.clone();
        let context = inner.close_context.take();
        drop(inner);

        if let Some(cb) = cb {
            cb(context.as_ref());
        }
    }

    // =========================================================================
    // Gesture internals
    // =========================================================================

    fn drag_update(&self, delta_y: f32) {
        let mut inner = self.inner.borrow_mut();
        if !matches!(
            inner.state,
            SheetVisibility::Opening | SheetVisibility::Open
        ) {
            return;
        }
        if let Some(displacement) = inner.recognizer.update(delta_y) {
            inner.drive = DriveMode::Gesture;
            inner.offset.drive(displacement);
        }
    }

    fn drag_release(&self, delta_y: f32) {
        let mut inner = self.inner.borrow_mut();
        let height = inner.config.height;
        let Some(decision) = inner.recognizer.release(delta_y, height) else {
            return;
        };
        if !matches!(
            inner.state,
            SheetVisibility::Opening | SheetVisibility::Open
        ) {
            // An imperative close superseded the drag mid-gesture
            return;
        }
        inner.drive = DriveMode::Spring;
        match decision {
            ReleaseDecision::Commit => {
                drop(inner);
                self.begin_close(sheet_events::DRAG_COMMIT, None);
            }
            ReleaseDecision::Settle => {
                let shared = Rc::clone(&self.inner);
                inner
                    .offset
                    .animate_to(0.0, SpringConfig::settle_back(), move || {
                        Self::on_show_settled(&shared);
                    });
            }
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Current lifecycle state
    pub fn state(&self) -> SheetVisibility {
        self.inner.borrow().state
    }

    /// Whether the modal surface is mounted
    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().state.is_mounted()
    }

    /// Whether the sheet content is in the render tree
    ///
    /// Content implies mounted; the combination content-without-mount is
    /// unrepresentable.
    pub fn content_rendered(&self) -> bool {
        let inner = self.inner.borrow();
        inner.content_rendered && inner.state.is_mounted()
    }

    /// Current vertical offset: 0 fully shown, `height` fully hidden
    pub fn offset(&self) -> f32 {
        self.inner.borrow().offset.get()
    }

    /// Backdrop opacity derived from the offset, clamped to [0, 1]
    pub fn backdrop_opacity(&self) -> f32 {
        let inner = self.inner.borrow();
        inner.backdrop_fade.sample(inner.offset.get())
    }

    /// Whether a spring is driving the offset
    pub fn is_animating(&self) -> bool {
        let inner = self.inner.borrow();
        inner.drive == DriveMode::Spring && inner.offset.is_animating()
    }

    /// Whether a drag gesture currently owns the offset
    ///
    /// While this holds, no spring is driving the scalar; springs start only
    /// on gesture release.
    pub fn gesture_active(&self) -> bool {
        self.inner.borrow().drive == DriveMode::Gesture
    }

    /// Per-frame render snapshot
    pub fn frame(&self) -> SheetFrame {
        let inner = self.inner.borrow();
        let offset = inner.offset.get();
        SheetFrame {
            mounted: inner.state.is_mounted(),
            content_rendered: inner.content_rendered && inner.state.is_mounted(),
            offset,
            backdrop_opacity: inner.backdrop_fade.sample(offset),
            container_height: inner.config.height,
            keyboard_inset: if inner.config.keyboard_avoidance {
                inner.keyboard_inset
            } else {
                0.0
            },
            show_drag_handle: inner.config.close_on_drag,
        }
    }

    /// Resolved styles for every region
    pub fn style(&self) -> ResolvedSheetStyle {
        self.inner.borrow().style.clone()
    }

    /// What the host modal primitive must do right now
    pub fn presentation(&self) -> ModalPresentation {
        let inner = self.inner.borrow();
        ModalPresentation {
            visible: inner.state.is_mounted(),
            transparent: true,
            hardware_accelerated: true,
            animation: inner.config.presentation,
            supported_orientations: inner.config.supported_orientations.clone(),
        }
    }
}

/// Per-frame render snapshot of a sheet
///
/// Everything the host needs to draw one frame: whether to present the
/// modal, whether content is in the tree, the sheet translation, and the
/// derived backdrop opacity.
#[derive(Clone, Debug)]
pub struct SheetFrame {
    pub mounted: bool,
    pub content_rendered: bool,
    /// Vertical translation of the container region
    pub offset: f32,
    /// Derived opacity for the backdrop region
    pub backdrop_opacity: f32,
    /// Fixed height of the container region
    pub container_height: f32,
    /// Bottom padding the wrapper applies while the keyboard is up (0 when
    /// keyboard avoidance is disabled)
    pub keyboard_inset: f32,
    /// Whether the drag handle region is rendered
    pub show_drag_handle: bool,
}
