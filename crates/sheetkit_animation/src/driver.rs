//! Motion driver
//!
//! Owns every active spring and steps them once per frame on the render
//! timeline. Widget code registers springs through a [`DriverHandle`] and
//! observes motion through values and settle callbacks:
//!
//! - A started animation delivers its settle callback exactly once, on the
//!   tick where the spring settles.
//! - Starting a new animation (or a direct write) on the same entry
//!   supersedes the in-flight one: the previous callback is dropped without
//!   firing. Last writer wins; there is no cancellation token.
//! - One-shot frame callbacks run at the start of the next tick, before any
//!   spring is stepped. This is how work is deferred to the next
//!   display-refresh.
//!
//! All callbacks are invoked after the driver's borrow is released, so they
//! may freely call back into the driver. The driver is single-threaded, as
//! is the whole UI model.

use crate::spring::{Spring, SpringConfig};
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

new_key_type! {
    /// Handle to a registered motion entry
    pub struct MotionId;
}

/// Callback invoked exactly once when a started animation settles
pub type SettleCallback = Box<dyn FnOnce()>;

/// One-shot callback invoked at the start of the next tick
pub type FrameCallback = Box<dyn FnOnce()>;

struct MotionEntry {
    spring: Spring,
    on_settle: Option<SettleCallback>,
}

struct DriverInner {
    entries: SlotMap<MotionId, MotionEntry>,
    frame_callbacks: Vec<FrameCallback>,
}

/// The motion driver that ticks all active springs
///
/// Held by the application (or the sheet layer) and shared with widgets via
/// [`DriverHandle`]. The host calls [`MotionDriver::tick`] once per frame.
pub struct MotionDriver {
    inner: Rc<RefCell<DriverInner>>,
}

impl MotionDriver {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DriverInner {
                entries: SlotMap::with_key(),
                frame_callbacks: Vec::new(),
            })),
        }
    }

    /// Get a handle to this driver for passing to widgets
    pub fn handle(&self) -> DriverHandle {
        DriverHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Advance all animations by `dt` seconds
    ///
    /// Returns true if any spring is still in motion (another tick is
    /// needed).
    pub fn tick(&self, dt: f32) -> bool {
        // Deferred work scheduled for this frame runs first, outside the
        // borrow, so it may register or start animations.
        let frames: Vec<FrameCallback> = {
            let mut inner = self.inner.borrow_mut();
            inner.frame_callbacks.drain(..).collect()
        };
        for cb in frames {
            cb();
        }

        // Step springs; settle callbacks are collected under the borrow and
        // invoked after it is released.
        let mut settled: Vec<SettleCallback> = Vec::new();
        let mut active = false;
        {
            let mut inner = self.inner.borrow_mut();
            for (_, entry) in inner.entries.iter_mut() {
                entry.spring.step(dt);
                if entry.spring.is_settled() {
                    if let Some(cb) = entry.on_settle.take() {
                        settled.push(cb);
                    }
                } else {
                    active = true;
                }
            }
        }
        for cb in settled {
            cb();
        }

        active
    }

    /// Check if any spring is still in motion
    pub fn has_active(&self) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|(_, e)| !e.spring.is_settled())
    }

    /// Number of registered entries
    pub fn entry_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl Default for MotionDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the motion driver
///
/// Passed to widgets that need to register and drive animations. It won't
/// keep the driver alive; once the driver is dropped every operation becomes
/// a no-op.
#[derive(Clone)]
pub struct DriverHandle {
    inner: Weak<RefCell<DriverInner>>,
}

impl DriverHandle {
    /// Register a spring and return its entry ID
    pub fn register(&self, spring: Spring) -> Option<MotionId> {
        self.inner.upgrade().map(|inner| {
            inner.borrow_mut().entries.insert(MotionEntry {
                spring,
                on_settle: None,
            })
        })
    }

    /// Start an animation toward `target`, superseding any in-flight one
    ///
    /// The entry's current value and velocity carry over so retargeting
    /// mid-flight stays continuous. Any previously armed settle callback is
    /// dropped without firing; `on_settle` fires exactly once when this
    /// animation settles (unless itself superseded).
    pub fn start(&self, id: MotionId, target: f32, config: SpringConfig, on_settle: SettleCallback) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(entry) = inner.borrow_mut().entries.get_mut(id) {
                let value = entry.spring.value();
                let velocity = entry.spring.velocity();
                entry.spring = Spring::with_state(config, value, velocity, target);
                entry.on_settle = Some(on_settle);
            }
        }
    }

    /// Write a value directly, superseding any in-flight animation
    ///
    /// Used both for gesture driving (the value follows the finger, no
    /// spring) and for immediate resets. The pending settle callback, if
    /// any, is dropped without firing.
    pub fn set_value(&self, id: MotionId, value: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(entry) = inner.borrow_mut().entries.get_mut(id) {
                let config = entry.spring.config();
                entry.spring = Spring::new(config, value);
                entry.on_settle = None;
            }
        }
    }

    /// Get the current value of an entry
    pub fn value(&self, id: MotionId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().entries.get(id).map(|e| e.spring.value()))
    }

    /// Get the current target of an entry
    pub fn target(&self, id: MotionId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().entries.get(id).map(|e| e.spring.target()))
    }

    /// Check if an entry has settled
    ///
    /// Returns `true` if the entry is at rest, or if it (or the driver) no
    /// longer exists - nothing is animating either way.
    pub fn is_settled(&self, id: MotionId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().entries.get(id).map(|e| e.spring.is_settled()))
            .unwrap_or(true)
    }

    /// Remove an entry
    pub fn remove(&self, id: MotionId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().entries.remove(id);
        }
    }

    /// Schedule a one-shot callback for the start of the next tick
    pub fn request_frame(&self, cb: FrameCallback) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().frame_callbacks.push(cb);
        } else {
            tracing::debug!("request_frame on dead driver; callback dropped");
        }
    }

    /// Check if the driver is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Scalar
// ============================================================================

/// A single animated value registered with the driver
///
/// The widget-facing wrapper around a driver entry. Supports spring
/// animation with a settle callback, direct gesture driving, and immediate
/// writes. All three supersede each other: last writer wins.
pub struct AnimatedScalar {
    handle: DriverHandle,
    id: Option<MotionId>,
    /// Last written value, reported if the driver has gone away
    fallback: f32,
}

impl AnimatedScalar {
    /// Create a new scalar at `initial`, registered with the driver
    pub fn new(handle: DriverHandle, initial: f32) -> Self {
        let id = handle.register(Spring::new(SpringConfig::default(), initial));
        Self {
            handle,
            id,
            fallback: initial,
        }
    }

    /// Get the current value
    pub fn get(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.value(id))
            .unwrap_or(self.fallback)
    }

    /// Animate toward `target` with the given spring
    ///
    /// `on_settle` fires exactly once when the animation settles, unless a
    /// later animation or write supersedes it first.
    pub fn animate_to(
        &mut self,
        target: f32,
        config: SpringConfig,
        on_settle: impl FnOnce() + 'static,
    ) {
        self.fallback = target;
        if let Some(id) = self.id {
            self.handle.start(id, target, config, Box::new(on_settle));
        }
    }

    /// Drive the value directly (gesture input); supersedes any animation
    pub fn drive(&mut self, value: f32) {
        self.fallback = value;
        if let Some(id) = self.id {
            self.handle.set_value(id, value);
        }
    }

    /// Set the value immediately with no animation
    pub fn set_immediate(&mut self, value: f32) {
        self.fallback = value;
        if let Some(id) = self.id {
            self.handle.set_value(id, value);
        }
    }

    /// Check if the scalar is currently animating
    pub fn is_animating(&self) -> bool {
        self.id.map(|id| !self.handle.is_settled(id)).unwrap_or(false)
    }
}

impl Drop for AnimatedScalar {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove(id);
        }
    }
}
