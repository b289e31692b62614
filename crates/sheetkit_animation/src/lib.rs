//! Sheetkit Animation System
//!
//! Spring physics and motion driving for the sheet widget.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Overshoot Clamping**: springs that stop dead at their target
//! - **Clamped Interpolation**: derived values mapped from an animated scalar
//! - **MotionDriver**: ticks springs on the render timeline, delivers
//!   exactly-once settle callbacks with last-writer-wins supersession
//! - **Interruptible**: animations inherit velocity when retargeted

pub mod driver;
pub mod interpolate;
pub mod spring;

pub use driver::{AnimatedScalar, DriverHandle, FrameCallback, MotionDriver, MotionId, SettleCallback};
pub use interpolate::{Interpolate, Interpolation};
pub use spring::{Spring, SpringConfig};
