//! Sheetkit Core
//!
//! Foundational primitives shared by the sheetkit crates:
//!
//! - **Events**: host input event types and the context record passed to widgets
//! - **State Machines**: the `StateTransitions` trait for FSM-driven widgets
//! - **Color**: the color type used by region styling

pub mod color;
pub mod events;
pub mod fsm;

pub use color::Color;
pub use events::{event_types, EventContext, EventType};
pub use fsm::StateTransitions;
