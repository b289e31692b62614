//! State machine trait for FSM-driven widgets
//!
//! Widget lifecycle and interaction states are modeled as small enums with
//! an explicit transition table. Events are plain `u32` constants so widget
//! crates can define their own without a central registry.

use std::hash::Hash;

/// Trait for state enums that transition on events
///
/// Implement this on a state enum to define how events cause state
/// transitions. Returning `None` means the event does not transition out of
/// the current state.
///
/// # Example
///
/// ```
/// use sheetkit_core::StateTransitions;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum Toggle {
///     #[default]
///     Off,
///     On,
/// }
///
/// const FLIP: u32 = 1;
///
/// impl StateTransitions for Toggle {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Toggle::Off, FLIP) => Some(Toggle::On),
///             (Toggle::On, FLIP) => Some(Toggle::Off),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Toggle::Off.on_event(FLIP), Some(Toggle::On));
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}
