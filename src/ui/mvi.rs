//! MVI building blocks for screen state machines.
//!
//! Each screen is a state type, an intent enum, and a reducer. All branching
//! lives in the reducer; the app shell only dispatches intents and reads the
//! resulting state, which keeps every screen transition testable without a
//! terminal.

/// Marker trait for screen state.
///
/// States are immutable values: reducing consumes the old state and returns
/// a new one.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// An intent is anything that can change a screen: a keystroke, a submit,
/// a timer tick, or the outcome of an API call.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// Must be a pure function: `(State, Intent) -> State`, no side effects.
/// Side effects (API calls, session writes, navigation) are performed by the
/// app shell in response to the state the reducer produced.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
