//! State / intent / reducer primitives shared by every screen and the store.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Views never mutate state directly. They emit intents, a reducer folds the
//! intent into a new state, and the view re-derives from that.

/// Marker for state values owned by a screen or the store.
///
/// `Default` is the state at mount time; `Clone` lets readers take a copy
/// without holding a lock.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for user actions and system events fed to a reducer.
pub trait Intent: Send + 'static {}

/// Pure transition function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
