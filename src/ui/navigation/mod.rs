//! Screen stack and the outbound navigation/alert interfaces.
//!
//! View-models never touch the stack. They call a [`Navigator`] or
//! [`Alerts`]; the shell turns those calls into [`NavIntent`]s and reduces
//! them into the [`NavigationStack`].

mod intent;
mod navigator;
mod reducer;
mod state;

pub use intent::{NavIntent, Route};
pub use navigator::{Alerts, Navigator};
pub use reducer::NavigationReducer;
pub use state::NavigationStack;
