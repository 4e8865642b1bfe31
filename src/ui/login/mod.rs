//! Mock login screen.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form fields, focus and the pending-submit flag
//! - `intent.rs` - Edits and submit lifecycle
//! - `reducer.rs` - State transitions
//! - `view_model.rs` - Delayed credential check and its effects
//!
//! The credential check is a fixed string comparison, not authentication.

mod delay;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use delay::{Delay, TokioDelay};
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginField, LoginState, SubmitButton};
pub use view_model::{
    check_credentials, LoginOutcome, LoginViewModel, SubmitResult, DEFAULT_LOGIN_DELAY,
    INVALID_CREDENTIALS_MESSAGE,
};
