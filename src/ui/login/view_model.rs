//! Login view-model: form state plus the delayed mock credential check.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Alerts, Navigator, Route};

use super::delay::Delay;
use super::intent::LoginIntent;
use super::reducer::LoginReducer;
use super::state::{LoginState, SubmitButton};

/// Simulated network latency between submit and the credential check.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(2000);

/// Alert text shown for any credential pair other than the mock one.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

const MOCK_USERNAME: &str = "Test";
const MOCK_PASSWORD: &str = "Password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
}

/// Exact, case-sensitive comparison against the fixed mock credentials.
pub fn check_credentials(username: &str, password: &str) -> LoginOutcome {
    if username == MOCK_USERNAME && password == MOCK_PASSWORD {
        LoginOutcome::Accepted
    } else {
        LoginOutcome::Rejected
    }
}

/// What a call to [`LoginViewModel::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// The check ran and its effect was emitted.
    Completed(LoginOutcome),
    /// A check was already pending; the control is disabled.
    Ignored,
}

pub struct LoginViewModel<D: Delay> {
    state: Mutex<LoginState>,
    delay: D,
    latency: Duration,
    navigator: Arc<dyn Navigator>,
    alerts: Arc<dyn Alerts>,
}

impl<D: Delay> LoginViewModel<D> {
    pub fn new(
        delay: D,
        latency: Duration,
        navigator: Arc<dyn Navigator>,
        alerts: Arc<dyn Alerts>,
    ) -> Self {
        Self {
            state: Mutex::new(LoginState::default()),
            delay,
            latency,
            navigator,
            alerts,
        }
    }

    pub fn state(&self) -> LoginState {
        self.state.lock().clone()
    }

    pub fn submit_button(&self) -> SubmitButton {
        self.state.lock().submit_button()
    }

    pub fn is_logging_in(&self) -> bool {
        self.state.lock().is_logging_in
    }

    /// Apply a form edit. Submit goes through [`Self::submit`].
    pub fn dispatch(&self, intent: LoginIntent) {
        let mut state = self.state.lock();
        *state = LoginReducer::reduce(std::mem::take(&mut *state), intent);
    }

    /// Run the mock login.
    ///
    /// Credentials are captured at submit time. After the delay, emits
    /// `go_to(Home)` on a match or one "Invalid credentials" alert otherwise,
    /// then re-enables the form whatever the outcome.
    pub async fn submit(&self) -> SubmitResult {
        let (username, password) = {
            let mut state = self.state.lock();
            if state.is_logging_in {
                return SubmitResult::Ignored;
            }
            *state = LoginReducer::reduce(std::mem::take(&mut *state), LoginIntent::Submit);
            (state.username.clone(), state.password.clone())
        };

        tracing::debug!(latency_ms = self.latency.as_millis() as u64, "Login submitted");
        self.delay.sleep(self.latency).await;

        let outcome = check_credentials(&username, &password);
        match outcome {
            LoginOutcome::Accepted => {
                tracing::info!("Login accepted");
                self.navigator.go_to(Route::Home);
            }
            LoginOutcome::Rejected => {
                tracing::info!("Login rejected");
                self.alerts.alert(INVALID_CREDENTIALS_MESSAGE);
            }
        }

        self.dispatch(LoginIntent::Finished);
        SubmitResult::Completed(outcome)
    }
}
