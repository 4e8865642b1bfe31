//! State for the login form.

use crate::ui::mvi::UiState;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Submit,
            LoginField::Submit => LoginField::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Username => LoginField::Submit,
            LoginField::Password => LoginField::Username,
            LoginField::Submit => LoginField::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// True between submit and the end of the credential check.
    pub is_logging_in: bool,
}

impl UiState for LoginState {}

/// Render-ready submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl LoginState {
    pub fn submit_button(&self) -> SubmitButton {
        if self.is_logging_in {
            SubmitButton {
                label: "Loading...",
                enabled: false,
            }
        } else {
            SubmitButton {
                label: "Login",
                enabled: true,
            }
        }
    }

    /// Password as displayed: one bullet per character.
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_button_reads_login() {
        let button = LoginState::default().submit_button();
        assert_eq!(button.label, "Login");
        assert!(button.enabled);
    }

    #[test]
    fn pending_button_is_disabled() {
        let state = LoginState {
            is_logging_in: true,
            ..Default::default()
        };
        let button = state.submit_button();
        assert_eq!(button.label, "Loading...");
        assert!(!button.enabled);
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(LoginField::Submit.next(), LoginField::Username);
        assert_eq!(LoginField::Username.prev(), LoginField::Submit);
        assert_eq!(LoginField::Username.next().next(), LoginField::Submit);
    }

    #[test]
    fn password_is_masked() {
        let state = LoginState {
            password: "Pass".into(),
            ..Default::default()
        };
        assert_eq!(state.masked_password(), "••••");
    }
}
