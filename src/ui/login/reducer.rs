//! Reducer for the login form.

use crate::ui::mvi::Reducer;

use super::intent::LoginIntent;
use super::state::{LoginField, LoginState};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // The form is frozen while a check is pending.
            LoginIntent::Type(_) | LoginIntent::Backspace | LoginIntent::Submit
                if state.is_logging_in =>
            {
                state
            }
            LoginIntent::Type(c) => {
                let mut state = state;
                match state.focus {
                    LoginField::Username => state.username.push(c),
                    LoginField::Password => state.password.push(c),
                    LoginField::Submit => {}
                }
                state
            }
            LoginIntent::Backspace => {
                let mut state = state;
                match state.focus {
                    LoginField::Username => {
                        state.username.pop();
                    }
                    LoginField::Password => {
                        state.password.pop();
                    }
                    LoginField::Submit => {}
                }
                state
            }
            LoginIntent::FocusNext => LoginState {
                focus: state.focus.next(),
                ..state
            },
            LoginIntent::FocusPrev => LoginState {
                focus: state.focus.prev(),
                ..state
            },
            LoginIntent::Submit => LoginState {
                is_logging_in: true,
                ..state
            },
            LoginIntent::Finished => LoginState {
                is_logging_in: false,
                ..state
            },
        }
    }
}
