//! Intents for the login form.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Append a character to the focused text field.
    Type(char),
    /// Delete the last character of the focused text field.
    Backspace,
    FocusNext,
    FocusPrev,
    /// Submit pressed while the control is enabled.
    Submit,
    /// The delayed credential check has run.
    Finished,
}

impl Intent for LoginIntent {}
