use crate::ui::mvi::Intent;

/// A screen together with the parameters it was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Detail { product_id: u64 },
}

impl Route {
    /// Screen name as used by navigation intents.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
            Route::Detail { .. } => "Detail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    GoTo(Route),
    GoBack,
}

impl Intent for NavIntent {}
