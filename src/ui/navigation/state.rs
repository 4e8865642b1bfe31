use crate::ui::mvi::UiState;
use crate::ui::navigation::intent::Route;

/// Stack of open screens. Never empty; the bottom entry is the login screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationStack {
    routes: Vec<Route>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self {
            routes: vec![Route::Login],
        }
    }
}

impl UiState for NavigationStack {}

impl NavigationStack {
    /// The visible screen.
    pub fn current(&self) -> Route {
        self.routes.last().copied().unwrap_or(Route::Login)
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(super) fn push(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub(super) fn pop(mut self) -> Self {
        if self.routes.len() > 1 {
            self.routes.pop();
        }
        self
    }
}
