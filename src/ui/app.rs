use std::sync::Arc;

use tokio::runtime::Handle;

use crate::abort::AbortSignal;
use crate::catalog::{CatalogSnapshot, ProductStore};
use crate::ui::detail::{DetailViewModel, ProductDetailView};
use crate::ui::home::{GridCursor, GridIntent, GridReducer, ProductListView};
use crate::ui::login::{LoginIntent, LoginState, LoginViewModel, TokioDelay};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavIntent, NavigationReducer, NavigationStack, Navigator, Route};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Shell state: the screen stack plus everything the screens read.
pub struct App {
    should_quit: bool,
    navigation: NavigationStack,
    store: ProductStore,
    login: Arc<LoginViewModel<TokioDelay>>,
    grid_cursor: GridCursor,
    /// Open modal alert, if any.
    alert: Option<String>,
    navigator: Arc<dyn Navigator>,
    runtime: Handle,
    abort: AbortSignal,
}

impl App {
    pub fn new(
        store: ProductStore,
        login: Arc<LoginViewModel<TokioDelay>>,
        navigator: Arc<dyn Navigator>,
        runtime: Handle,
        abort: AbortSignal,
    ) -> Self {
        Self {
            should_quit: false,
            navigation: NavigationStack::default(),
            store,
            login,
            grid_cursor: GridCursor::default(),
            alert: None,
            navigator,
            runtime,
            abort,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.navigation.current()
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    pub fn catalog(&self) -> CatalogSnapshot {
        self.store.snapshot()
    }

    pub fn login_state(&self) -> LoginState {
        self.login.state()
    }

    pub fn list_view(&self) -> ProductListView {
        ProductListView::derive(&self.catalog())
    }

    /// Detail render state, when the detail screen is visible.
    pub fn detail_view(&self) -> Option<ProductDetailView> {
        match self.route() {
            Route::Detail { product_id } => {
                Some(DetailViewModel::new(product_id).view(&self.catalog()))
            }
            _ => None,
        }
    }

    pub fn grid_cursor(&self) -> GridCursor {
        self.grid_cursor
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn on_alert(&mut self, message: String) {
        self.alert = Some(message);
    }

    pub fn on_navigate(&mut self, intent: NavIntent) {
        if intent == NavIntent::GoTo(Route::Home) {
            dispatch_mvi!(self, grid_cursor, GridReducer, GridIntent::Reset);
        }
        dispatch_mvi!(self, navigation, NavigationReducer, intent);
        tracing::debug!(screen = self.route().name(), "Navigated");
    }

    pub fn on_catalog_changed(&mut self) {
        let item_count = self.grid_item_count();
        dispatch_mvi!(self, grid_cursor, GridReducer, GridIntent::Clamp { item_count });
    }

    pub fn grid_item_count(&self) -> usize {
        self.list_view().entries().len()
    }

    pub fn dispatch_grid(&mut self, intent: GridIntent) {
        dispatch_mvi!(self, grid_cursor, GridReducer, intent);
    }

    pub fn dispatch_login(&self, intent: LoginIntent) {
        self.login.dispatch(intent);
    }

    /// Start the mock login in the background. No-op while one is pending.
    pub fn submit_login(&self) {
        if self.login.is_logging_in() {
            return;
        }
        let login = Arc::clone(&self.login);
        self.runtime.spawn(async move {
            login.submit().await;
        });
    }

    /// Open the detail screen for the card under the cursor.
    pub fn open_selected(&self) {
        let view = self.list_view();
        if let Some(entry) = view.entries().get(self.grid_cursor.selected) {
            entry.select(self.navigator.as_ref());
        }
    }

    pub fn go_back(&self) {
        match self.route() {
            Route::Detail { product_id } => {
                DetailViewModel::new(product_id).go_back(self.navigator.as_ref())
            }
            _ => self.navigator.go_back(),
        }
    }

    /// Explicit re-fetch of the catalog.
    pub fn reload_catalog(&self) {
        let store = self.store.clone();
        let abort = self.abort.clone();
        self.runtime.spawn(async move {
            store.load(&abort).await;
        });
    }
}
