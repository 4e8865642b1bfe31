use crate::abort::AbortController;
use crate::catalog::{CatalogClient, ProductStore};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{
    forward_catalog_changes, AppEvent, ChannelAlerts, ChannelNavigator, EventHandler,
};
use crate::ui::input::handle_key;
use crate::ui::login::{LoginViewModel, TokioDelay};
use crate::ui::navigation::{Alerts, Navigator};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Run the storefront until the user quits.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let store = ProductStore::new(CatalogClient::new(config.catalog.endpoint.clone())?);
    let abort = AbortController::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    // Loaded once at startup, whichever screen is visible.
    {
        let store = store.clone();
        let signal = abort.signal();
        runtime.spawn(async move { store.load(&signal).await });
    }
    runtime.spawn(forward_catalog_changes(store.subscribe(), events.sender()));

    let navigator: Arc<dyn Navigator> = Arc::new(ChannelNavigator::new(events.sender()));
    let alerts: Arc<dyn Alerts> = Arc::new(ChannelAlerts::new(events.sender()));
    let login = Arc::new(LoginViewModel::new(
        TokioDelay,
        Duration::from_millis(config.login.delay_ms),
        Arc::clone(&navigator),
        alerts,
    ));
    let mut app = App::new(
        store,
        login,
        navigator,
        runtime.handle().clone(),
        abort.signal(),
    );

    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!(endpoint = %config.catalog.endpoint, "Storefront started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Ok(AppEvent::CatalogChanged) => app.on_catalog_changed(),
            Ok(AppEvent::Navigate(intent)) => app.on_navigate(intent),
            Ok(AppEvent::Alert(message)) => app.on_alert(message),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Teardown: anything still in flight settles as "Request Aborted".
    abort.abort();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(250));
    tracing::info!("Storefront stopped");
    Ok(())
}
