use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::watch;

use crate::catalog::CatalogSnapshot;
use crate::ui::navigation::{Alerts, NavIntent, Navigator, Route};

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// The catalog snapshot went through a phase transition.
    CatalogChanged,
    /// Navigation requested by a view-model.
    Navigate(NavIntent),
    /// Modal notification requested by a view-model.
    Alert(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal input thread. It stops once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                        Ok(Event::Resize(..)) => event_tx.send(AppEvent::Resize),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Post a `CatalogChanged` event for every snapshot update.
pub async fn forward_catalog_changes(
    mut snapshots: watch::Receiver<CatalogSnapshot>,
    tx: Sender<AppEvent>,
) {
    while snapshots.changed().await.is_ok() {
        if tx.send(AppEvent::CatalogChanged).is_err() {
            break;
        }
    }
}

/// [`Navigator`] that hands intents to the event loop.
pub struct ChannelNavigator {
    tx: Sender<AppEvent>,
}

impl ChannelNavigator {
    pub fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }

    fn post(&self, intent: NavIntent) {
        if self.tx.send(AppEvent::Navigate(intent)).is_err() {
            tracing::debug!("Event loop gone, navigation dropped");
        }
    }
}

impl Navigator for ChannelNavigator {
    fn go_to(&self, route: Route) {
        self.post(NavIntent::GoTo(route));
    }

    fn go_back(&self) {
        self.post(NavIntent::GoBack);
    }
}

/// [`Alerts`] that opens the shell's modal popup.
pub struct ChannelAlerts {
    tx: Sender<AppEvent>,
}

impl ChannelAlerts {
    pub fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl Alerts for ChannelAlerts {
    fn alert(&self, message: &str) {
        if self.tx.send(AppEvent::Alert(message.to_string())).is_err() {
            tracing::debug!("Event loop gone, alert dropped");
        }
    }
}
