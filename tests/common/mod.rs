//! Shared test utilities and fakes.

#![allow(dead_code)]

pub mod mock_catalog;

use parking_lot::Mutex;
use std::future::Future;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use storefront::catalog::{Product, Rating};
use storefront::ui::login::Delay;
use storefront::ui::navigation::{Alerts, NavIntent, Navigator, Route};
use tokio::sync::Notify;

/// Two records in the endpoint's JSON shape.
pub const TWO_PRODUCTS_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
    "price": 109.95,
    "description": "Your perfect pack for everyday use and walks in the forest.",
    "category": "men's clothing",
    "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
    "rating": { "rate": 3.9, "count": 120 }
  },
  {
    "id": 2,
    "title": "Mens Casual Premium Slim Fit T-Shirts",
    "price": 5,
    "description": "Slim-fitting style, contrast raglan long sleeve.",
    "category": "men's clothing",
    "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
    "rating": { "rate": 4.1, "count": 259 }
  }
]"#;

pub fn product(id: u64, price: f64) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        price,
        description: format!("Description of product {}", id),
        category: "electronics".to_string(),
        image: format!("https://example.com/img/{}.jpg", id),
        rating: Rating {
            rate: 4.5,
            count: id * 10,
        },
    }
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Poll `condition` until it holds or `timeout` passes.
pub async fn eventually(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

// -- Navigation fakes ---------------------------------------------------------

#[derive(Default)]
pub struct RecordingNavigator {
    intents: Mutex<Vec<NavIntent>>,
}

impl RecordingNavigator {
    pub fn intents(&self) -> Vec<NavIntent> {
        self.intents.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        self.intents.lock().push(NavIntent::GoTo(route));
    }

    fn go_back(&self) {
        self.intents.lock().push(NavIntent::GoBack);
    }
}

#[derive(Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

// -- Delay fake ---------------------------------------------------------------

/// Delay that only completes when the test calls [`GatedDelay::release`].
#[derive(Clone, Default)]
pub struct GatedDelay {
    gate: Arc<Notify>,
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl GatedDelay {
    pub fn release(&self) {
        self.gate.notify_one();
    }

    /// Durations passed to `sleep`, in call order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }
}

impl Delay for GatedDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.requested.lock().push(duration);
        let gate = Arc::clone(&self.gate);
        async move { gate.notified().await }
    }
}
