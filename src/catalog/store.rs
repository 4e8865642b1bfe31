//! Process-wide product store.
//!
//! Holds the catalog snapshot and runs the load operation. Created once by
//! the application root and handed to screens by clone; all clones share the
//! same snapshot.

use std::sync::Arc;

use tokio::sync::watch;

use crate::abort::AbortSignal;
use crate::catalog::client::{CatalogClient, FetchError};
use crate::catalog::snapshot::{CatalogIntent, CatalogReducer, CatalogSnapshot};
use crate::ui::mvi::Reducer;

#[derive(Clone)]
pub struct ProductStore {
    client: CatalogClient,
    state: Arc<watch::Sender<CatalogSnapshot>>,
}

impl ProductStore {
    pub fn new(client: CatalogClient) -> Self {
        let (state, _) = watch::channel(CatalogSnapshot::default());
        Self {
            client,
            state: Arc::new(state),
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver that is woken on every phase transition.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }

    /// Fetch the whole catalog and publish the outcome on the snapshot.
    ///
    /// Never fails: errors and aborts end up in `error_message`. Concurrent
    /// calls are not deduplicated; whichever settles last wins.
    pub async fn load(&self, abort: &AbortSignal) {
        self.dispatch(CatalogIntent::LoadStarted);
        tracing::debug!(endpoint = %self.client.endpoint(), "Catalog load started");

        let result = tokio::select! {
            biased;
            _ = abort.aborted() => Err(FetchError::Aborted),
            result = self.client.fetch_products() => result,
        };

        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "Catalog loaded");
                self.dispatch(CatalogIntent::LoadSucceeded { products });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Catalog load failed");
                self.dispatch(CatalogIntent::LoadFailed {
                    message: err.diagnostic(),
                });
            }
        }
    }

    fn dispatch(&self, intent: CatalogIntent) {
        self.state
            .send_modify(|state| *state = CatalogReducer::reduce(std::mem::take(state), intent));
    }
}
