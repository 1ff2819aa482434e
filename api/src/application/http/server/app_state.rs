use std::sync::Arc;

use gutcare_core::{
    application::GutCareService,
    domain::health_store::{entities::StoreChange, ports::StoreObserver},
};
use tokio::sync::broadcast;
use tracing::trace;

use crate::args::Args;

const EVENT_BUFFER: usize = 64;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: GutCareService,
    pub events: broadcast::Sender<StoreChange>,
}

impl AppState {
    /// Also subscribes the event channel to the health store.
    pub fn new(args: Arc<Args>, service: GutCareService) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        service
            .health_store()
            .subscribe(Arc::new(BroadcastObserver {
                sender: events.clone(),
            }));

        Self {
            args,
            service,
            events,
        }
    }
}

/// Forwards store changes to connected event-stream clients.
pub struct BroadcastObserver {
    sender: broadcast::Sender<StoreChange>,
}

impl StoreObserver for BroadcastObserver {
    fn on_change(&self, change: &StoreChange) {
        // No receivers is the normal idle state.
        if self.sender.send(change.clone()).is_err() {
            trace!(revision = change.revision, "no event listeners");
        }
    }
}
