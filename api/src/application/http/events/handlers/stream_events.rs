use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use axum_extra::{TypedHeader, headers::UserAgent};
use futures::{Stream, stream};
use gutcare_core::domain::health_store::entities::StoreChange;
use tokio::sync::broadcast::{Receiver, error::RecvError};
use tracing::{debug, warn};

use crate::application::http::server::app_state::AppState;

pub const STORE_CHANGE_EVENT: &str = "store-change";
pub const RESYNC_EVENT: &str = "resync";

fn store_change_event(change: &StoreChange) -> Event {
    Event::default()
        .event(STORE_CHANGE_EVENT)
        .id(change.revision.to_string())
        .json_data(change)
        .unwrap_or_else(|e| Event::default().comment(format!("unserializable change: {e}")))
}

/// Turns the broadcast channel into SSE events. A lagging client gets a
/// `resync` event carrying the number of dropped changes and should refetch
/// `/store`.
pub fn change_stream(receiver: Receiver<StoreChange>) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(receiver, |mut receiver| async move {
        let event = match receiver.recv().await {
            Ok(change) => store_change_event(&change),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "event stream lagged");
                Event::default().event(RESYNC_EVENT).data(skipped.to_string())
            }
            Err(RecvError::Closed) => return None,
        };
        Some((Ok(event), receiver))
    })
}

#[utoipa::path(
    get,
    path = "",
    tag = "events",
    summary = "Live store changes",
    description = "Server-sent events: `store-change` with a StoreChange payload after every committed mutation, `resync` when changes were dropped.",
    responses(
        (status = 200, content_type = "text/event-stream", body = StoreChange)
    )
)]
pub async fn stream_events(
    State(state): State<AppState>,
    user_agent: Option<TypedHeader<UserAgent>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    match user_agent {
        Some(TypedHeader(agent)) => debug!(user_agent = agent.as_str(), "event stream opened"),
        None => debug!("event stream opened"),
    }

    Sse::new(change_stream(state.events.subscribe())).keep_alive(KeepAlive::default())
}
