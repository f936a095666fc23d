//! Change feed long-poll endpoint.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use vault_core::VaultEvent;

/// A published event together with its monotone sequence number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub seq: u64,
    pub event: VaultEvent,
}

/// How long the server parks a poll before returning empty, in seconds.
#[cfg(feature = "server")]
const POLL_TIMEOUT_SECS: u64 = 25;

/// Wait for the next event with sequence greater than `after_seq`.
///
/// Returns `None` when the poll times out; the client simply re-polls, so a
/// quiet feed costs one empty round trip per timeout window. Events fired
/// between two polls are recovered from the replay buffer, keeping delivery
/// latency at one round trip.
#[post("/api/events/next")]
pub async fn next_event(after_seq: u64) -> Result<Option<EventEnvelope>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let timeout = std::time::Duration::from_secs(POLL_TIMEOUT_SECS);
        Ok(crate::await_next(after_seq, timeout).await)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
