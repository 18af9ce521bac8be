//! Async event loop around a [`CatalogEngine`].
//!
//! The driver owns the engine for the duration of a session and waits on three
//! sources at once:
//!
//! ```text
//! intent channel ──┐
//! fetch completions ├─ select! ─▶ engine
//! search deadline ──┘
//! ```
//!
//! Fetches are never cancelled. A superseded fetch still completes and the engine
//! drops it as stale. Closing the intent channel ends the session once in-flight
//! fetches and the pending search have settled.

use super::engine::CatalogEngine;
use super::handler::Intent;
use super::load_cycle::RequestTicket;
use super::modes::Phase;
use crate::domain::error::Result;
use crate::domain::PageResponse;
use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

type Completion = BoxFuture<'static, (RequestTicket, Result<PageResponse>)>;

/// Runs `engine` until `intents` closes and all work has settled, then hands it back.
///
/// If the active collection has never been loaded its first page is requested
/// before any intent is read.
pub async fn run(mut engine: CatalogEngine, mut intents: mpsc::Receiver<Intent>) -> CatalogEngine {
    let mut in_flight: FuturesUnordered<Completion> = FuturesUnordered::new();
    let mut accepting = true;

    if engine.state().phase == Phase::Idle {
        in_flight.push(engine.start_session().into_completion());
    }

    loop {
        let deadline = engine.search_deadline();
        if !accepting && in_flight.is_empty() && deadline.is_none() {
            break;
        }

        tokio::select! {
            intent = intents.recv(), if accepting => match intent {
                Some(intent) => {
                    if let Some(job) = engine.handle(intent, Instant::now()) {
                        in_flight.push(job.into_completion());
                    }
                }
                None => {
                    tracing::debug!(
                        in_flight = in_flight.len(),
                        search_pending = deadline.is_some(),
                        "intent channel closed, draining"
                    );
                    accepting = false;
                }
            },
            Some((ticket, result)) = in_flight.next(), if !in_flight.is_empty() => {
                engine.complete(&ticket, result);
            }
            () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some(job) = engine.poll_search(Instant::now()) {
                    in_flight.push(job.into_completion());
                }
            }
        }
    }

    tracing::debug!("driver finished");
    engine
}
