//! Provider worker thread
//!
//! Handles suggestion fetches in a background thread so the UI never blocks
//! on the network. Requests arrive over a channel; results go back over
//! another and are polled from the event loop.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::gemini::GeminiClient;
use super::{FetchRequest, FetchResponse, ProviderError};
use crate::config::ProviderConfig;

/// How often the in-flight watcher looks for a queued Cancel message
const CANCEL_POLL_INTERVAL_MS: u64 = 25;

/// Spawn the provider worker thread
///
/// A misconfigured provider (no API key) still gets a worker: the error is
/// reported per-request so the rest of the app stays usable.
pub fn spawn_worker(config: &ProviderConfig) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();

    let client_result = GeminiClient::from_config(config);

    std::thread::spawn(move || {
        worker_loop(client_result, request_rx, response_tx);
    });

    (request_tx, response_rx)
}

/// Main worker loop; runs until the request channel is closed
fn worker_loop(
    client_result: Result<GeminiClient, ProviderError>,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    let client = match client_result {
        Ok(c) => Some(c),
        Err(e) => {
            log::debug!("provider not configured: {e}");
            None
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build();
    let runtime = match runtime {
        Ok(rt) => rt,
        Err(e) => {
            // Without a runtime every fetch fails; keep answering so the UI
            // shows an error instead of hanging on a dead channel.
            log::debug!("failed to build tokio runtime: {e}");
            while let Ok(request) = request_rx.recv() {
                if let FetchRequest::Fetch { request_id, .. } = request {
                    let _ = response_tx.send(FetchResponse::Error {
                        message: format!("Internal error: {e}"),
                        request_id,
                    });
                }
            }
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        match request {
            FetchRequest::Fetch {
                request,
                request_id,
            } => {
                let Some(client) = client.as_ref() else {
                    let _ = response_tx.send(FetchResponse::Error {
                        message: "Provider not configured. Set api_key in [provider] config \
                                  or the LUNCHSPIN_API_KEY environment variable."
                            .to_string(),
                        request_id,
                    });
                    continue;
                };

                let result = runtime.block_on(fetch_cancellable(
                    client,
                    &request,
                    request_id,
                    &request_rx,
                ));

                let response = match result {
                    Ok(suggestions) => FetchResponse::Suggestions {
                        suggestions,
                        request_id,
                    },
                    Err(ProviderError::Cancelled) => {
                        log::debug!("cancelled request {request_id} during fetch");
                        FetchResponse::Cancelled { request_id }
                    }
                    Err(e) => FetchResponse::Error {
                        message: e.to_string(),
                        request_id,
                    },
                };

                if response_tx.send(response).is_err() {
                    // Main thread disconnected
                    return;
                }
            }
            FetchRequest::Cancel { request_id } => {
                // Cancel received when no request is in-flight - just acknowledge
                log::debug!("cancelled request {request_id} (no active request)");
                let _ = response_tx.send(FetchResponse::Cancelled { request_id });
            }
        }
    }

    log::debug!("provider worker thread shutting down");
}

/// Run a fetch while watching the request channel for a matching Cancel
///
/// The HTTP call and the cancel watcher race; whichever finishes first
/// decides the outcome. A cancel for a different request id is ignored.
async fn fetch_cancellable(
    client: &GeminiClient,
    request: &crate::suggestion::SuggestionRequest,
    request_id: u64,
    request_rx: &Receiver<FetchRequest>,
) -> Result<Vec<crate::suggestion::Suggestion>, ProviderError> {
    let cancel = CancellationToken::new();

    tokio::select! {
        result = client.fetch_with_cancel(request, cancel.clone()) => result,
        _ = watch_for_cancel(request_rx, request_id, &cancel) => Err(ProviderError::Cancelled),
    }
}

/// Poll the request channel until a Cancel for the current request arrives
async fn watch_for_cancel(
    request_rx: &Receiver<FetchRequest>,
    current_request_id: u64,
    cancel: &CancellationToken,
) {
    loop {
        match request_rx.try_recv() {
            Ok(FetchRequest::Cancel { request_id }) => {
                if request_id == current_request_id {
                    cancel.cancel();
                    return;
                }
                log::debug!(
                    "ignoring cancel for request {request_id} (current: {current_request_id})"
                );
            }
            Ok(FetchRequest::Fetch { .. }) => {
                // The UI cancels before re-submitting, so this shouldn't happen
                log::warn!("received new fetch while one is in flight - it will be lost");
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                cancel.cancel();
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(CANCEL_POLL_INTERVAL_MS)).await;
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
