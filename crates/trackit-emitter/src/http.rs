//! HTTP emitter
//!
//! A single background task drains an in-process queue and POSTs one
//! payload at a time, so events reach the collector in the order the
//! state machine decided them. `emit` never blocks and delivery errors
//! are only logged; the collector being down must not affect tracking.

use tokio::sync::mpsc;
use url::Url;

use trackit_core::{EventSink, LifecycleEvent};

use crate::payload::EventPayload;
use crate::Result;

/// Collector endpoint used when none is configured.
pub const DEFAULT_COLLECTOR_URL: &str = "http://localhost:6001/log_url";

pub struct HttpEmitter {
    tx: mpsc::UnboundedSender<LifecycleEvent>,
}

impl HttpEmitter {
    /// Create an emitter delivering to `collector` and spawn its worker.
    pub fn new(collector: &str) -> Result<Self> {
        let endpoint = Url::parse(collector)?;
        let client = reqwest::Client::builder().build()?;

        let (tx, mut rx) = mpsc::unbounded_channel::<LifecycleEvent>();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let payload = EventPayload::from(&event);
                match client.post(endpoint.clone()).json(&payload).send().await {
                    Ok(response) if response.status().is_success() => {
                        tracing::debug!(
                            event = %event.kind,
                            origin = %event.origin,
                            "Delivered lifecycle event"
                        );
                    }
                    Ok(response) => {
                        tracing::warn!(
                            event = %event.kind,
                            status = %response.status(),
                            "Collector rejected lifecycle event"
                        );
                    }
                    Err(e) => {
                        tracing::warn!(
                            event = %event.kind,
                            error = %e,
                            "Failed to deliver lifecycle event"
                        );
                    }
                }
            }
            tracing::debug!("Emitter worker stopped");
        });

        Ok(Self { tx })
    }
}

impl EventSink for HttpEmitter {
    fn emit(&self, event: LifecycleEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("Emitter worker gone; dropping lifecycle event");
        }
    }
}

/// Sink that logs events instead of delivering them anywhere.
#[derive(Debug, Default)]
pub struct NullEmitter;

impl EventSink for NullEmitter {
    fn emit(&self, event: LifecycleEvent) {
        tracing::info!(event = %event.kind, origin = %event.origin, "Lifecycle event");
    }
}
