//! Tracker runtime
//!
//! Owns a [`SessionMachine`] on a single dispatch task: signals arrive
//! through one channel, the heartbeat ticker lives inside the same loop,
//! and every transition runs to completion before the next input is
//! taken. Emission goes through an [`EventSink`] and is never awaited,
//! so a slow or unavailable collector cannot stall session transitions.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::CoreError;
use crate::event::{EventSink, TrackStatus};
use crate::machine::SessionMachine;
use crate::signal::Signal;
use crate::Result;

/// Handle to a running tracker. Cloneable; dropping every handle stops
/// the dispatch loop after it drains pending signals.
#[derive(Clone)]
pub struct TrackerHandle {
    tx: mpsc::UnboundedSender<Signal>,
    status: Arc<RwLock<TrackStatus>>,
}

impl TrackerHandle {
    /// Enqueue a signal. Fire-and-forget: a stopped tracker drops it.
    pub fn signal(&self, signal: Signal) {
        if self.tx.send(signal).is_err() {
            tracing::debug!("Tracker stopped; dropping signal");
        }
    }

    /// Synchronous, infallible status snapshot.
    pub fn status(&self) -> TrackStatus {
        *self.status.read()
    }
}

/// Spawn the tracker dispatch loop.
///
/// The returned join handle completes once every [`TrackerHandle`] is
/// dropped; any session still tracked at that point is terminated so
/// its terminal event is not lost.
pub fn spawn_tracker(
    heartbeat: Duration,
    sink: Arc<dyn EventSink>,
) -> Result<(TrackerHandle, JoinHandle<()>)> {
    if heartbeat.is_zero() {
        return Err(CoreError::InvalidHeartbeat(heartbeat));
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let status = Arc::new(RwLock::new(TrackStatus::default()));
    let status_slot = Arc::clone(&status);

    let join = tokio::spawn(async move {
        let mut machine = SessionMachine::new();
        // The loop owns the only ticker, so a second one can never start.
        let mut ticker = tokio::time::interval(heartbeat);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick completes immediately; swallow it so heartbeats
        // begin one full period after spawn.
        ticker.tick().await;

        loop {
            let signal = tokio::select! {
                received = rx.recv() => match received {
                    Some(signal) => signal,
                    None => break,
                },
                _ = ticker.tick() => Signal::Tick,
            };

            for event in machine.handle(signal, Utc::now()) {
                sink.emit(event);
            }
            *status_slot.write() = machine.status();
        }

        for event in machine.handle(Signal::Suspend, Utc::now()) {
            sink.emit(event);
        }
        *status_slot.write() = machine.status();
        tracing::debug!("Tracker dispatch loop stopped");
    });

    Ok((TrackerHandle { tx, status }, join))
}
