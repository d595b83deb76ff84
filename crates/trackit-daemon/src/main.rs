//! TrackIT daemon
//!
//! Native-messaging-style host: reads JSON-line browser signals from
//! stdin, feeds them to the tracker, answers status queries on stdout,
//! and delivers lifecycle events to the collector over HTTP. EOF on
//! stdin means the host browser is gone; the open session is closed out
//! before exit.

mod config;
mod labels;

use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use trackit_core::{spawn_tracker, Signal};
use trackit_emitter::HttpEmitter;

use crate::config::Config;
use crate::labels::LabelingSink;

/// One line of stdin input: either a browser signal or a status query.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Request {
    Signal(Signal),
    Query(StatusRequest),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum StatusRequest {
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trackit_core::init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        collector = %config.collector_url,
        heartbeat_secs = config.heartbeat_secs,
        "Starting trackitd"
    );

    let emitter = HttpEmitter::new(&config.collector_url)
        .with_context(|| format!("Bad collector URL: {}", config.collector_url))?;
    let sink = Arc::new(LabelingSink::new(emitter));
    let (tracker, done) = spawn_tracker(config.heartbeat(), sink)?;

    // The browser process just came up; clear anything stale.
    tracker.signal(Signal::Startup);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Request>(line) {
            Ok(Request::Signal(signal)) => tracker.signal(signal),
            Ok(Request::Query(StatusRequest::Status)) => {
                let status = tracker.status();
                println!("{}", serde_json::to_string(&status)?);
            }
            Err(e) => {
                tracing::warn!(error = %e, line, "Ignoring malformed signal line");
            }
        }
    }

    tracing::info!("Signal stream closed; shutting down");
    tracker.signal(Signal::Suspend);
    drop(tracker);
    done.await?;

    Ok(())
}
