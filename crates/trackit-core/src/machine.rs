//! Session State Machine
//!
//! Folds browser signals into at most one active session at a time.
//! Pure and synchronous: every signal is handled to completion and
//! produces zero, one, or two lifecycle events. All termination paths
//! funnel through one exit routine, so a session emits exactly one
//! `started` and exactly one `session terminated`, in that order.

use chrono::{DateTime, Utc};

use crate::event::{EventKind, LifecycleEvent, TrackStatus};
use crate::origin::Origin;
use crate::session::Session;
use crate::signal::{Signal, TabId};

pub struct SessionMachine {
    active: Option<Session>,
    window_focused: bool,
}

impl SessionMachine {
    pub fn new() -> Self {
        Self {
            active: None,
            window_focused: true,
        }
    }

    /// Feed one signal into the machine.
    ///
    /// Returned events are in causal order; a tab switch yields the old
    /// session's `session terminated` before the new session's `started`.
    pub fn handle(&mut self, signal: Signal, now: DateTime<Utc>) -> Vec<LifecycleEvent> {
        let mut events = Vec::new();

        match signal {
            Signal::TabActivated { tab, url } => {
                if self.active.as_ref().is_some_and(|s| s.tab_id == tab) {
                    // Re-activation of the already-active tab is not a new visit.
                    return events;
                }
                self.end_session(&mut events, now);
                if let Some(origin) = Origin::from_url(&url) {
                    self.start_session(&mut events, origin, tab, now);
                }
            }
            Signal::TabNavigated { tab, url } => {
                // Navigation on a background tab must not spawn a session.
                if !self.active.as_ref().is_some_and(|s| s.tab_id == tab) {
                    return events;
                }
                self.end_session(&mut events, now);
                if let Some(origin) = Origin::from_url(&url) {
                    self.start_session(&mut events, origin, tab, now);
                }
            }
            Signal::TabClosed { tab } => {
                if self.active.as_ref().is_some_and(|s| s.tab_id == tab) {
                    self.end_session(&mut events, now);
                }
            }
            Signal::FocusLost => {
                if self.window_focused {
                    self.window_focused = false;
                    if let Some(session) = self.active.as_mut() {
                        session.focused = false;
                        events.push(LifecycleEvent::new(
                            EventKind::Paused,
                            session.origin.clone(),
                            now,
                        ));
                    }
                }
            }
            Signal::FocusGained => {
                if !self.window_focused {
                    self.window_focused = true;
                    if let Some(session) = self.active.as_mut() {
                        session.focused = true;
                        events.push(LifecycleEvent::new(
                            EventKind::Resumed,
                            session.origin.clone(),
                            now,
                        ));
                    }
                }
            }
            Signal::Tick => {
                // Paused sessions accrue no duration.
                if self.window_focused {
                    if let Some(session) = self.active.as_ref() {
                        events.push(LifecycleEvent::new(
                            EventKind::Heartbeat,
                            session.origin.clone(),
                            now,
                        ));
                    }
                }
            }
            Signal::Startup | Signal::Suspend => {
                self.end_session(&mut events, now);
            }
        }

        events
    }

    /// Current snapshot for the status query.
    pub fn status(&self) -> TrackStatus {
        TrackStatus {
            active: self.active.is_some() && self.window_focused,
        }
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    fn start_session(
        &mut self,
        events: &mut Vec<LifecycleEvent>,
        origin: Origin,
        tab: TabId,
        now: DateTime<Utc>,
    ) {
        let session = Session::new(origin.clone(), tab, now, self.window_focused);
        tracing::debug!(
            session_id = %session.id,
            origin = %session.origin,
            tab = session.tab_id,
            "Session started"
        );
        self.active = Some(session);
        events.push(LifecycleEvent::new(EventKind::Started, origin, now));
    }

    /// The single exit routine: emits one terminal event iff a session
    /// exists and clears the slot.
    fn end_session(&mut self, events: &mut Vec<LifecycleEvent>, now: DateTime<Utc>) {
        if let Some(session) = self.active.take() {
            tracing::debug!(
                session_id = %session.id,
                origin = %session.origin,
                "Session terminated"
            );
            events.push(LifecycleEvent::new(
                EventKind::Terminated,
                session.origin,
                now,
            ));
        }
    }
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}
