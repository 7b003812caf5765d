// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fire-event listener glue.
//!
//! Bridges the process-wide fire channel to the notification surface:
//! each received signal becomes one notification. What the notification
//! looks like (or whether it shows at all) is the adapter's concern.

use chime_adapters::fire::{self, FireSignal, ALARM_FIRE_CHANNEL};
use chime_adapters::NotifyAdapter;
use tokio::sync::mpsc;

/// Relays alarm fire signals to a notification adapter.
pub struct FireListener<N> {
    rx: mpsc::Receiver<FireSignal>,
    notifier: N,
}

impl<N: NotifyAdapter> FireListener<N> {
    /// Subscribe to the alarm fire channel, replacing any previous
    /// listener.
    pub fn subscribe(notifier: N) -> Self {
        Self {
            rx: fire::subscribe(ALARM_FIRE_CHANNEL),
            notifier,
        }
    }

    /// Relay one fire signal. Returns false once the channel has closed.
    pub async fn handle_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(FireSignal) => {
                if let Err(e) = self.notifier.notify("Alarm", "Your alarm is ringing").await {
                    tracing::warn!(error = %e, "alarm notification failed");
                }
                true
            }
            None => false,
        }
    }

    /// Relay signals until the channel closes.
    pub async fn run(mut self) {
        while self.handle_next().await {}
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
