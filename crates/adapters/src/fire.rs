// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide fire-event channel.
//!
//! The external alarm service invokes a fixed callback when an armed alarm
//! goes off, possibly while no application context is alive. The callback
//! must not reach into application objects, so delivery goes through a
//! named, process-wide channel: [`alarm_fired`] posts a fixed token, and
//! whoever subscribed to the channel by name receives it. With no
//! subscriber the token is dropped, which is the correct degenerate case
//! for a process that has nothing to show.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tokio::sync::mpsc;

/// Channel name the alarm-fired callback posts to.
pub const ALARM_FIRE_CHANNEL: &str = "chime.alarm.fired";

/// Buffered signals per channel. Firing faster than the listener drains
/// drops the overflow rather than blocking the callback.
const CHANNEL_CAPACITY: usize = 8;

/// The fixed signal token delivered on a fire channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireSignal;

fn registry() -> &'static Mutex<HashMap<String, mpsc::Sender<FireSignal>>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, mpsc::Sender<FireSignal>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Subscribe to a named channel, replacing any previous subscriber.
pub fn subscribe(name: &str) -> mpsc::Receiver<FireSignal> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    registry().lock().insert(name.to_string(), tx);
    rx
}

/// Post the fire token to a named channel.
///
/// Never blocks and never panics: returns false (dropping the token) when
/// nobody is subscribed, the subscriber went away, or its buffer is full.
/// Safe to call from any context, including outside an async runtime.
pub fn post(name: &str) -> bool {
    let registry = registry().lock();
    match registry.get(name) {
        Some(tx) => tx.try_send(FireSignal).is_ok(),
        None => false,
    }
}

/// Process-wide callback the external alarm service invokes when an armed
/// alarm fires.
///
/// Posts the fixed token to [`ALARM_FIRE_CHANNEL`] and nothing else: no
/// state is read or written, so a double fire for the same occurrence is
/// harmless and the callback works even when no listener is alive.
pub fn alarm_fired() {
    let delivered = post(ALARM_FIRE_CHANNEL);
    tracing::debug!(delivered, "alarm fire signal posted");
}

#[cfg(test)]
#[path = "fire_tests.rs"]
mod tests;
