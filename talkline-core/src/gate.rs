// SPDX-FileCopyrightText: 2026 Talkline Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client Lifecycle Gate
//!
//! Owns the single vendor client handle and guards every operation behind
//! it. The vendor SDK is not documented as thread-safe, so the gate's
//! mutable state sits behind a mutex with a single-writer discipline: only
//! [`ClientGate::ensure_initialized`] mutates it, and feature operations
//! clone the handle out of the lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::{Credentials, TalklineConfig};
use crate::events::{EventDispatcher, UnreadCountRelay};
use crate::sdk::{MessengerClient, MessengerSdk, UnreadCountListener};

/// Gate lifecycle states.
///
/// `Unconfigured` becomes `Closed` on failed or missing credentials,
/// `Unconfigured`/`Closed` become `Open` on successful initialization, and
/// `Open` is terminal for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No initialization attempt has been made.
    Unconfigured,
    /// The last attempt failed or credentials were missing; retryable.
    Closed,
    /// The vendor client is live.
    Open,
}

struct GateInner {
    state: GateState,
    client: Option<Arc<dyn MessengerClient>>,
}

/// Lifecycle gate around the vendor client singleton.
pub struct ClientGate {
    sdk: Arc<dyn MessengerSdk>,
    config: TalklineConfig,
    relay: Arc<UnreadCountRelay>,
    inner: Mutex<GateInner>,
}

impl ClientGate {
    /// Creates an unconfigured gate.
    ///
    /// The unread-count relay is created here and held for the process
    /// lifetime; it is attached to the vendor client on every successful
    /// initialization, always detach-first so repeated `load` calls can
    /// never accumulate duplicate vendor listeners.
    pub fn new(
        sdk: Arc<dyn MessengerSdk>,
        config: TalklineConfig,
        events: Arc<EventDispatcher>,
    ) -> Self {
        ClientGate {
            sdk,
            config,
            relay: Arc::new(UnreadCountRelay::new(events)),
            inner: Mutex::new(GateInner {
                state: GateState::Unconfigured,
                client: None,
            }),
        }
    }

    /// Initializes the vendor client if it is not live yet.
    ///
    /// Idempotent: once the gate is open, later calls return immediately
    /// and different credentials are silently ignored. Explicit credential
    /// fields override the static configuration. Missing or empty
    /// credentials close the gate with a warning; an initialization error
    /// closes it with an error log. Both outcomes are recoverable, since
    /// "already initialized" is only recorded on success.
    pub fn ensure_initialized(&self, api_key: Option<String>, app_id: Option<String>) {
        let mut inner = self.inner.lock();
        if inner.state == GateState::Open {
            return;
        }

        let credentials = Credentials::resolve(api_key, app_id, &self.config);
        if !credentials.is_complete() {
            log::warn!("missing messenger API key or app ID; messaging stays disabled");
            inner.state = GateState::Closed;
            inner.client = None;
            return;
        }

        match self.sdk.initialize(&credentials) {
            Ok(client) => {
                self.attach_relay(&client);
                inner.client = Some(client);
                inner.state = GateState::Open;
            }
            Err(e) => {
                log::error!("messenger initialization failed: {e}");
                inner.client = None;
                inner.state = GateState::Closed;
            }
        }
    }

    /// Returns the live client handle, or `None` while the gate is not
    /// open. Callers must treat `None` as success-with-no-effect.
    pub fn client(&self) -> Option<Arc<dyn MessengerClient>> {
        let inner = self.inner.lock();
        match inner.state {
            GateState::Open => inner.client.clone(),
            _ => None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GateState {
        self.inner.lock().state
    }

    /// Detaches the unread-count relay from the live client, if any.
    ///
    /// Used on logout; the gate stays open and the relay comes back with
    /// the next [`ClientGate::reattach_relay`].
    pub fn detach_relay(&self) {
        if let Some(client) = self.client() {
            client.remove_unread_count_listener();
        }
    }

    /// Re-attaches the unread-count relay to the live client, if any.
    ///
    /// Called from the host start hook. Detach-first, so the vendor ends
    /// up with exactly one listener no matter how often the host restarts.
    pub fn reattach_relay(&self) {
        if let Some(client) = self.client() {
            self.attach_relay(&client);
        }
    }

    fn attach_relay(&self, client: &Arc<dyn MessengerClient>) {
        client.remove_unread_count_listener();
        client.add_unread_count_listener(self.relay.clone() as Arc<dyn UnreadCountListener>);
    }
}
