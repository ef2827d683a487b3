// SPDX-FileCopyrightText: 2026 Talkline Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Messenger Orchestrator
//!
//! Main entry point for the Talkline bridge core. Owns the lifecycle gate,
//! the event dispatcher and the vendor push client, and exposes every
//! remote-callable operation.
//!
//! Feature operations are fail-soft: when the gate is closed they complete
//! successfully without touching the vendor, so a host application never
//! crashes or sees a per-call error merely because messaging is
//! unconfigured. Only the push operations report hard failures.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use talkline_core::{Messenger, MockSdk, Registration, TalklineConfig};
//!
//! let messenger = Messenger::new(
//!     Arc::new(MockSdk::new()),
//!     TalklineConfig::with_keys("key-1", "app-1"),
//! );
//! messenger.load();
//! messenger.register_identified_user(&Registration::new().with_email("a@b.com"));
//! ```

use std::sync::Arc;

use crate::config::TalklineConfig;
use crate::convert::AttributeMap;
use crate::error::{TalklineError, TalklineResult};
use crate::events::{EventDispatcher, EventHandler, TalklineEvent};
use crate::gate::{ClientGate, GateState};
use crate::sdk::{LauncherVisibility, MessengerSdk, PushClient, Registration, UserAttributes};

/// Message for push payloads the vendor classifier rejects.
pub const INVALID_PUSH_MESSAGE: &str = "Notification data was not a valid push message";

/// Main Talkline orchestrator.
pub struct Messenger {
    gate: ClientGate,
    events: Arc<EventDispatcher>,
    push: Arc<dyn PushClient>,
}

impl Messenger {
    /// Creates a messenger over the given vendor SDK and static
    /// configuration. No initialization happens here; call
    /// [`Messenger::load`] or [`Messenger::load_with_keys`].
    pub fn new(sdk: Arc<dyn MessengerSdk>, config: TalklineConfig) -> Self {
        let events = Arc::new(EventDispatcher::new());
        let push = sdk.push_client();
        let gate = ClientGate::new(sdk, config, events.clone());
        Messenger { gate, events, push }
    }

    // === Lifecycle ===

    /// Attempts initialization from static configuration alone.
    pub fn load(&self) {
        self.gate.ensure_initialized(None, None);
    }

    /// Attempts initialization with runtime-supplied credentials.
    ///
    /// Explicit fields override static configuration; once the gate is
    /// open this is a silent no-op like every other initialization call.
    pub fn load_with_keys(&self, api_key: Option<String>, app_id: Option<String>) {
        self.gate.ensure_initialized(api_key, app_id);
    }

    /// Host start hook: re-attempts initialization in case the vendor
    /// singleton died, restores the unread-count wiring, and lets the
    /// vendor process any pending push message.
    pub fn handle_start(&self) {
        self.gate.ensure_initialized(None, None);
        self.gate.reattach_relay();
        if let Some(client) = self.gate.client() {
            client.handle_push_message();
        }
    }

    /// Host pause hook: the vendor messenger window is covering the app.
    pub fn handle_pause(&self) {
        self.events.dispatch(TalklineEvent::WindowDidShow);
    }

    /// Host resume hook: the vendor messenger window went away.
    pub fn handle_resume(&self) {
        self.events.dispatch(TalklineEvent::WindowDidHide);
    }

    /// Current gate state.
    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    // === Event Operations ===

    /// Adds an event handler.
    pub fn add_event_handler(&self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }

    /// Removes all event handlers.
    pub fn clear_event_handlers(&self) {
        self.events.clear_handlers();
    }

    /// Returns the event dispatcher.
    pub fn events(&self) -> &Arc<EventDispatcher> {
        &self.events
    }

    // === User Operations ===

    /// Registers an identified user.
    pub fn register_identified_user(&self, registration: &Registration) {
        if let Some(client) = self.gate.client() {
            client.register_identified_user(registration);
        }
    }

    /// Registers an anonymous user.
    pub fn register_unidentified_user(&self) {
        if let Some(client) = self.gate.client() {
            client.register_unidentified_user();
        }
    }

    /// Updates attributes of the current user.
    pub fn update_user(&self, attributes: &UserAttributes) {
        if let Some(client) = self.gate.client() {
            client.update_user(attributes);
        }
    }

    /// Ends the current user session. The unread-count relay is detached
    /// first so a logged-out app stops receiving count updates.
    pub fn logout(&self) {
        if let Some(client) = self.gate.client() {
            self.gate.detach_relay();
            client.logout();
        }
    }

    /// Records an analytics event.
    pub fn log_event(&self, name: &str, metadata: Option<&AttributeMap>) {
        if let Some(client) = self.gate.client() {
            client.log_event(name, metadata);
        }
    }

    /// Supplies the identity-verification HMAC.
    pub fn set_user_hash(&self, hmac: &str) {
        if let Some(client) = self.gate.client() {
            client.set_user_hash(hmac);
        }
    }

    /// Supplies the identity-verification JWT.
    pub fn set_user_jwt(&self, jwt: &str) {
        if let Some(client) = self.gate.client() {
            client.set_user_jwt(jwt);
        }
    }

    // === UI Operations ===

    /// Opens the messenger UI.
    pub fn display_messenger(&self) {
        if let Some(client) = self.gate.client() {
            client.display_messenger();
        }
    }

    /// Opens the message composer with the given text.
    pub fn display_message_composer(&self, initial_message: &str) {
        if let Some(client) = self.gate.client() {
            client.display_message_composer(initial_message);
        }
    }

    /// Opens the help center UI.
    pub fn display_help_center(&self) {
        if let Some(client) = self.gate.client() {
            client.display_help_center();
        }
    }

    /// Dismisses any visible vendor UI.
    pub fn hide_messenger(&self) {
        if let Some(client) = self.gate.client() {
            client.hide_messenger();
        }
    }

    /// Shows or hides the floating launcher.
    pub fn set_launcher_visibility(&self, visibility: LauncherVisibility) {
        if let Some(client) = self.gate.client() {
            client.set_launcher_visibility(visibility);
        }
    }

    /// Opens a content carousel by ID.
    pub fn display_carousel(&self, carousel_id: &str) {
        if let Some(client) = self.gate.client() {
            client.display_carousel(carousel_id);
        }
    }

    /// Opens a help article by ID.
    pub fn display_article(&self, article_id: &str) {
        if let Some(client) = self.gate.client() {
            client.display_article(article_id);
        }
    }

    /// Adjusts the bottom padding of vendor UI.
    pub fn set_bottom_padding(&self, padding: i32) {
        if let Some(client) = self.gate.client() {
            client.set_bottom_padding(padding);
        }
    }

    // === Push Operations ===
    //
    // The push client exists independently of the messenger client, so
    // these work even while the gate is closed and, unlike the fail-soft
    // operations above, they surface vendor failures to the caller.

    /// Submits a platform push token to the vendor.
    pub fn send_push_token(&self, token: &str) -> TalklineResult<()> {
        self.push.send_token(token)
    }

    /// Classifies and ingests a platform push payload.
    ///
    /// Unrecognized payloads are a reported failure, not a silent skip.
    pub fn receive_push(&self, payload: &AttributeMap) -> TalklineResult<()> {
        if !self.push.is_push_message(payload) {
            return Err(TalklineError::PushPayload(INVALID_PUSH_MESSAGE.into()));
        }
        self.push.handle_push(payload)
    }
}
