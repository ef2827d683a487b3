// SPDX-FileCopyrightText: 2026 Talkline Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vendor SDK Seam
//!
//! Trait abstractions over the closed-source customer-messaging SDK. The
//! bridge never reimplements vendor behavior; these traits are the exact
//! surface the bridge forwards to, and [`mock::MockSdk`] stands in for the
//! vendor in tests and non-native builds.

pub mod mock;

mod types;

pub use types::{Company, LauncherVisibility, Registration, UserAttributes};

use std::sync::Arc;

use crate::config::Credentials;
use crate::convert::AttributeMap;
use crate::error::TalklineResult;

/// Entry point to the vendor SDK.
///
/// The vendor owns a process-wide singleton; `initialize` is the only way
/// to obtain a usable client handle.
pub trait MessengerSdk: Send + Sync {
    /// Initializes the vendor singleton and returns its client handle.
    fn initialize(&self, credentials: &Credentials) -> TalklineResult<Arc<dyn MessengerClient>>;

    /// Returns the push client.
    ///
    /// Constructible independently of the messenger client: push-token
    /// submission and push classification work even before (or without)
    /// successful messenger initialization.
    fn push_client(&self) -> Arc<dyn PushClient>;
}

/// Handle to the initialized vendor messenger client.
///
/// All methods are fire-and-forget from the bridge's point of view; the
/// vendor SDK performs its own networking and error recovery internally.
pub trait MessengerClient: Send + Sync {
    /// Registers an identified user.
    fn register_identified_user(&self, registration: &Registration);

    /// Registers an anonymous user.
    fn register_unidentified_user(&self);

    /// Updates attributes of the current user.
    fn update_user(&self, attributes: &UserAttributes);

    /// Ends the current user session.
    fn logout(&self);

    /// Records an analytics event, optionally with metadata.
    fn log_event(&self, name: &str, metadata: Option<&AttributeMap>);

    /// Opens the messenger UI.
    fn display_messenger(&self);

    /// Opens the message composer, pre-filled with the given text.
    fn display_message_composer(&self, initial_message: &str);

    /// Opens the help center UI.
    fn display_help_center(&self);

    /// Dismisses any visible vendor UI.
    fn hide_messenger(&self);

    /// Shows or hides the floating launcher button.
    fn set_launcher_visibility(&self, visibility: LauncherVisibility);

    /// Opens a content carousel by ID.
    fn display_carousel(&self, carousel_id: &str);

    /// Opens a help article by ID.
    fn display_article(&self, article_id: &str);

    /// Supplies the identity-verification HMAC for the current user.
    fn set_user_hash(&self, hmac: &str);

    /// Supplies the identity-verification JWT for the current user.
    fn set_user_jwt(&self, jwt: &str);

    /// Adjusts the bottom padding of vendor UI, in pixels.
    fn set_bottom_padding(&self, padding: i32);

    /// Asks the vendor to process a pending push message, if any.
    fn handle_push_message(&self);

    /// Attaches the unread-count listener. The vendor holds the reference
    /// until it is removed.
    fn add_unread_count_listener(&self, listener: Arc<dyn UnreadCountListener>);

    /// Detaches the unread-count listener, if one is attached.
    fn remove_unread_count_listener(&self);
}

/// Callback invoked by the vendor whenever the unread conversation count
/// changes. Runs on a vendor-chosen thread.
pub trait UnreadCountListener: Send + Sync {
    /// Called with the new unread conversation count.
    fn on_count_update(&self, unread_count: u32);
}

/// Vendor push client.
///
/// Unlike [`MessengerClient`], push operations report hard failures to the
/// caller.
pub trait PushClient: Send + Sync {
    /// Submits a platform push token to the vendor.
    fn send_token(&self, token: &str) -> TalklineResult<()>;

    /// Returns true when the payload is a vendor-originated push message.
    fn is_push_message(&self, payload: &AttributeMap) -> bool;

    /// Hands a recognized push payload to the vendor for display.
    fn handle_push(&self, payload: &AttributeMap) -> TalklineResult<()>;
}
