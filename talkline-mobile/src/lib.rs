//! Talkline Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms. Exposes the Talkline
//! messenger bridge as a plugin object with the remote-callable method
//! surface and a callback interface for event listeners.
//!
//! The vendor SDK reaches this crate through the `MessengerSdk` seam:
//! device builds register their vendor adapter with
//! [`register_vendor_sdk`] before constructing the plugin, while desktop
//! and CI builds fall back to the recording mock.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;

use talkline_core::{
    attributes_from_json, EventHandler, LauncherVisibility, Messenger, MessengerSdk, MockSdk,
    Registration, TalklineConfig, TalklineEvent, INVALID_PUSH_MESSAGE,
};

// === Modules ===

mod error;
mod types;

// Re-export public types
pub use error::PluginError;
pub use types::PluginEvent;

use types::{non_empty, UpdateUserPayload};

uniffi::setup_scaffolding!();

// === Vendor SDK registration ===

static VENDOR_SDK: OnceCell<Arc<dyn MessengerSdk>> = OnceCell::new();

/// Registers the process-wide vendor SDK adapter.
///
/// Device builds call this once, before the plugin is constructed, from
/// the crate that adapts the native vendor SDK onto the `MessengerSdk`
/// seam. Later calls are ignored.
pub fn register_vendor_sdk(sdk: Arc<dyn MessengerSdk>) {
    let _ = VENDOR_SDK.set(sdk);
}

fn platform_sdk() -> Arc<dyn MessengerSdk> {
    VENDOR_SDK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(MockSdk::new()))
}

// === Event listeners ===

/// Callback interface for bridge event listeners.
///
/// Implement this in Swift (iOS) or Kotlin (Android) to receive window
/// and unread-count notifications.
#[uniffi::export(callback_interface)]
pub trait PluginEventListener: Send + Sync {
    /// Called for every emitted bridge event.
    fn on_event(&self, event: PluginEvent);
}

struct ListenerForwarder {
    listener: Box<dyn PluginEventListener>,
}

impl EventHandler for ListenerForwarder {
    fn on_event(&self, event: TalklineEvent) {
        self.listener.on_event(event.into());
    }
}

// === Main Interface ===

/// Talkline plugin surface for mobile platforms.
#[derive(uniffi::Object)]
pub struct TalklinePlugin {
    messenger: Messenger,
}

impl std::fmt::Debug for TalklinePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TalklinePlugin").finish_non_exhaustive()
    }
}

impl TalklinePlugin {
    /// Creates a plugin over a specific vendor SDK.
    ///
    /// Rust-side embeddings and tests inject their SDK here; the exported
    /// constructor goes through the process-wide registration instead.
    pub fn with_sdk(sdk: Arc<dyn MessengerSdk>, config: TalklineConfig) -> Arc<Self> {
        let plugin = Arc::new(TalklinePlugin {
            messenger: Messenger::new(sdk, config),
        });
        // Load hook: try to come up from static configuration alone.
        // Missing keys are not an error.
        plugin.messenger.load();
        plugin
    }
}

#[uniffi::export]
impl TalklinePlugin {
    /// Creates the plugin from the shell's static configuration block
    /// (JSON with optional `apiKey` and `appId` fields).
    #[uniffi::constructor]
    pub fn new(config_json: Option<String>) -> Result<Arc<Self>, PluginError> {
        let config = match config_json {
            Some(json) => TalklineConfig::from_json(&json)?,
            None => TalklineConfig::default(),
        };
        Ok(Self::with_sdk(platform_sdk(), config))
    }

    // === Lifecycle ===

    /// Re-attempts initialization from static configuration.
    pub fn load(&self) {
        self.messenger.load();
    }

    /// Initializes with runtime-supplied keys, overriding static
    /// configuration. A no-op once messaging is live.
    pub fn load_with_keys(&self, app_id: Option<String>, api_key: Option<String>) {
        self.messenger.load_with_keys(api_key, app_id);
    }

    /// Host start hook: resurrects the vendor client if needed and lets
    /// it process any pending push message.
    pub fn handle_on_start(&self) {
        self.messenger.handle_start();
    }

    /// Host pause hook.
    pub fn handle_on_pause(&self) {
        self.messenger.handle_pause();
    }

    /// Host resume hook.
    pub fn handle_on_resume(&self) {
        self.messenger.handle_resume();
    }

    // === Users ===

    /// Registers an identified user. Empty strings count as unset.
    pub fn register_identified_user(&self, email: Option<String>, user_id: Option<String>) {
        let mut registration = Registration::new();
        if let Some(email) = non_empty(email) {
            registration = registration.with_email(email);
        }
        if let Some(user_id) = non_empty(user_id) {
            registration = registration.with_user_id(user_id);
        }
        self.messenger.register_identified_user(&registration);
    }

    /// Registers an anonymous user.
    pub fn register_unidentified_user(&self) {
        self.messenger.register_unidentified_user();
    }

    /// Updates the current user from an `updateUser` call payload.
    pub fn update_user(&self, payload_json: String) -> Result<(), PluginError> {
        let payload: UpdateUserPayload = serde_json::from_str(&payload_json)
            .map_err(|e| PluginError::SerializationError(e.to_string()))?;
        self.messenger.update_user(&payload.into_attributes());
        Ok(())
    }

    /// Ends the current user session.
    pub fn logout(&self) {
        self.messenger.logout();
    }

    /// Records an analytics event with optional metadata.
    pub fn log_event(&self, name: String, data_json: Option<String>) -> Result<(), PluginError> {
        let metadata = match data_json {
            Some(json) => {
                let value: Value = serde_json::from_str(&json)
                    .map_err(|e| PluginError::SerializationError(e.to_string()))?;
                attributes_from_json(value.as_object())
            }
            None => None,
        };
        self.messenger.log_event(&name, metadata.as_ref());
        Ok(())
    }

    /// Supplies the identity-verification HMAC for the current user.
    pub fn set_user_hash(&self, hmac: Option<String>) {
        self.messenger.set_user_hash(&hmac.unwrap_or_default());
    }

    /// Supplies the identity-verification JWT for the current user.
    pub fn set_user_jwt(&self, jwt: Option<String>) {
        self.messenger.set_user_jwt(&jwt.unwrap_or_default());
    }

    // === Messenger UI ===

    /// Opens the messenger.
    pub fn display_messenger(&self) {
        self.messenger.display_messenger();
    }

    /// Opens the message composer, optionally pre-filled.
    pub fn display_message_composer(&self, message: Option<String>) {
        self.messenger
            .display_message_composer(&message.unwrap_or_default());
    }

    /// Opens the help center.
    pub fn display_help_center(&self) {
        self.messenger.display_help_center();
    }

    /// Dismisses any visible vendor UI.
    pub fn hide_messenger(&self) {
        self.messenger.hide_messenger();
    }

    /// Shows the floating launcher.
    pub fn display_launcher(&self) {
        self.messenger
            .set_launcher_visibility(LauncherVisibility::Visible);
    }

    /// Hides the floating launcher.
    pub fn hide_launcher(&self) {
        self.messenger
            .set_launcher_visibility(LauncherVisibility::Gone);
    }

    /// Alias for [`TalklinePlugin::display_launcher`], kept for shells
    /// migrated from older plugin versions.
    pub fn display_in_app_messages(&self) {
        self.messenger
            .set_launcher_visibility(LauncherVisibility::Visible);
    }

    /// Alias for [`TalklinePlugin::hide_launcher`].
    pub fn hide_in_app_messages(&self) {
        self.messenger
            .set_launcher_visibility(LauncherVisibility::Gone);
    }

    /// Opens a content carousel.
    pub fn display_carousel(&self, carousel_id: Option<String>) {
        self.messenger
            .display_carousel(&carousel_id.unwrap_or_default());
    }

    /// Opens a help article.
    pub fn display_article(&self, article_id: Option<String>) {
        self.messenger
            .display_article(&article_id.unwrap_or_default());
    }

    /// Adjusts the bottom padding of vendor UI. The shell sends the value
    /// as a string; a non-numeric value is an invalid-argument failure.
    pub fn set_bottom_padding(&self, value: String) -> Result<(), PluginError> {
        let padding: i32 = value
            .trim()
            .parse()
            .map_err(|_| PluginError::InvalidInput(format!("not a number: {value}")))?;
        self.messenger.set_bottom_padding(padding);
        Ok(())
    }

    // === Push ===

    /// Submits a platform push token to the vendor.
    pub fn send_push_token(&self, value: String) -> Result<(), PluginError> {
        self.messenger
            .send_push_token(&value)
            .map_err(PluginError::from)
    }

    /// Classifies and ingests a platform push payload.
    ///
    /// Payloads the vendor classifier rejects are a reported failure, not
    /// a silent skip.
    pub fn receive_push(&self, payload_json: String) -> Result<(), PluginError> {
        let value: Value = serde_json::from_str(&payload_json)
            .map_err(|e| PluginError::SerializationError(e.to_string()))?;
        let payload = attributes_from_json(value.as_object())
            .ok_or_else(|| PluginError::InvalidPush(INVALID_PUSH_MESSAGE.to_string()))?;
        self.messenger
            .receive_push(&payload)
            .map_err(PluginError::from)
    }

    // === Listeners ===

    /// Registers an event listener.
    pub fn add_listener(&self, listener: Box<dyn PluginEventListener>) {
        self.messenger
            .add_event_handler(Arc::new(ListenerForwarder { listener }));
    }

    /// Removes every registered event listener.
    pub fn remove_all_listeners(&self) {
        self.messenger.clear_event_handlers();
    }
}
