// SPDX-FileCopyrightText: 2026 Talkline Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording mock of the vendor SDK.
//!
//! Stands in for the vendor in tests and desktop/CI builds. Every
//! forwarded call is recorded; failure modes are switchable per operation.
//! Clones share state, so a test can keep one handle for assertions while
//! the bridge owns another.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Credentials;
use crate::convert::AttributeMap;
use crate::error::{TalklineError, TalklineResult};
use crate::sdk::{
    LauncherVisibility, MessengerClient, MessengerSdk, PushClient, Registration,
    UnreadCountListener, UserAttributes,
};

/// A call recorded by the mock, in forwarding order.
#[derive(Debug, Clone, PartialEq)]
pub enum SdkCall {
    /// `MessengerSdk::initialize`
    Initialize {
        /// API key the bridge resolved.
        api_key: String,
        /// App ID the bridge resolved.
        app_id: String,
    },
    /// `MessengerClient::register_identified_user`
    RegisterIdentifiedUser(Registration),
    /// `MessengerClient::register_unidentified_user`
    RegisterUnidentifiedUser,
    /// `MessengerClient::update_user`
    UpdateUser(UserAttributes),
    /// `MessengerClient::logout`
    Logout,
    /// `MessengerClient::log_event`
    LogEvent {
        /// Event name.
        name: String,
        /// Converted metadata, if any.
        metadata: Option<AttributeMap>,
    },
    /// `MessengerClient::display_messenger`
    DisplayMessenger,
    /// `MessengerClient::display_message_composer`
    DisplayMessageComposer {
        /// Pre-filled composer text.
        initial_message: String,
    },
    /// `MessengerClient::display_help_center`
    DisplayHelpCenter,
    /// `MessengerClient::hide_messenger`
    HideMessenger,
    /// `MessengerClient::set_launcher_visibility`
    SetLauncherVisibility(LauncherVisibility),
    /// `MessengerClient::display_carousel`
    DisplayCarousel {
        /// Carousel ID.
        carousel_id: String,
    },
    /// `MessengerClient::display_article`
    DisplayArticle {
        /// Article ID.
        article_id: String,
    },
    /// `MessengerClient::set_user_hash`
    SetUserHash {
        /// Identity-verification HMAC.
        hmac: String,
    },
    /// `MessengerClient::set_user_jwt`
    SetUserJwt {
        /// Identity-verification JWT.
        jwt: String,
    },
    /// `MessengerClient::set_bottom_padding`
    SetBottomPadding {
        /// Padding in pixels.
        padding: i32,
    },
    /// `MessengerClient::handle_push_message`
    HandlePushMessage,
    /// `MessengerClient::add_unread_count_listener`
    AddUnreadCountListener,
    /// `MessengerClient::remove_unread_count_listener`
    RemoveUnreadCountListener,
    /// `PushClient::send_token`
    SendToken {
        /// Platform push token.
        token: String,
    },
    /// `PushClient::handle_push`
    HandlePush {
        /// Converted push payload.
        payload: AttributeMap,
    },
}

#[derive(Default)]
struct MockInner {
    calls: Mutex<Vec<SdkCall>>,
    fail_initialize: Mutex<bool>,
    fail_send_token: Mutex<bool>,
    fail_handle_push: Mutex<bool>,
    reject_push: Mutex<bool>,
    listener: Mutex<Option<Arc<dyn UnreadCountListener>>>,
}

impl MockInner {
    fn record(&self, call: SdkCall) {
        self.calls.lock().push(call);
    }
}

/// Recording vendor SDK mock.
#[derive(Clone, Default)]
pub struct MockSdk {
    inner: Arc<MockInner>,
}

impl MockSdk {
    /// Creates a mock that accepts everything.
    pub fn new() -> Self {
        MockSdk::default()
    }

    /// Makes `initialize` fail.
    pub fn set_fail_initialize(&self, fail: bool) {
        *self.inner.fail_initialize.lock() = fail;
    }

    /// Makes `send_token` fail.
    pub fn set_fail_send_token(&self, fail: bool) {
        *self.inner.fail_send_token.lock() = fail;
    }

    /// Makes `handle_push` fail.
    pub fn set_fail_handle_push(&self, fail: bool) {
        *self.inner.fail_handle_push.lock() = fail;
    }

    /// Makes the push classifier reject every payload.
    pub fn set_reject_push(&self, reject: bool) {
        *self.inner.reject_push.lock() = reject;
    }

    /// Returns every call recorded so far, in order.
    pub fn calls(&self) -> Vec<SdkCall> {
        self.inner.calls.lock().clone()
    }

    /// Returns how many times `initialize` was attempted.
    pub fn initialize_count(&self) -> usize {
        self.inner
            .calls
            .lock()
            .iter()
            .filter(|c| matches!(c, SdkCall::Initialize { .. }))
            .count()
    }

    /// Returns true while an unread-count listener is attached.
    pub fn has_unread_listener(&self) -> bool {
        self.inner.listener.lock().is_some()
    }

    /// Fires the attached unread-count listener, as the vendor would.
    /// No-op when nothing is attached.
    pub fn emit_unread(&self, unread_count: u32) {
        let listener = self.inner.listener.lock().clone();
        if let Some(listener) = listener {
            listener.on_count_update(unread_count);
        }
    }
}

impl MessengerSdk for MockSdk {
    fn initialize(&self, credentials: &Credentials) -> TalklineResult<Arc<dyn MessengerClient>> {
        self.inner.record(SdkCall::Initialize {
            api_key: credentials.api_key.clone(),
            app_id: credentials.app_id.clone(),
        });
        if *self.inner.fail_initialize.lock() {
            return Err(TalklineError::Initialization(
                "mock initialization failure".into(),
            ));
        }
        Ok(Arc::new(MockClient {
            inner: self.inner.clone(),
        }))
    }

    fn push_client(&self) -> Arc<dyn PushClient> {
        Arc::new(MockPushClient {
            inner: self.inner.clone(),
        })
    }
}

struct MockClient {
    inner: Arc<MockInner>,
}

impl MessengerClient for MockClient {
    fn register_identified_user(&self, registration: &Registration) {
        self.inner
            .record(SdkCall::RegisterIdentifiedUser(registration.clone()));
    }

    fn register_unidentified_user(&self) {
        self.inner.record(SdkCall::RegisterUnidentifiedUser);
    }

    fn update_user(&self, attributes: &UserAttributes) {
        self.inner.record(SdkCall::UpdateUser(attributes.clone()));
    }

    fn logout(&self) {
        self.inner.record(SdkCall::Logout);
    }

    fn log_event(&self, name: &str, metadata: Option<&AttributeMap>) {
        self.inner.record(SdkCall::LogEvent {
            name: name.to_string(),
            metadata: metadata.cloned(),
        });
    }

    fn display_messenger(&self) {
        self.inner.record(SdkCall::DisplayMessenger);
    }

    fn display_message_composer(&self, initial_message: &str) {
        self.inner.record(SdkCall::DisplayMessageComposer {
            initial_message: initial_message.to_string(),
        });
    }

    fn display_help_center(&self) {
        self.inner.record(SdkCall::DisplayHelpCenter);
    }

    fn hide_messenger(&self) {
        self.inner.record(SdkCall::HideMessenger);
    }

    fn set_launcher_visibility(&self, visibility: LauncherVisibility) {
        self.inner.record(SdkCall::SetLauncherVisibility(visibility));
    }

    fn display_carousel(&self, carousel_id: &str) {
        self.inner.record(SdkCall::DisplayCarousel {
            carousel_id: carousel_id.to_string(),
        });
    }

    fn display_article(&self, article_id: &str) {
        self.inner.record(SdkCall::DisplayArticle {
            article_id: article_id.to_string(),
        });
    }

    fn set_user_hash(&self, hmac: &str) {
        self.inner.record(SdkCall::SetUserHash {
            hmac: hmac.to_string(),
        });
    }

    fn set_user_jwt(&self, jwt: &str) {
        self.inner.record(SdkCall::SetUserJwt {
            jwt: jwt.to_string(),
        });
    }

    fn set_bottom_padding(&self, padding: i32) {
        self.inner.record(SdkCall::SetBottomPadding { padding });
    }

    fn handle_push_message(&self) {
        self.inner.record(SdkCall::HandlePushMessage);
    }

    fn add_unread_count_listener(&self, listener: Arc<dyn UnreadCountListener>) {
        self.inner.record(SdkCall::AddUnreadCountListener);
        *self.inner.listener.lock() = Some(listener);
    }

    fn remove_unread_count_listener(&self) {
        self.inner.record(SdkCall::RemoveUnreadCountListener);
        *self.inner.listener.lock() = None;
    }
}

struct MockPushClient {
    inner: Arc<MockInner>,
}

impl PushClient for MockPushClient {
    fn send_token(&self, token: &str) -> TalklineResult<()> {
        self.inner.record(SdkCall::SendToken {
            token: token.to_string(),
        });
        if *self.inner.fail_send_token.lock() {
            return Err(TalklineError::PushToken("mock push token failure".into()));
        }
        Ok(())
    }

    fn is_push_message(&self, _payload: &AttributeMap) -> bool {
        !*self.inner.reject_push.lock()
    }

    fn handle_push(&self, payload: &AttributeMap) -> TalklineResult<()> {
        self.inner.record(SdkCall::HandlePush {
            payload: payload.clone(),
        });
        if *self.inner.fail_handle_push.lock() {
            return Err(TalklineError::PushHandling(
                "mock push handling failure".into(),
            ));
        }
        Ok(())
    }
}
