//! Mobile-friendly data types.
//!
//! Wrappers around talkline-core types that are compatible with UniFFI for
//! cross-language bindings, plus the serde shapes of the shell's call
//! payloads.

use serde::Deserialize;
use serde_json::Value;

use talkline_core::{attributes_from_json, Company, TalklineEvent, UserAttributes};

/// Mobile-friendly bridge event.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum PluginEvent {
    /// The vendor messenger window covered the host application.
    WindowDidShow,
    /// The vendor messenger window went away.
    WindowDidHide,
    /// The unread conversation count changed.
    UnreadCountChanged { unread_count: u32 },
}

impl From<TalklineEvent> for PluginEvent {
    fn from(event: TalklineEvent) -> Self {
        match event {
            TalklineEvent::WindowDidShow => PluginEvent::WindowDidShow,
            TalklineEvent::WindowDidHide => PluginEvent::WindowDidHide,
            TalklineEvent::UnreadCountChanged { unread_count } => {
                PluginEvent::UnreadCountChanged { unread_count }
            }
        }
    }
}

/// Shape of the `updateUser` call payload.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateUserPayload {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub language_override: Option<String>,
    pub company: Option<CompanyPayload>,
    pub custom_attributes: Option<Value>,
}

/// Shape of the nested `company` object.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompanyPayload {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl UpdateUserPayload {
    /// Builds vendor user attributes from the payload.
    ///
    /// Empty strings count as unset. A company is forwarded only when both
    /// its ID and name are present and non-empty, and custom attributes go
    /// through the structural converter (nulls dropped).
    pub(crate) fn into_attributes(self) -> UserAttributes {
        let company = self.company.and_then(|c| {
            match (non_empty(c.id), non_empty(c.name)) {
                (Some(id), Some(name)) => Some(Company::new(id, name)),
                _ => None,
            }
        });
        let custom_attributes = self
            .custom_attributes
            .as_ref()
            .and_then(|v| attributes_from_json(v.as_object()));

        UserAttributes {
            user_id: non_empty(self.user_id),
            email: non_empty(self.email),
            name: non_empty(self.name),
            phone: non_empty(self.phone),
            language_override: non_empty(self.language_override),
            company,
            custom_attributes,
        }
    }
}

/// Treats `None` and empty strings alike: both mean "not supplied".
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
