// SPDX-FileCopyrightText: 2026 Talkline Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vendor data types passed across the SDK seam.

use crate::convert::AttributeMap;

/// User registration data for identified users.
///
/// Built field by field; unset fields are omitted from the vendor call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// The user's email address.
    pub email: Option<String>,
    /// The host application's user ID.
    pub user_id: Option<String>,
}

impl Registration {
    /// Creates an empty registration.
    pub fn new() -> Self {
        Registration::default()
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the user ID.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Attributes of the current user, for profile updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAttributes {
    /// The host application's user ID.
    pub user_id: Option<String>,
    /// The user's email address.
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Locale override for vendor UI.
    pub language_override: Option<String>,
    /// Company the user belongs to.
    pub company: Option<Company>,
    /// Free-form custom attributes (converted bridge payload).
    pub custom_attributes: Option<AttributeMap>,
}

/// A company attached to a user profile.
///
/// The vendor requires both fields, so partial company objects are dropped
/// by the glue before they get here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Company ID.
    pub id: String,
    /// Company display name.
    pub name: String,
}

impl Company {
    /// Creates a company from the given ID and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Company {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Visibility of the vendor's floating launcher button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherVisibility {
    /// Launcher shown.
    Visible,
    /// Launcher hidden.
    Gone,
}
