// SPDX-FileCopyrightText: 2026 Talkline Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Unified error type for the Talkline bridge core.

use thiserror::Error;

/// Unified error type for Talkline operations.
///
/// Only two error classes exist at the bridge boundary: soft absence of the
/// vendor client (never surfaced per-call, see [`crate::gate::ClientGate`])
/// and hard operational failures, which are the variants below.
#[derive(Error, Debug)]
pub enum TalklineError {
    /// Configuration could not be parsed or applied.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Vendor SDK initialization failed.
    #[error("initialization error: {0}")]
    Initialization(String),

    /// Push token submission to the vendor failed.
    #[error("push token error: {0}")]
    PushToken(String),

    /// A push payload was not recognized as a vendor push message.
    #[error("{0}")]
    PushPayload(String),

    /// The vendor rejected or failed to process a recognized push message.
    #[error("push handling error: {0}")]
    PushHandling(String),

    /// A call payload could not be deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An argument supplied by the caller was invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An unclassified vendor SDK failure.
    #[error("vendor sdk error: {0}")]
    Sdk(String),
}

/// Result type for Talkline operations.
pub type TalklineResult<T> = Result<T, TalklineError>;
