//! Notification event and token data types.
//!
//! These are the payloads that cross the host capability boundary: the
//! delivery token issued by the push backend and the notification events
//! the host hands to the [`crate::router::DeliveryRouter`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque token identifying this device + app installation to the push
/// backend.
///
/// Immutable once issued, but the OS may reissue a new value at any time;
/// nothing is cached across restarts beyond what the remote store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryToken(String);

impl DeliveryToken {
    /// Wraps a raw token string as issued by the push backend.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeliveryToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The context a notification event was delivered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryContext {
    /// Notification arrived while the app was active.
    Foreground,
    /// User tapped a notification while the app was backgrounded.
    BackgroundTap,
    /// App process was launched by tapping a notification.
    ColdStart,
}

/// A notification as received from the host capability.
///
/// Transient: consumed once by the router and discarded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationEvent {
    /// Notification title, if any.
    pub title: Option<String>,
    /// Notification body, if any.
    pub body: Option<String>,
    /// Arbitrary payload data attached by the sender.
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl NotificationEvent {
    /// Returns the deep-link path from `data.url`, if present and a string.
    ///
    /// A missing or non-string `url` means no navigation occurs in any
    /// delivery context.
    pub fn deep_link(&self) -> Option<&str> {
        self.data.get("url").and_then(Value::as_str)
    }
}
