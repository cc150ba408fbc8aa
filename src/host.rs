//! Host notification capability boundary.
//!
//! The host OS owns permission state, delivery channels, token issuance,
//! and the cold-start launch record. This crate treats all of that as an
//! opaque capability set behind the [`NotificationHost`] trait and never
//! implements it; embedders bridge it to their platform layer, tests use
//! in-process doubles.

use anyhow::Result;
use async_trait::async_trait;

use crate::event::{DeliveryToken, NotificationEvent};

/// OS-level notification permission state.
///
/// Owned by the host; this crate only reads it and, when undetermined,
/// requests a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The user has not been asked yet.
    Undetermined,
    /// The user granted notification permission.
    Granted,
    /// The user declined, or a prior denial persists.
    Denied,
}

/// Platform class the app is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    /// Platform class requiring an explicit delivery channel.
    Android,
}

impl Platform {
    /// String form used in device-record payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the OS should present a notification while the app is foregrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationPolicy {
    /// Show an alert.
    pub show_alert: bool,
    /// Play the notification sound.
    pub play_sound: bool,
    /// Update the app badge count.
    pub set_badge: bool,
    /// Show a banner.
    pub show_banner: bool,
    /// Show in the notification list/center.
    pub show_in_list: bool,
}

impl PresentationPolicy {
    /// Policy installed by [`crate::bootstrap::NotificationBootstrap`]:
    /// alert and sound on, badge off, banner and list on.
    pub fn foreground_default() -> Self {
        Self {
            show_alert: true,
            play_sound: true,
            set_badge: false,
            show_banner: true,
            show_in_list: true,
        }
    }
}

/// Importance level for a delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelImportance {
    Default,
    High,
    Max,
}

/// Parameters for creating or updating a delivery channel.
#[derive(Debug, Clone)]
pub struct ChannelSpec {
    /// Stable channel identifier.
    pub id: String,
    /// User-visible channel name.
    pub name: String,
    /// Channel importance.
    pub importance: ChannelImportance,
    /// Vibration pattern in milliseconds.
    pub vibration_pattern: Vec<u64>,
    /// Notification accent color (ARGB hex).
    pub accent_color: String,
}

impl ChannelSpec {
    /// The default channel provisioned on Android-like platforms:
    /// max importance, standard vibration pattern, brand accent color.
    pub fn default_channel() -> Self {
        Self {
            id: crate::constants::DEFAULT_CHANNEL_ID.to_string(),
            name: crate::constants::DEFAULT_CHANNEL_NAME.to_string(),
            importance: ChannelImportance::Max,
            vibration_pattern: crate::constants::DEFAULT_VIBRATION_PATTERN.to_vec(),
            accent_color: crate::constants::DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

/// Capability set offered by the host OS notification layer.
///
/// All methods that touch the OS are async: they suspend the calling task
/// during user interaction or network round-trips without blocking the
/// host UI thread. No cancellation is supported for in-flight calls.
#[async_trait]
pub trait NotificationHost: Send + Sync {
    /// Platform class the app is running on.
    fn platform(&self) -> Platform;

    /// Whether the execution environment is a physical device.
    ///
    /// Simulators and emulators cannot receive push; provisioning
    /// short-circuits on them without touching the permission API.
    fn is_physical_device(&self) -> bool;

    /// Installs the policy governing foreground presentation.
    ///
    /// The capability is always available once loaded, so installation
    /// does not fail.
    fn set_presentation_policy(&self, policy: PresentationPolicy);

    /// Reads the current permission state without prompting.
    async fn permission_status(&self) -> Result<PermissionStatus>;

    /// Prompts the user for notification permission.
    ///
    /// Suspends until the user responds; returns the adopted state.
    async fn request_permission(&self) -> Result<PermissionStatus>;

    /// Creates or updates a delivery channel (Android-like platforms).
    async fn ensure_channel(&self, spec: &ChannelSpec) -> Result<()>;

    /// Requests a delivery token from the push backend.
    ///
    /// `project_id` scopes the token to a push project when the backend
    /// requires it.
    async fn delivery_token(&self, project_id: Option<&str>) -> Result<DeliveryToken>;

    /// Returns the notification that launched this process, if any.
    ///
    /// Non-`None` exactly when the app was cold-started by a tap.
    async fn cold_start_event(&self) -> Result<Option<NotificationEvent>>;
}
