//! Application-wide constants for pushlink.
//!
//! Centralizes magic numbers shared across the notification flow so they
//! are discoverable and documented in one place.

use std::time::Duration;

// ============================================================================
// Timeouts & delays
// ============================================================================

/// Delay before acting on a deep link from a notification.
///
/// When the app is launched (or resumed) by a notification tap, the app
/// router may not be mounted yet. Navigating immediately would drop the
/// deep link; 500ms is enough for the router to come up on cold start.
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(500);

/// HTTP client request timeout for remote store calls.
///
/// Device upserts are small payloads; 10 seconds prevents indefinite
/// hangs on network issues without tripping on slow mobile links.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Delivery channel (Android-like platforms)
// ============================================================================

/// Identifier of the default delivery channel.
pub const DEFAULT_CHANNEL_ID: &str = "default";

/// Display name of the default delivery channel.
pub const DEFAULT_CHANNEL_NAME: &str = "default";

/// Vibration pattern for the default channel, in milliseconds
/// (initial delay, then alternating vibrate/pause).
pub const DEFAULT_VIBRATION_PATTERN: [u64; 4] = [0, 250, 250, 250];

/// Accent color applied to notifications on the default channel (ARGB hex).
pub const DEFAULT_ACCENT_COLOR: &str = "#FF231F7C";

// ============================================================================
// Remote store
// ============================================================================

/// Table holding device records in the remote store.
pub const DEVICES_TABLE: &str = "devices";

/// Conflict target for device upserts. A token identifies one installation,
/// so at most one live record may exist per token value.
pub const DEVICES_CONFLICT_COLUMN: &str = "token";
