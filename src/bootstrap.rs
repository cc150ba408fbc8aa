//! One-time installation of the foreground presentation policy.
//!
//! The host needs to be told how to present a notification while the app
//! is foregrounded. That policy must be installed before foreground
//! alerts render correctly, but installing it twice is harmless, so the
//! flow tolerates out-of-order invocation: every entry point calls
//! [`NotificationBootstrap::setup`] and only the first call does work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::host::{NotificationHost, PresentationPolicy};

/// Installs the presentation policy exactly once per instance.
///
/// Construct one of these at process start and hand it (via `Arc`) to every
/// consumer that may be first to touch notifications. The installed state
/// lives on the instance, not in a process global.
pub struct NotificationBootstrap {
    host: Arc<dyn NotificationHost>,
    installed: AtomicBool,
}

impl NotificationBootstrap {
    /// Creates a bootstrap bound to the given host capability.
    pub fn new(host: Arc<dyn NotificationHost>) -> Self {
        Self {
            host,
            installed: AtomicBool::new(false),
        }
    }

    /// Installs the foreground presentation policy; no-op after the first
    /// call.
    ///
    /// The policy: show an alert, play sound, do not touch the badge,
    /// show in banner and notification list. Installation cannot fail
    /// (the host capability is always available once loaded), so no error
    /// is surfaced.
    pub fn setup(&self) {
        if self.installed.swap(true, Ordering::SeqCst) {
            return;
        }

        self.host
            .set_presentation_policy(PresentationPolicy::foreground_default());
        log::debug!("[Bootstrap] Presentation policy installed");
    }

    /// Whether the policy has been installed.
    pub fn is_installed(&self) -> bool {
        self.installed.load(Ordering::SeqCst)
    }
}
