//! Delivery-context routing for incoming notifications.
//!
//! Three entry points, one per delivery context:
//!
//! - foreground receipt → in-app confirmation surface, optional deep link
//! - background tap → immediate deep-link navigation
//! - cold start → one-shot query of the launch notification, same policy
//!
//! Navigation always runs as a detached task after a short delay, because
//! the app router may not be mounted yet when a tap launches or resumes
//! the process. The task re-checks a mounted guard after the delay: a
//! late-resolving navigation against a torn-down view is a no-op, not a
//! crash. Nothing is cancelled and nothing is retried.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::constants::NAVIGATION_DELAY;
use crate::event::{DeliveryContext, NotificationEvent};
use crate::host::NotificationHost;

/// Navigation boundary offered by the embedding app.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigates to the given in-app path. Success is not observed.
    async fn navigate(&self, path: &str);
}

/// In-app confirmation surface for a foreground notification.
///
/// The consumer renders this with a dismiss action and, when `link` is
/// present, a secondary action that feeds the link back into
/// [`DeliveryRouter::open_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InAppAlert {
    /// Notification title, if any.
    pub title: Option<String>,
    /// Notification body, if any.
    pub body: Option<String>,
    /// Deep-link path offered as the secondary action.
    pub link: Option<String>,
}

/// Guard handed to the consuming view; unmounting makes any in-flight
/// navigation a safe no-op.
#[derive(Debug, Clone)]
pub struct MountHandle {
    mounted: Arc<AtomicBool>,
}

impl MountHandle {
    /// Marks the consuming view as gone. Outstanding navigation tasks are
    /// not cancelled; they observe the flag after their delay and bail.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    /// Whether the consuming view is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }
}

/// Routes notification events to alerts or deep-link navigation.
pub struct DeliveryRouter {
    navigator: Arc<dyn Navigator>,
    host: Arc<dyn NotificationHost>,
    mounted: Arc<AtomicBool>,
    // Fires at most once per process lifetime; remounting the consuming
    // view must not re-trigger cold-start navigation.
    cold_start_checked: AtomicBool,
    navigation_delay: Duration,
}

impl DeliveryRouter {
    /// Creates a router bound to the app navigator and host capability.
    pub fn new(navigator: Arc<dyn Navigator>, host: Arc<dyn NotificationHost>) -> Self {
        Self {
            navigator,
            host,
            mounted: Arc::new(AtomicBool::new(true)),
            cold_start_checked: AtomicBool::new(false),
            navigation_delay: NAVIGATION_DELAY,
        }
    }

    /// Overrides the navigation delay (tests).
    pub fn with_navigation_delay(mut self, delay: Duration) -> Self {
        self.navigation_delay = delay;
        self
    }

    /// Returns the mount guard for the consuming view.
    pub fn mount_handle(&self) -> MountHandle {
        MountHandle {
            mounted: self.mounted.clone(),
        }
    }

    /// Classifies an event by delivery context and applies its policy.
    ///
    /// Foreground yields the in-app surface; both tap contexts navigate
    /// (cold-start events reach this through [`Self::check_cold_start`],
    /// which owns the once-per-process latch).
    pub fn handle(&self, event: &NotificationEvent, context: DeliveryContext) -> Option<InAppAlert> {
        match context {
            DeliveryContext::Foreground => Some(self.handle_foreground(event)),
            DeliveryContext::BackgroundTap | DeliveryContext::ColdStart => {
                self.handle_tap(event);
                None
            }
        }
    }

    /// Foreground receipt: produces the in-app confirmation surface.
    ///
    /// Always returns an alert - with no deep link it is dismiss-only.
    /// No navigation happens here; it is deferred until the consumer
    /// reports that the secondary action was chosen.
    pub fn handle_foreground(&self, event: &NotificationEvent) -> InAppAlert {
        log::debug!(
            "[Router] Foreground notification: title={:?} link={:?}",
            event.title,
            event.deep_link()
        );
        InAppAlert {
            title: event.title.clone(),
            body: event.body.clone(),
            link: event.deep_link().map(str::to_string),
        }
    }

    /// The user chose the secondary action on a foreground alert.
    pub fn open_link(&self, path: &str) {
        self.schedule_navigation(path.to_string());
    }

    /// Background tap: navigate to the deep link, if any. No surface.
    pub fn handle_tap(&self, event: &NotificationEvent) {
        match event.deep_link() {
            Some(path) => self.schedule_navigation(path.to_string()),
            None => log::debug!("[Router] Tapped notification carries no deep link"),
        }
    }

    /// Cold start: if this process was launched by a notification tap,
    /// apply the tap navigation policy to it.
    ///
    /// Latched: only the first call per process queries the host or
    /// navigates, regardless of how often the consuming view remounts.
    pub async fn check_cold_start(&self) {
        if self.cold_start_checked.swap(true, Ordering::SeqCst) {
            return;
        }

        match self.host.cold_start_event().await {
            Ok(Some(event)) => {
                log::debug!("[Router] Launched from notification tap");
                self.handle(&event, DeliveryContext::ColdStart);
            }
            Ok(None) => {}
            Err(e) => log::warn!("[Router] Cold-start query failed: {e:#}"),
        }
    }

    /// Navigates after the fixed delay, from a detached task.
    ///
    /// The delay tolerates an app router that is not ready yet; the
    /// mounted re-check makes late arrival against a torn-down view a
    /// no-op. Exactly one navigate call per schedule.
    fn schedule_navigation(&self, path: String) {
        let navigator = self.navigator.clone();
        let mounted = self.mounted.clone();
        let delay = self.navigation_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !mounted.load(Ordering::SeqCst) {
                log::debug!("[Router] Dropping navigation to {path}: view unmounted");
                return;
            }
            navigator.navigate(&path).await;
        });
    }
}
