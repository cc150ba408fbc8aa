//! Permission flow and delivery-token provisioning.
//!
//! Runs once a user identity becomes available: ensures the Android
//! delivery channel exists, walks the permission lifecycle, and requests
//! a delivery token from the push backend.
//!
//! Callers that only care about the public contract collapse the result
//! with [`Provisioning::token`]: a token means notifications are live,
//! `None` means they are unavailable — never a user-facing error. The
//! tagged variants exist so the cause (denied vs. unsupported
//! environment) stays observable internally and in telemetry.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::event::DeliveryToken;
use crate::host::{ChannelSpec, NotificationHost, PermissionStatus, Platform};

/// Options for a single registration attempt.
#[derive(Debug, Clone, Default)]
pub struct RegisterOptions {
    /// Explicit push project id; overrides the configured one.
    pub project_id: Option<String>,
}

/// Outcome of a provisioning attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioning {
    /// Permission granted and a token issued.
    Granted(DeliveryToken),
    /// The user declined, or a prior denial persists.
    Denied,
    /// The environment cannot receive push (simulator/emulator), or the
    /// backend refused to issue a token.
    Unsupported,
}

impl Provisioning {
    /// Collapses to the public contract: the token if granted, else `None`.
    ///
    /// Callers must treat `None` as "notifications unavailable", not as an
    /// error to surface.
    pub fn token(self) -> Option<DeliveryToken> {
        match self {
            Provisioning::Granted(token) => Some(token),
            Provisioning::Denied | Provisioning::Unsupported => None,
        }
    }
}

/// Requests permission and provisions a delivery token.
pub struct Provisioner {
    host: Arc<dyn NotificationHost>,
    config: AppConfig,
}

impl Provisioner {
    /// Creates a provisioner bound to the given host and configuration.
    pub fn new(host: Arc<dyn NotificationHost>, config: AppConfig) -> Self {
        Self { host, config }
    }

    /// Walks the permission flow and requests a delivery token.
    ///
    /// Steps, in order:
    /// 1. Android: ensure the default delivery channel exists. Channel
    ///    failure is non-fatal; the flow proceeds.
    /// 2. Non-physical device: bail out before any permission API call.
    /// 3. Read permission; if undetermined, prompt and adopt the answer.
    /// 4. Anything but granted: done, no token request.
    /// 5. Request the token, scoped to the resolved project id.
    ///
    /// There are no retries; a failed attempt is only reattempted by the
    /// caller invoking registration again (e.g. next app launch).
    pub async fn register_for_push(&self, options: &RegisterOptions) -> Provisioning {
        if self.host.platform() == Platform::Android {
            // Non-fatal: a misconfigured channel degrades presentation,
            // it does not gate token issuance.
            if let Err(e) = self.host.ensure_channel(&ChannelSpec::default_channel()).await {
                log::warn!("[Channel] Failed to ensure default channel: {e:#}");
            }
        }

        if !self.host.is_physical_device() {
            log::info!("[Provision] Not a physical device; push unavailable");
            return Provisioning::Unsupported;
        }

        let mut status = match self.host.permission_status().await {
            Ok(status) => status,
            Err(e) => {
                log::error!("[Provision] Failed to read permission status: {e:#}");
                return Provisioning::Unsupported;
            }
        };

        if status == PermissionStatus::Undetermined {
            status = match self.host.request_permission().await {
                Ok(status) => status,
                Err(e) => {
                    log::error!("[Provision] Permission request failed: {e:#}");
                    return Provisioning::Unsupported;
                }
            };
        }

        if status != PermissionStatus::Granted {
            log::info!("[Provision] Permission not granted; push unavailable");
            return Provisioning::Denied;
        }

        // Explicit option wins over build-time configuration.
        let project_id = options
            .project_id
            .as_deref()
            .or(self.config.project_id.as_deref());

        match self.host.delivery_token(project_id).await {
            Ok(token) => Provisioning::Granted(token),
            Err(e) => {
                log::error!("[Provision] Token request failed: {e:#}");
                Provisioning::Unsupported
            }
        }
    }
}
