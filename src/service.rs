//! Composition root tying the notification flow together.
//!
//! `PushNotifications` owns the bootstrap, provisioner, registry, and
//! router, and runs the registration sequence the way the consuming app
//! triggers it: once a user identity becomes available.

use std::sync::Arc;

use crate::bootstrap::NotificationBootstrap;
use crate::config::AppConfig;
use crate::host::NotificationHost;
use crate::provision::{Provisioner, Provisioning, RegisterOptions};
use crate::registry::{DeviceStore, TokenRegistry};
use crate::router::{DeliveryRouter, Navigator};

/// The assembled notification layer.
///
/// Construct once at process start and share via `Arc`. The router is
/// exposed for the consumer to wire into the host's event subscriptions;
/// everything else runs through [`PushNotifications::attach`].
pub struct PushNotifications {
    host: Arc<dyn NotificationHost>,
    bootstrap: NotificationBootstrap,
    provisioner: Provisioner,
    registry: TokenRegistry,
    router: DeliveryRouter,
}

impl PushNotifications {
    /// Assembles the flow from its collaborators.
    pub fn new(
        host: Arc<dyn NotificationHost>,
        store: Arc<dyn DeviceStore>,
        navigator: Arc<dyn Navigator>,
        config: AppConfig,
    ) -> Self {
        Self {
            bootstrap: NotificationBootstrap::new(host.clone()),
            provisioner: Provisioner::new(host.clone(), config),
            registry: TokenRegistry::new(store),
            router: DeliveryRouter::new(navigator, host.clone()),
            host,
        }
    }

    /// The delivery router, for wiring into host event subscriptions.
    pub fn router(&self) -> &DeliveryRouter {
        &self.router
    }

    /// Runs the registration sequence for an authenticated user.
    ///
    /// Bootstraps the presentation policy (idempotent), provisions a
    /// token, and - when one is granted - persists it against `user_id`.
    /// Persistence is best effort and does not change the returned
    /// provisioning outcome.
    pub async fn attach(&self, user_id: &str, options: &RegisterOptions) -> Provisioning {
        self.bootstrap.setup();

        let provisioning = self.provisioner.register_for_push(options).await;

        if let Provisioning::Granted(token) = &provisioning {
            log::info!("[Provision] Delivery token obtained");
            self.registry
                .persist(token, user_id, self.host.platform())
                .await;
        }

        provisioning
    }
}
