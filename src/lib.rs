//! Pushlink - push notification registration and routing core.
//!
//! This crate provides the notification layer of a mobile app: requesting
//! OS permission, provisioning a delivery token, persisting that token
//! against a user identity in a remote device store, and routing incoming
//! notification events to either an in-app alert or a deep-link navigation.
//!
//! # Architecture
//!
//! The host OS, the remote store, and the app router are collaborators
//! behind trait boundaries; this crate orchestrates them but implements
//! none of them (the HTTP store adapter excepted).
//!
//! ```text
//! PushNotifications (composition root)
//!     │
//!     ├── NotificationBootstrap ── presentation policy, installed once
//!     ├── Provisioner ─────────── permission + delivery token
//!     │       └── NotificationHost (trait, host OS capability)
//!     ├── TokenRegistry ───────── upsert token ↔ user, best effort
//!     │       └── DeviceStore (trait) ── HttpDeviceStore / MemoryDeviceStore
//!     └── DeliveryRouter ──────── foreground / tap / cold-start events
//!             └── Navigator (trait, app router)
//! ```
//!
//! # Modules
//!
//! - [`host`] - Host notification capability boundary
//! - [`provision`] - Permission flow and token provisioning
//! - [`registry`] - Device record persistence
//! - [`router`] - Delivery-context routing and deep links
//! - [`config`] - Configuration loading

// Library modules
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod event;
pub mod host;
pub mod provision;
pub mod registry;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use bootstrap::NotificationBootstrap;
pub use config::AppConfig;
pub use event::{DeliveryContext, DeliveryToken, NotificationEvent};
pub use host::{NotificationHost, PermissionStatus, Platform, PresentationPolicy};
pub use provision::{Provisioner, Provisioning, RegisterOptions};
pub use registry::{DeviceRecord, DeviceStore, TokenRegistry};
pub use router::{DeliveryRouter, InAppAlert, MountHandle, Navigator};
pub use service::PushNotifications;
pub use store::{HttpDeviceStore, MemoryDeviceStore};
