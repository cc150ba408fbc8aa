//! Device record persistence.
//!
//! Once a delivery token exists, it is upserted against the user identity
//! in a remote device store so the backend can route pushes. Persistence
//! is a best-effort side channel: a failed upsert is logged and swallowed,
//! never retried, and never blocks notification functionality.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::DeliveryToken;
use crate::host::Platform;

/// A device registration row as held by the remote store.
///
/// At most one live record exists per token value: the upsert conflicts on
/// the token column, so a token migrates between users (logout/login on the
/// same device) by overwrite, not duplication. Records are never deleted by
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Identity of the authenticated user owning this installation.
    pub user_id: String,
    /// Delivery token for this installation.
    pub token: DeliveryToken,
    /// Platform string (`"ios"` / `"android"`).
    pub platform: String,
    /// When this registration last ran (ISO-8601 on the wire).
    pub last_used_at: DateTime<Utc>,
}

/// Remote store boundary: a keyed upsert over the devices table.
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Inserts or updates the record, conflicting on the token column.
    async fn upsert_device(&self, record: &DeviceRecord) -> Result<()>;
}

/// Persists provisioned tokens against user identities.
pub struct TokenRegistry {
    store: Arc<dyn DeviceStore>,
}

impl TokenRegistry {
    /// Creates a registry backed by the given store.
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store }
    }

    /// Upserts a device record for the token/user pair.
    ///
    /// Exactly one upsert is issued per call. Failure is logged and
    /// swallowed - callers cannot observe it, and registration is still
    /// considered to have succeeded once a token exists.
    pub async fn persist(&self, token: &DeliveryToken, user_id: &str, platform: Platform) {
        let record = DeviceRecord {
            user_id: user_id.to_string(),
            token: token.clone(),
            platform: platform.as_str().to_string(),
            last_used_at: Utc::now(),
        };

        match self.store.upsert_device(&record).await {
            Ok(()) => log::debug!("[Registry] Device record upserted for user {user_id}"),
            Err(e) => log::error!("[Registry] Failed to persist device record: {e:#}"),
        }
    }
}
