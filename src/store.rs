//! Device store implementations.
//!
//! [`HttpDeviceStore`] talks to a hosted REST backend (PostgREST-style
//! upsert on the devices table). [`MemoryDeviceStore`] keeps records in
//! process for tests and embedders without a backend.

use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::constants;
use crate::registry::{DeviceRecord, DeviceStore};

/// HTTP client for the hosted device store.
///
/// Issues `POST {base_url}/rest/v1/devices?on_conflict=token` with
/// `Prefer: resolution=merge-duplicates`, which makes the insert an upsert
/// keyed on the token column.
#[derive(Debug, Clone)]
pub struct HttpDeviceStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpDeviceStore {
    /// Creates a store client for the given backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(constants::HTTP_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Creates a store client with a pre-configured HTTP client.
    ///
    /// Useful for testing or when custom client configuration is needed.
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl DeviceStore for HttpDeviceStore {
    async fn upsert_device(&self, record: &DeviceRecord) -> Result<()> {
        let url = format!(
            "{}/rest/v1/{}?on_conflict={}",
            self.base_url,
            constants::DEVICES_TABLE,
            constants::DEVICES_CONFLICT_COLUMN
        );

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "resolution=merge-duplicates")
            .json(record)
            .send()
            .await
            .context("Device upsert request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Device upsert rejected (HTTP {status}): {body}");
        }

        Ok(())
    }
}

/// In-memory device store keyed by token value.
///
/// Mirrors the remote upsert semantics: one live record per token, newer
/// registrations overwrite older ones.
#[derive(Debug, Default)]
pub struct MemoryDeviceStore {
    records: RwLock<HashMap<String, DeviceRecord>>,
}

impl MemoryDeviceStore {
    /// All stored records, in arbitrary order.
    pub async fn records(&self) -> Vec<DeviceRecord> {
        self.records.read().await.values().cloned().collect()
    }

    /// Record currently holding the given token, if any.
    pub async fn record_for_token(&self, token: &str) -> Option<DeviceRecord> {
        self.records.read().await.get(token).cloned()
    }
}

#[async_trait]
impl DeviceStore for MemoryDeviceStore {
    async fn upsert_device(&self, record: &DeviceRecord) -> Result<()> {
        self.records
            .write()
            .await
            .insert(record.token.as_str().to_string(), record.clone());
        Ok(())
    }
}
