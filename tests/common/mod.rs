//! Shared doubles for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use pushlink::host::{ChannelSpec, ChannelImportance};
use pushlink::{
    DeliveryToken, NotificationEvent, NotificationHost, Navigator, PermissionStatus, Platform,
    PresentationPolicy,
};

/// Initializes test logging once; respects `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Host double: physical device, configurable platform/permission/token.
pub struct MockHost {
    pub platform: Platform,
    pub physical_device: bool,
    pub permission: PermissionStatus,
    pub token: Option<String>,
    pub cold_start: Mutex<Option<NotificationEvent>>,
    pub token_requests: AtomicUsize,
}

impl MockHost {
    pub fn granted(platform: Platform, token: &str) -> Self {
        Self {
            platform,
            physical_device: true,
            permission: PermissionStatus::Granted,
            token: Some(token.to_string()),
            cold_start: Mutex::new(None),
            token_requests: AtomicUsize::new(0),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            ..Self::granted(Platform::Ios, "unused")
        }
    }
}

#[async_trait]
impl NotificationHost for MockHost {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_physical_device(&self) -> bool {
        self.physical_device
    }

    fn set_presentation_policy(&self, _policy: PresentationPolicy) {}

    async fn permission_status(&self) -> Result<PermissionStatus> {
        Ok(self.permission)
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(self.permission)
    }

    async fn ensure_channel(&self, spec: &ChannelSpec) -> Result<()> {
        // The provisioner always asks for the max-importance default channel.
        assert_eq!(spec.importance, ChannelImportance::Max);
        Ok(())
    }

    async fn delivery_token(&self, _project_id: Option<&str>) -> Result<DeliveryToken> {
        self.token_requests.fetch_add(1, Ordering::SeqCst);
        match &self.token {
            Some(token) => Ok(DeliveryToken::new(token.clone())),
            None => anyhow::bail!("backend refused"),
        }
    }

    async fn cold_start_event(&self) -> Result<Option<NotificationEvent>> {
        Ok(self.cold_start.lock().unwrap().clone())
    }
}

/// Navigator double recording navigation paths.
#[derive(Default)]
pub struct SpyNavigator {
    paths: Mutex<Vec<String>>,
}

impl SpyNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl Navigator for SpyNavigator {
    async fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Builds a notification event carrying an optional `data.url`.
pub fn notification(title: &str, url: Option<&str>) -> NotificationEvent {
    let mut data = serde_json::Map::new();
    if let Some(url) = url {
        data.insert("url".to_string(), serde_json::Value::String(url.to_string()));
    }
    NotificationEvent {
        title: Some(title.to_string()),
        body: Some("body".to_string()),
        data,
    }
}
