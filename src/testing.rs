//! In-process host double for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::event::{DeliveryToken, NotificationEvent};
use crate::host::{
    ChannelSpec, NotificationHost, PermissionStatus, Platform, PresentationPolicy,
};

/// Navigator double that records every navigation path.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl crate::router::Navigator for RecordingNavigator {
    async fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Scriptable [`NotificationHost`] that records every capability call.
pub struct FakeHost {
    platform: Platform,
    physical_device: bool,
    permission: PermissionStatus,
    prompt_answer: PermissionStatus,
    channel_fails: bool,
    token_fails: bool,
    cold_start: Mutex<Option<NotificationEvent>>,
    cold_start_queries: AtomicUsize,
    policy_installs: AtomicUsize,
    installed_policy: Mutex<Option<PresentationPolicy>>,
    permission_reads: AtomicUsize,
    permission_prompts: AtomicUsize,
    channel_calls: AtomicUsize,
    token_requests: AtomicUsize,
    last_project_id: Mutex<Option<String>>,
}

impl FakeHost {
    /// iOS physical device with permission already granted.
    pub fn granted_device() -> Self {
        Self {
            platform: Platform::Ios,
            physical_device: true,
            permission: PermissionStatus::Granted,
            prompt_answer: PermissionStatus::Granted,
            channel_fails: false,
            token_fails: false,
            cold_start: Mutex::new(None),
            cold_start_queries: AtomicUsize::new(0),
            policy_installs: AtomicUsize::new(0),
            installed_policy: Mutex::new(None),
            permission_reads: AtomicUsize::new(0),
            permission_prompts: AtomicUsize::new(0),
            channel_calls: AtomicUsize::new(0),
            token_requests: AtomicUsize::new(0),
            last_project_id: Mutex::new(None),
        }
    }

    pub fn on_android(mut self) -> Self {
        self.platform = Platform::Android;
        self
    }

    pub fn on_simulator(mut self) -> Self {
        self.physical_device = false;
        self
    }

    pub fn with_permission(mut self, status: PermissionStatus) -> Self {
        self.permission = status;
        self
    }

    pub fn with_prompt_answer(mut self, status: PermissionStatus) -> Self {
        self.prompt_answer = status;
        self
    }

    pub fn with_channel_failure(mut self) -> Self {
        self.channel_fails = true;
        self
    }

    pub fn with_token_failure(mut self) -> Self {
        self.token_fails = true;
        self
    }

    pub fn with_cold_start(self, event: NotificationEvent) -> Self {
        *self.cold_start.lock().unwrap() = Some(event);
        self
    }

    pub fn policy_installs(&self) -> usize {
        self.policy_installs.load(Ordering::SeqCst)
    }

    pub fn installed_policy(&self) -> Option<PresentationPolicy> {
        *self.installed_policy.lock().unwrap()
    }

    pub fn permission_reads(&self) -> usize {
        self.permission_reads.load(Ordering::SeqCst)
    }

    pub fn permission_prompts(&self) -> usize {
        self.permission_prompts.load(Ordering::SeqCst)
    }

    pub fn channel_calls(&self) -> usize {
        self.channel_calls.load(Ordering::SeqCst)
    }

    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    pub fn cold_start_queries(&self) -> usize {
        self.cold_start_queries.load(Ordering::SeqCst)
    }

    pub fn last_project_id(&self) -> Option<String> {
        self.last_project_id.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationHost for FakeHost {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_physical_device(&self) -> bool {
        self.physical_device
    }

    fn set_presentation_policy(&self, policy: PresentationPolicy) {
        self.policy_installs.fetch_add(1, Ordering::SeqCst);
        *self.installed_policy.lock().unwrap() = Some(policy);
    }

    async fn permission_status(&self) -> Result<PermissionStatus> {
        self.permission_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.permission)
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        self.permission_prompts.fetch_add(1, Ordering::SeqCst);
        Ok(self.prompt_answer)
    }

    async fn ensure_channel(&self, _spec: &ChannelSpec) -> Result<()> {
        self.channel_calls.fetch_add(1, Ordering::SeqCst);
        if self.channel_fails {
            anyhow::bail!("channel refused by host");
        }
        Ok(())
    }

    async fn delivery_token(&self, project_id: Option<&str>) -> Result<DeliveryToken> {
        self.token_requests.fetch_add(1, Ordering::SeqCst);
        *self.last_project_id.lock().unwrap() = project_id.map(str::to_string);
        if self.token_fails {
            anyhow::bail!("push backend unavailable");
        }
        Ok(DeliveryToken::new("fake-token"))
    }

    async fn cold_start_event(&self) -> Result<Option<NotificationEvent>> {
        self.cold_start_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.cold_start.lock().unwrap().clone())
    }
}
