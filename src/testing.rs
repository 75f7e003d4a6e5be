//! In-memory backend and sink shared by the unit tests.

use crate::api::{PromptConfig, WorkflowBackend, WorkflowRequest};
use crate::error::ConsoleError;
use crate::notify::{Notification, NotificationSink};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchPrompts,
    UpdatePrompts(PromptConfig),
    RunWorkflow(WorkflowRequest),
}

pub struct FakeBackend {
    prompts: PromptConfig,
    result: Value,
    fail_fetch: bool,
    fail_update: bool,
    fail_run: bool,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            prompts: PromptConfig::default(),
            result: json!({ "status": "ok" }),
            fail_fetch: false,
            fail_update: false,
            fail_run: false,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn with_prompts(mut self, prompts: PromptConfig) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn with_result(mut self, result: Value) -> Self {
        self.result = result;
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn failing_run(mut self) -> Self {
        self.fail_run = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

fn unreachable_backend() -> ConsoleError {
    ConsoleError::MalformedResponse("backend unreachable".into())
}

#[async_trait(?Send)]
impl WorkflowBackend for FakeBackend {
    async fn fetch_prompts(&self) -> Result<PromptConfig, ConsoleError> {
        self.calls.borrow_mut().push(Call::FetchPrompts);
        if self.fail_fetch {
            return Err(unreachable_backend());
        }
        Ok(self.prompts.clone())
    }

    async fn update_prompts(&self, prompts: &PromptConfig) -> Result<(), ConsoleError> {
        let call = Call::UpdatePrompts(prompts.clone());
        self.calls.borrow_mut().push(call);
        if self.fail_update {
            return Err(unreachable_backend());
        }
        Ok(())
    }

    async fn run_workflow(&self, request: &WorkflowRequest) -> Result<Value, ConsoleError> {
        let call = Call::RunWorkflow(request.clone());
        self.calls.borrow_mut().push(call);
        if self.fail_run {
            return Err(unreachable_backend());
        }
        Ok(self.result.clone())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    received: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn notifications(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received.borrow_mut().push(notification);
    }
}
