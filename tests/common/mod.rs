#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tokio::sync::Notify;
use workflow_console::{
    ConsoleError, Notification, NotificationSink, PromptConfig, WorkflowBackend, WorkflowRequest,
};

/// Backend double that records every call and can hold the push or the run open.
pub struct ScriptedBackend {
    prompts: RefCell<Option<PromptConfig>>,
    run_result: RefCell<Option<Value>>,
    update_ok: Cell<bool>,
    hold_update: Cell<bool>,
    hold_run: Cell<bool>,
    pub update_entered: Notify,
    pub update_release: Notify,
    pub run_entered: Notify,
    pub run_release: Notify,
    events: RefCell<Vec<String>>,
    requests: RefCell<Vec<WorkflowRequest>>,
    pushed: RefCell<Vec<PromptConfig>>,
}

impl ScriptedBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            prompts: RefCell::new(Some(PromptConfig::default())),
            run_result: RefCell::new(Some(serde_json::json!({}))),
            update_ok: Cell::new(true),
            hold_update: Cell::new(false),
            hold_run: Cell::new(false),
            update_entered: Notify::new(),
            update_release: Notify::new(),
            run_entered: Notify::new(),
            run_release: Notify::new(),
            events: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
            pushed: RefCell::new(Vec::new()),
        })
    }

    pub fn serve_prompts(&self, generate: &str, validate: &str) {
        *self.prompts.borrow_mut() = Some(PromptConfig {
            generate_code_prompt: generate.into(),
            validate_output_prompt: validate.into(),
        });
    }

    pub fn fail_prompts(&self) {
        *self.prompts.borrow_mut() = None;
    }

    pub fn serve_result(&self, value: Value) {
        *self.run_result.borrow_mut() = Some(value);
    }

    pub fn fail_run(&self) {
        *self.run_result.borrow_mut() = None;
    }

    pub fn fail_update(&self) {
        self.update_ok.set(false);
    }

    pub fn hold_update(&self) {
        self.hold_update.set(true);
    }

    pub fn hold_run(&self) {
        self.hold_run.set(true);
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: &str) -> usize {
        let events = self.events.borrow();
        events.iter().filter(|e| e.as_str() == event).count()
    }

    pub fn requests(&self) -> Vec<WorkflowRequest> {
        self.requests.borrow().clone()
    }

    pub fn pushed(&self) -> Vec<PromptConfig> {
        self.pushed.borrow().clone()
    }

    fn log(&self, event: &str) {
        self.events.borrow_mut().push(event.to_string());
    }
}

fn offline() -> ConsoleError {
    ConsoleError::MalformedResponse("connection refused".into())
}

#[async_trait(?Send)]
impl WorkflowBackend for ScriptedBackend {
    async fn fetch_prompts(&self) -> Result<PromptConfig, ConsoleError> {
        self.log("fetch");
        tokio::task::yield_now().await;
        self.prompts.borrow().clone().ok_or_else(offline)
    }

    async fn update_prompts(&self, prompts: &PromptConfig) -> Result<(), ConsoleError> {
        self.log("update:start");
        self.pushed.borrow_mut().push(prompts.clone());
        if self.hold_update.get() {
            self.update_entered.notify_one();
            self.update_release.notified().await;
        } else {
            tokio::task::yield_now().await;
        }
        self.log("update:end");
        if self.update_ok.get() {
            Ok(())
        } else {
            Err(offline())
        }
    }

    async fn run_workflow(&self, request: &WorkflowRequest) -> Result<Value, ConsoleError> {
        self.log("run:start");
        self.requests.borrow_mut().push(request.clone());
        if self.hold_run.get() {
            self.run_entered.notify_one();
            self.run_release.notified().await;
        }
        self.log("run:end");
        self.run_result.borrow().clone().ok_or_else(offline)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    received: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received.borrow_mut().push(notification);
    }
}
