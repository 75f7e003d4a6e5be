use crate::api::{HttpBackend, WorkflowBackend};
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::notify::NotificationSink;
use crate::runner::{SubmitOutcome, WorkflowRunner};
use crate::store::{FormStore, Mode};
use crate::sync::{PromptSync, SyncOutcome};
use std::rc::Rc;

/// The page: one form store plus the services that read and write it.
///
/// Nothing cancels an in-flight call. If the controller is dropped while a
/// sync or submit future is still pending elsewhere, that future keeps the
/// store alive and writes into it; the write is simply never observed.
pub struct PageController {
    store: FormStore,
    sync: PromptSync,
    runner: WorkflowRunner,
}

impl PageController {
    pub fn new(
        config: &ConsoleConfig,
        sink: Rc<dyn NotificationSink>,
    ) -> Result<Self, ConsoleError> {
        let backend = HttpBackend::new(config)?;
        log::info!("Backend at {}", config.base_url);
        Ok(Self::with_backend(Rc::new(backend), sink))
    }

    pub fn with_backend(backend: Rc<dyn WorkflowBackend>, sink: Rc<dyn NotificationSink>) -> Self {
        let store = FormStore::new();
        Self {
            sync: PromptSync::new(store.clone(), backend.clone(), sink.clone()),
            runner: WorkflowRunner::new(store.clone(), backend, sink),
            store,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn set_user_prompt(&self, value: impl Into<String>) {
        self.store.set_user_prompt(value);
    }

    pub fn set_test_conditions(&self, value: impl Into<String>) {
        self.store.set_test_conditions(value);
    }

    pub fn set_generate_code_prompt(&self, value: impl Into<String>) {
        self.store.set_generate_code_prompt(value);
    }

    pub fn set_validate_output_prompt(&self, value: impl Into<String>) {
        self.store.set_validate_output_prompt(value);
    }

    /// The mode toggle. The edge is taken before any await, so overlapping
    /// toggles each get their own fetch and the last response wins.
    pub async fn set_mode(&self, mode: Mode) -> SyncOutcome {
        let previous = self.store.set_mode(mode);
        log::info!("Advanced mode toggled: {}", mode.is_advanced());
        self.sync.on_mode_change(previous, mode).await
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.runner.submit().await
    }
}
