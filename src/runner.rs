use crate::api::{WorkflowBackend, WorkflowResult};
use crate::notify::{Notification, NotificationSink};
use crate::store::FormStore;
use std::rc::Rc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
    /// A submit was already in flight; nothing was sent.
    Rejected,
}

/// Holds `is_loading` high for as long as it lives.
struct LoadingGuard<'a> {
    store: &'a FormStore,
}

impl<'a> LoadingGuard<'a> {
    fn engage(store: &'a FormStore) -> Self {
        store.set_loading(true);
        Self { store }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.set_loading(false);
    }
}

pub struct WorkflowRunner {
    store: FormStore,
    backend: Rc<dyn WorkflowBackend>,
    sink: Rc<dyn NotificationSink>,
}

impl WorkflowRunner {
    pub fn new(
        store: FormStore,
        backend: Rc<dyn WorkflowBackend>,
        sink: Rc<dyn NotificationSink>,
    ) -> Self {
        Self {
            store,
            backend,
            sink,
        }
    }

    pub fn state(&self) -> RunnerState {
        if self.store.is_loading() {
            RunnerState::Submitting
        } else {
            RunnerState::Idle
        }
    }

    /// Pushes the prompt templates (Advanced mode only), then runs the workflow.
    ///
    /// The two calls are strictly sequential and a failed push skips the run.
    /// Failures are logged and surfaced as one generic toast; the previous
    /// result is left in place.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.state() == RunnerState::Submitting {
            log::warn!("Submit ignored: a workflow is already running");
            return SubmitOutcome::Rejected;
        }
        let _loading = LoadingGuard::engage(&self.store);

        let submission = Uuid::new_v4();
        let advanced = self.store.mode().is_advanced();
        let prompts = self.store.prompt_config();
        let request = self.store.workflow_request();
        log::info!("🚀 [{submission}] Submitting workflow...");

        if advanced {
            log::info!("   [{submission}] Updating prompts...");
            if let Err(e) = self.backend.update_prompts(&prompts).await {
                log::error!("   [{submission}] Error updating prompts: {e}");
                self.sink.notify(Notification::run_workflow_failed());
                return SubmitOutcome::Failed;
            }
        }

        log::info!("   [{submission}] Running workflow...");
        match self.backend.run_workflow(&request).await {
            Ok(value) => {
                log::info!("   [{submission}] Workflow result: {value}");
                self.store.set_result(WorkflowResult::Present(value));
                self.sink.notify(Notification::run_workflow_succeeded());
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                log::error!("   [{submission}] Error running workflow: {e}");
                self.sink.notify(Notification::run_workflow_failed());
                SubmitOutcome::Failed
            }
        }
    }
}
