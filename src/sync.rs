use crate::api::WorkflowBackend;
use crate::notify::{Notification, NotificationSink};
use crate::store::{FormStore, Mode};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Not a Basic -> Advanced edge; nothing was fetched.
    Skipped,
    Synced,
    Failed,
}

/// Pulls the prompt templates into the store when the page enters Advanced mode.
pub struct PromptSync {
    store: FormStore,
    backend: Rc<dyn WorkflowBackend>,
    sink: Rc<dyn NotificationSink>,
}

impl PromptSync {
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

    /// Bound to the mode-transition edge: fetches once for `Basic -> Advanced`, never otherwise.
    pub async fn on_mode_change(&self, previous: Mode, next: Mode) -> SyncOutcome {
        if !(previous == Mode::Basic && next == Mode::Advanced) {
            return SyncOutcome::Skipped;
        }
        self.sync().await
    }

    async fn sync(&self) -> SyncOutcome {
        log::info!("🔄 Fetching prompts...");
        match self.backend.fetch_prompts().await {
            Ok(prompts) => {
                log::debug!("Fetched prompts: {prompts:?}");
                self.store.set_prompts(prompts);
                SyncOutcome::Synced
            }
            Err(e) => {
                log::error!("Error fetching prompts: {e}");
                self.sink.notify(Notification::fetch_prompts_failed());
                SyncOutcome::Failed
            }
        }
    }
}
