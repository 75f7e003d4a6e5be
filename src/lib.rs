pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod render;
pub mod runner;
pub mod session;
pub mod store;
pub mod sync;

#[cfg(test)]
mod testing;

pub use api::{HttpBackend, PromptConfig, WorkflowBackend, WorkflowRequest, WorkflowResult};
pub use config::ConsoleConfig;
pub use controller::PageController;
pub use error::ConsoleError;
pub use notify::{ConsoleSink, Notification, NotificationSink, Severity};
pub use runner::{RunnerState, SubmitOutcome};
pub use store::{FormState, FormStore, Mode};
pub use sync::SyncOutcome;
