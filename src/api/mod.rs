pub mod client;
pub mod types;

pub use client::{HttpBackend, WorkflowBackend};
pub use types::{PromptConfig, WorkflowRequest, WorkflowResult};
