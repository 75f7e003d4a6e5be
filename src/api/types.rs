use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The two backend-held prompt templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub generate_code_prompt: String,
    pub validate_output_prompt: String,
}

/// Body of `POST /run_workflow`. Built from the store at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    pub user_prompt: String,
    pub test_conditions: String,
}

/// Whatever the execution backend returned. Never interpreted, only rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkflowResult {
    #[default]
    Absent,
    Present(Value),
}

impl WorkflowResult {
    pub fn is_present(&self) -> bool {
        matches!(self, WorkflowResult::Present(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            WorkflowResult::Absent => None,
            WorkflowResult::Present(v) => Some(v),
        }
    }

    /// Pretty-printed JSON with two-space indentation, keys in received order.
    pub fn render(&self) -> Option<String> {
        // Value serialization cannot fail: map keys are always strings.
        let value = self.value()?;
        serde_json::to_string_pretty(value).ok()
    }
}
