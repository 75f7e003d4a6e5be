//! Form state shared by the page controller and its two services.
//!
//! Every write is visible to the next read. There is no validation and no
//! cross-field coupling; `Mode::Basic` hides the prompt templates but keeps them.

use crate::api::{PromptConfig, WorkflowRequest, WorkflowResult};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Basic,
    Advanced,
}

impl Mode {
    pub fn is_advanced(self) -> bool {
        self == Mode::Advanced
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub user_prompt: String,
    pub test_conditions: String,
    pub mode: Mode,
    pub generate_code_prompt: String,
    pub validate_output_prompt: String,
    pub result: WorkflowResult,
    pub is_loading: bool,
}

/// Cloneable handle onto one page's [`FormState`].
///
/// Borrows never outlive a single accessor call, so no borrow is held across an await.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    inner: Rc<RefCell<FormState>>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> FormState {
        self.inner.borrow().clone()
    }

    pub fn user_prompt(&self) -> String {
        self.inner.borrow().user_prompt.clone()
    }

    pub fn set_user_prompt(&self, value: impl Into<String>) {
        self.inner.borrow_mut().user_prompt = value.into();
    }

    pub fn test_conditions(&self) -> String {
        self.inner.borrow().test_conditions.clone()
    }

    pub fn set_test_conditions(&self, value: impl Into<String>) {
        self.inner.borrow_mut().test_conditions = value.into();
    }

    pub fn mode(&self) -> Mode {
        self.inner.borrow().mode
    }

    /// Returns the mode that was replaced.
    pub fn set_mode(&self, mode: Mode) -> Mode {
        std::mem::replace(&mut self.inner.borrow_mut().mode, mode)
    }

    pub fn generate_code_prompt(&self) -> String {
        self.inner.borrow().generate_code_prompt.clone()
    }

    pub fn set_generate_code_prompt(&self, value: impl Into<String>) {
        self.inner.borrow_mut().generate_code_prompt = value.into();
    }

    pub fn validate_output_prompt(&self) -> String {
        self.inner.borrow().validate_output_prompt.clone()
    }

    pub fn set_validate_output_prompt(&self, value: impl Into<String>) {
        self.inner.borrow_mut().validate_output_prompt = value.into();
    }

    pub fn set_prompts(&self, prompts: PromptConfig) {
        let mut state = self.inner.borrow_mut();
        state.generate_code_prompt = prompts.generate_code_prompt;
        state.validate_output_prompt = prompts.validate_output_prompt;
    }

    pub fn result(&self) -> WorkflowResult {
        self.inner.borrow().result.clone()
    }

    pub fn set_result(&self, result: WorkflowResult) {
        self.inner.borrow_mut().result = result;
    }

    pub fn is_loading(&self) -> bool {
        self.inner.borrow().is_loading
    }

    pub fn set_loading(&self, loading: bool) {
        self.inner.borrow_mut().is_loading = loading;
    }

    pub fn prompt_config(&self) -> PromptConfig {
        let state = self.inner.borrow();
        PromptConfig {
            generate_code_prompt: state.generate_code_prompt.clone(),
            validate_output_prompt: state.validate_output_prompt.clone(),
        }
    }

    pub fn workflow_request(&self) -> WorkflowRequest {
        let state = self.inner.borrow();
        WorkflowRequest {
            user_prompt: state.user_prompt.clone(),
            test_conditions: state.test_conditions.clone(),
        }
    }
}
