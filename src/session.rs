//! One pass over the page from the command line: fill the form, optionally
//! switch to Advanced mode, then submit.

use crate::controller::PageController;
use crate::runner::SubmitOutcome;
use crate::store::Mode;
use crate::sync::SyncOutcome;

#[derive(Debug, Clone, Default)]
pub struct RunInput {
    pub user_prompt: String,
    pub test_conditions: String,
    pub advanced: bool,
    pub generate_code_prompt: Option<String>,
    pub validate_output_prompt: Option<String>,
}

impl RunInput {
    fn overrides_both_templates(&self) -> bool {
        self.generate_code_prompt.is_some() && self.validate_output_prompt.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The template fetch failed and the form still held unsynced templates,
    /// so nothing was pushed or run.
    Aborted,
    Submitted(SubmitOutcome),
}

impl RunOutcome {
    pub fn is_success(self) -> bool {
        self == RunOutcome::Submitted(SubmitOutcome::Succeeded)
    }
}

/// An Advanced submit pushes whatever templates the form holds. Without a
/// successful fetch those are blank unless both were given explicitly, and
/// pushing them would overwrite the backend's copies.
pub async fn run_once(page: &PageController, input: RunInput) -> RunOutcome {
    let fully_overridden = input.overrides_both_templates();
    page.set_user_prompt(input.user_prompt);
    page.set_test_conditions(input.test_conditions);

    if input.advanced {
        let sync = page.set_mode(Mode::Advanced).await;
        if let Some(p) = input.generate_code_prompt {
            page.set_generate_code_prompt(p);
        }
        if let Some(p) = input.validate_output_prompt {
            page.set_validate_output_prompt(p);
        }
        if sync == SyncOutcome::Failed && !fully_overridden {
            log::error!("Not submitting: prompt templates could not be fetched");
            return RunOutcome::Aborted;
        }
    }

    RunOutcome::Submitted(page.submit().await)
}
