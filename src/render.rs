//! Plain-text views of the form and the result.

use crate::api::WorkflowResult;
use crate::store::FormState;
use std::fmt::Write;

pub const USER_PROMPT_PLACEHOLDER: &str = "Write a Python script that prints 'hello world'";
pub const TEST_CONDITIONS_PLACEHOLDER: &str =
    "The script must print exactly 'hello world' and exit with code 0.";

pub fn render_result(result: &WorkflowResult) -> Option<String> {
    result.render()
}

pub fn submit_label(is_loading: bool) -> &'static str {
    if is_loading {
        "Processing..."
    } else {
        "Run Workflow"
    }
}

pub fn render_form(state: &FormState) -> String {
    let mut out = String::new();
    let mode = if state.mode.is_advanced() { "on" } else { "off" };
    let _ = writeln!(out, "Advanced Mode: {mode}");
    field(
        &mut out,
        "User Prompt",
        &state.user_prompt,
        Some(USER_PROMPT_PLACEHOLDER),
    );
    field(
        &mut out,
        "Test Conditions",
        &state.test_conditions,
        Some(TEST_CONDITIONS_PLACEHOLDER),
    );
    if state.mode.is_advanced() {
        field(
            &mut out,
            "Generate Code Prompt",
            &state.generate_code_prompt,
            None,
        );
        field(
            &mut out,
            "Validate Output Prompt",
            &state.validate_output_prompt,
            None,
        );
    }
    let _ = write!(out, "[{}]", submit_label(state.is_loading));
    out
}

fn field(out: &mut String, label: &str, value: &str, placeholder: Option<&str>) {
    let shown = match (value.is_empty(), placeholder) {
        (true, Some(p)) => format!("({p})"),
        _ => value.to_string(),
    };
    let _ = writeln!(out, "{label}:\n{}", indent(&shown));
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("  {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}
