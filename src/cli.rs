use clap::{Parser, Subcommand};

/// Drive the code-generation workflow backend from the terminal
#[derive(Parser, Debug)]
#[command(name = "workflow-console", version)]
pub struct Cli {
    /// Backend base address (overrides WORKFLOW_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit a task and its acceptance conditions, then print the result
    Run {
        /// What the generated program should do
        user_prompt: String,

        /// How the output will be judged
        test_conditions: String,

        /// Switch to Advanced mode first (syncs and then pushes the prompt templates)
        #[arg(long)]
        advanced: bool,

        /// Replace the synced code-generation template before submitting
        #[arg(long, requires = "advanced")]
        generate_code_prompt: Option<String>,

        /// Replace the synced validation template before submitting
        #[arg(long, requires = "advanced")]
        validate_output_prompt: Option<String>,
    },

    /// Fetch and print the backend's current prompt templates
    Prompts,
}
