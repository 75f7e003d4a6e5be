mod cli;

use clap::Parser;
use cli::{Cli, Command};
use dotenv::dotenv;
use std::process::ExitCode;
use std::rc::Rc;
use workflow_console::render::{render_form, render_result};
use workflow_console::session::{RunInput, run_once};
use workflow_console::{ConsoleConfig, ConsoleSink, Mode, PageController, SyncOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut config = ConsoleConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }

    let page = PageController::new(&config, Rc::new(ConsoleSink))?;

    match cli.command {
        Command::Run {
            user_prompt,
            test_conditions,
            advanced,
            generate_code_prompt,
            validate_output_prompt,
        } => {
            let input = RunInput {
                user_prompt,
                test_conditions,
                advanced,
                generate_code_prompt,
                validate_output_prompt,
            };
            let outcome = run_once(&page, input).await;
            let form = render_form(&page.store().snapshot());
            log::debug!("Form after run:\n{form}");

            if let Some(text) = render_result(&page.store().result()) {
                println!("{text}");
            }
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Prompts => {
            if page.set_mode(Mode::Advanced).await != SyncOutcome::Synced {
                return Ok(ExitCode::FAILURE);
            }
            let prompts = page.store().prompt_config();
            println!("{}", serde_json::to_string_pretty(&prompts)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
