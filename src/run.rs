use crate::cli;
use crate::config;
use crate::output;
use crate::script::GithubScriptService;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Runs the CLI. Output is mirrored into `stdout_additional` when given, and
/// `config_path` overrides the `.mstone/config.json` lookup in the current directory.
pub async fn run(
    args: Vec<String>,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    match cli::parser::parse_args(&args) {
        cli::parser::Command::Milestone {
            account,
            repo,
            title,
        } => {
            let service = build_service(config_path)?;
            let details = service
                .execute(&account, &repo, &title)
                .await
                .with_context(|| {
                    format!("Failed to get details of milestone '{title}' in {account}/{repo}")
                })?;
            let rendered = serde_json::to_string_pretty(&details)
                .context("Failed to render milestone details")?;
            output::println(&rendered, &mut stdout_additional)?;
        }
        cli::parser::Command::Accounts => {
            let service = build_service(config_path)?;
            for account in service.github_accounts() {
                output::println(account, &mut stdout_additional)?;
            }
        }
        cli::parser::Command::Help => {
            output::println(cli::parser::USAGE, &mut stdout_additional)?;
        }
        cli::parser::Command::Unknown(message) => {
            output::println(
                &format!("Invalid command or arguments: {message}"),
                &mut stdout_additional,
            )?;
            output::println("Run `mstone help` for usage.", &mut stdout_additional)?;
        }
    }
    Ok(())
}

fn build_service(config_path: Option<&Path>) -> anyhow::Result<GithubScriptService> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    let configuration = config::load_config(&path)?;
    GithubScriptService::from_configuration(configuration).context("Failed to create GitHub client")
}

fn default_config_path() -> anyhow::Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    Ok(config::project_config_path(&current_dir))
}
