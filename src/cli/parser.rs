/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Milestone {
        account: String,
        repo: String,
        title: String,
    },
    Accounts,
    Help,
    Unknown(String),
}

pub const USAGE: &str = "Usage:
  mstone milestone <account>/<repo> <title>   Show the issues of a milestone by category
  mstone accounts                             List configured GitHub accounts
  mstone help                                 Show this message";

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    match args.len() {
        0 | 1 => Command::Help,
        2 => match args[1].as_str() {
            "accounts" => Command::Accounts,
            "help" => Command::Help,
            "milestone" => Command::Unknown(
                "Missing repository argument. Usage: mstone milestone <account>/<repo> <title>"
                    .to_string(),
            ),
            cmd => Command::Unknown(cmd.to_string()),
        },
        3 => match args[1].as_str() {
            "milestone" => Command::Unknown(
                "Missing milestone title. Usage: mstone milestone <account>/<repo> <title>"
                    .to_string(),
            ),
            cmd => Command::Unknown(cmd.to_string()),
        },
        _ => match args[1].as_str() {
            "milestone" => match parse_repo(&args[2]) {
                Some((account, repo)) => Command::Milestone {
                    account,
                    repo,
                    title: args[3..].join(" "),
                },
                None => Command::Unknown(
                    "Invalid repository format. Please use <account>/<repo>.".to_string(),
                ),
            },
            cmd => Command::Unknown(cmd.to_string()),
        },
    }
}

fn parse_repo(arg: &str) -> Option<(String, String)> {
    match arg.split('/').collect::<Vec<_>>().as_slice() {
        [account, repo] if !account.is_empty() && !repo.is_empty() => {
            Some((account.to_string(), repo.to_string()))
        }
        _ => None,
    }
}
