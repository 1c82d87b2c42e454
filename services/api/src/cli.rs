use crate::completion::{print_checklist, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use csn_profile::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CSN Profile Service",
    about = "Serve and inspect CSN profile completion scores",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score profiles or inspect the completion checklist
    Completion {
        #[command(subcommand)]
        command: CompletionCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CompletionCommand {
    /// Score a stored user or a profile aggregate file
    Score(ScoreArgs),
    /// Print the configured checklist rules
    Checklist,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Completion {
            command: CompletionCommand::Score(args),
        } => run_score(args),
        Command::Completion {
            command: CompletionCommand::Checklist,
        } => {
            print_checklist();
            Ok(())
        }
    }
}
