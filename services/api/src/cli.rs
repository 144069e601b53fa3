use crate::demo::{run_demo, run_questions, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pathfinder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Pathfinder",
    about = "Score the personality questionnaire and recommend careers from the command line",
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
    /// Inspect the questionnaire or score a set of answers
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Walk through scoring and recommendations for a sample participant
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Print the active question bank
    Questions,
    /// Score answers and list catalog recommendations
    Score(ScoreArgs),
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
        Command::Quiz {
            command: QuizCommand::Questions,
        } => run_questions(),
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_score(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
