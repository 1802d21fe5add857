use crate::report::{run_colleges, run_recommend, CollegesArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use college_compass::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "College Compass",
    about = "Rank colleges for an applicant and serve the recommendation API",
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
    /// Rank the catalog for one applicant and print the results
    Recommend(RecommendArgs),
    /// Browse the catalog with optional filters
    Colleges(CollegesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load the catalog from a JSON or CSV file instead of APP_CATALOG_PATH
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Colleges(args) => run_colleges(args),
    }
}
