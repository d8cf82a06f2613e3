use crate::demo::{
    run_claims, run_demo, run_extract, run_recommend, ClaimsArgs, ExtractArgs, RecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use van_mitra::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Van Mitra",
    about = "FRA decision support: scheme recommendations, claim extraction, and claim registry",
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
    /// Rank development schemes for a village
    Recommend(RecommendArgs),
    /// Extract claim fields from Form A text
    Extract(ExtractArgs),
    /// List claims with optional status filter and search
    Claims(ClaimsArgs),
    /// Walk through recommendations, extraction, and claim review with the built-in data
    Demo,
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
        Command::Recommend(args) => run_recommend(args),
        Command::Extract(args) => run_extract(args),
        Command::Claims(args) => run_claims(args),
        Command::Demo => run_demo(),
    }
}
