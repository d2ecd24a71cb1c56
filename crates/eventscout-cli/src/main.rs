use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "eventscout",
    version,
    about = "Search events by free text, ranked by relevance"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    #[command(flatten)]
    store: commands::StoreArgs,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        commands::Commands::Search(args) => commands::search::run(args, &cli.store, cli.format),
        commands::Commands::List(args) => commands::list::run(args, &cli.store, cli.format),
        commands::Commands::Show(args) => commands::show::run(args, &cli.store, cli.format),
        commands::Commands::Stats => commands::stats::run(&cli.store, cli.format),
        commands::Commands::Mcp => commands::mcp::run(&cli.store),
        commands::Commands::Version => commands::version::run(),
    }
}
