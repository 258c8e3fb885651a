use clap::{Parser, Subcommand};
use mountains::config::DEFAULT_URL;
use mountains::{AppConfig, MountainApp, TerminalView};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "mountains-cli")]
#[command(about = "List mountains from a JSON feed", long_about = None)]
struct Cli {
    /// Feed URL (can also be set via MOUNTAINS_URL env var)
    #[arg(long, env = "MOUNTAINS_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the feed and print one row per mountain
    List,
    /// Fetch the feed and print the summary of one row
    Show {
        /// Zero-based row index
        index: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::with_url(cli.url);

    match cli.command {
        Commands::List => {
            let mut app = MountainApp::new(config, TerminalView::stdout(true))?;
            app.start().await;
        }
        Commands::Show { index } => {
            let mut app = MountainApp::new(config, TerminalView::stdout(false))?;
            app.start().await;
            app.select(index);
        }
    }

    Ok(())
}
