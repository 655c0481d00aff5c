use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokemon_mcp::config::{DEFAULT_API_BASE_URL, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS};
use pokemon_mcp::{Config, Daemon};

/// Pokemon MCP server - fetch Pokemon over MCP and view them in the browser
#[derive(Parser)]
#[command(name = "pokemon-mcp", version, about)]
struct Cli {
    /// Base URL of the Pokemon catalog
    #[arg(long, env = "POKEMON_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Host for the local web view
    #[arg(long, env = "POKEMON_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Catalog request timeout in seconds
    #[arg(long, env = "POKEMON_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Don't open a browser after fetching
    #[arg(long, env = "POKEMON_NO_BROWSER")]
    no_browser: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            api_base_url: self.api_base_url.clone(),
            host: self.host.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            open_browser: !self.no_browser,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,pokemon_mcp=info",
        1 => "info,pokemon_mcp=debug",
        2 => "debug",
        _ => "trace",
    };

    // stdout is the MCP channel, logs go to stderr only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("fatal: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run(cli));

    // stdin is read on a blocking thread that only returns once the client
    // closes the pipe, so never wait for it after a signal
    runtime.shutdown_background();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    tracing::debug!(?config, "loaded configuration");

    let daemon = Daemon::new(config)?;
    daemon.run().await?;

    Ok(())
}
