//! Sitelens binary entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use sitelens::cli;

#[derive(Parser)]
#[command(
    name = "sitelens",
    version,
    about = "On-page SEO auditor — fetch a page and score its markup signals"
)]
struct Cli {
    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Suppress progress output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show full listings (heading text, raw robots.txt, all URLs)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and report its on-page SEO signals
    Audit {
        /// Page URL (bare domains assume https)
        url: String,

        /// Per-request timeout in milliseconds
        #[arg(long, default_value_t = 15_000)]
        timeout: u64,
    },
    /// Open the hosted deep-analysis service for a URL in the browser
    Open {
        /// Page URL to hand off
        url: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Plumb global flags through env so deeper layers don't thread them.
    if cli.json {
        std::env::set_var("SITELENS_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("SITELENS_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("SITELENS_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("SITELENS_NO_COLOR", "1");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sitelens=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Audit { url, timeout } => cli::audit_cmd::run(&url, timeout).await,
        Commands::Open { url } => cli::open_cmd::run(&url),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sitelens",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
