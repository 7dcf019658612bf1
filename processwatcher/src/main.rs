//! Entry point for the processwatcher CLI. Parses args and dispatches one command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use processwatcher::config::{ensure_config_dir, load_settings};
use processwatcher::history::read_history;
use processwatcher::lister::{find_processes, list_processes, ListOptions, SortKey};
use processwatcher::resource_log::ResourceLog;
use processwatcher::ui::processes::{render_matches, render_process_list};
use processwatcher::ui::report::{render_details, render_history, render_kill};
use processwatcher::ui::stats::{render_network, render_stats};
use processwatcher::{controller, inspector, monitor};
use processwatcher_probe::{ProcessSource, SysinfoSource};

const EXAMPLES: &str = "\
Examples:
  processwatcher stats                    # Show system stats
  processwatcher list                     # List top 20 processes by CPU
  processwatcher list --sort memory       # Sort by memory usage
  processwatcher list --limit 50          # Show top 50
  processwatcher find chrome              # Find processes by name
  processwatcher info 1234                # Get details for PID 1234
  processwatcher kill 1234                # Terminate process 1234
  processwatcher kill 1234 --force        # Force kill process 1234
  processwatcher monitor                  # Real-time monitoring
  processwatcher history                  # Show resource history
  processwatcher network                  # Network statistics";

#[derive(Parser, Debug)]
#[command(name = "processwatcher")]
#[command(about = "Smart process monitor & manager")]
#[command(version)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Resource log file (default: <config dir>/resource_log.txt)
    #[arg(long, env = "PROCESSWATCHER_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show system resource statistics
    Stats,
    /// List running processes
    List {
        /// Sort key
        #[arg(long, value_enum, default_value_t = SortKey::Cpu)]
        sort: SortKey,
        /// Number of processes to show
        #[arg(long)]
        limit: Option<usize>,
        /// Show all processes including idle ones
        #[arg(long)]
        all: bool,
    },
    /// Find processes by name (case-insensitive)
    Find {
        /// Search term
        term: String,
    },
    /// Show process details
    Info {
        /// Process ID
        #[arg(allow_negative_numbers = true)]
        pid: i64,
    },
    /// Terminate a process (SIGTERM), or kill it with --force (SIGKILL)
    Kill {
        /// Process ID
        #[arg(allow_negative_numbers = true)]
        pid: i64,
        /// Force kill (SIGKILL)
        #[arg(long)]
        force: bool,
    },
    /// Real-time resource monitoring
    Monitor {
        /// Update interval in seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },
    /// Show resource usage history
    History {
        /// Number of entries to show
        #[arg(long)]
        lines: Option<usize>,
    },
    /// Show network statistics
    Network,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = std::env::var("PROCESSWATCHER_LOG")
        .ok()
        .and_then(|v| tracing_subscriber::EnvFilter::try_new(v).ok())
        .or_else(|| tracing_subscriber::EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        <Cli as clap::CommandFactory>::command().print_help()?;
        return Ok(());
    };

    // Create the config dir up front; a failure here only matters to the logger.
    if let Err(e) = ensure_config_dir() {
        debug!("config dir unavailable: {e}");
    }
    let settings = load_settings();
    let log_path = cli.log_file.unwrap_or_else(|| settings.log_path());
    let source = SysinfoSource::with_cpu_sample(settings.cpu_sample());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Stats => {
            let snap = source.system().await;
            render_stats(&mut out, &snap)?;
        }
        Commands::List { sort, limit, all } => {
            let opts = ListOptions {
                sort_by: sort,
                limit: limit.unwrap_or(settings.list_limit),
                show_all: all,
            };
            let procs = list_processes(&source, opts).await;
            render_process_list(&mut out, &procs, sort)?;
        }
        Commands::Find { term } => {
            let procs = find_processes(&source, &term).await;
            render_matches(&mut out, &term, &procs)?;
        }
        Commands::Info { pid } => {
            let lookup = inspector::inspect(&source, pid)
                .await
                .with_context(|| format!("[X] Cannot inspect pid {pid}"))?;
            render_details(&mut out, &lookup)?;
        }
        Commands::Kill { pid, force } => {
            let outcome = controller::terminate(&source, pid, force)
                .await
                .with_context(|| format!("[X] Cannot signal pid {pid}"))?;
            render_kill(&mut out, &outcome)?;
        }
        Commands::Monitor { interval } => {
            let interval = interval
                .map(Duration::from_secs)
                .unwrap_or_else(|| settings.monitor_interval());
            let log = ResourceLog::new(log_path);
            debug!("logging samples to {}", log.path().display());
            monitor::run(&source, &log, interval, &mut out).await?;
        }
        Commands::History { lines } => {
            let lines = lines.unwrap_or(settings.history_lines);
            match read_history(&log_path, lines) {
                Ok(h) => render_history(&mut out, &h)?,
                Err(e) => writeln!(out, "[X] Error reading history: {e}")?,
            }
        }
        Commands::Network => {
            let net = source.network().await;
            render_network(&mut out, &net)?;
        }
    }
    out.flush()?;
    Ok(())
}
