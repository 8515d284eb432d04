use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use systidy::cleanup::engine::CleanupEngine;
use systidy::cleanup::locations::default_locations;
use systidy::config::{self, load_config, load_config_from_path};
use systidy::system::collector::Collector;
use systidy::system::snapshot::SystemSnapshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "systidy",
    about = "System status snapshot and temp-file cleanup"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// CPU sampling window in milliseconds
    #[arg(long)]
    cpu_sample_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a point-in-time snapshot of host resource usage
    Status,
    /// Delete temporary files under the configured cleanup roots
    Clean {
        /// Cleanup root to use instead of the configured set (repeatable)
        #[arg(long = "location")]
        locations: Vec<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    match cli.command.unwrap_or(Command::Status) {
        Command::Status => run_status(&config).await,
        Command::Clean { locations } => run_clean(&config, locations).await,
    }
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ms) = cli.cpu_sample_ms {
        config.metrics.cpu_sample_ms = ms;
    }

    config
}

async fn run_status(config: &config::Config) -> Result<()> {
    let interval = Duration::from_millis(config.metrics.cpu_sample_ms);
    // Collection blocks for the whole CPU sample interval; keep it off the
    // runtime thread.
    let snapshot =
        tokio::task::spawn_blocking(move || Collector::new(interval).collect()).await??;
    print_snapshot(&snapshot);
    Ok(())
}

async fn run_clean(config: &config::Config, overrides: Vec<PathBuf>) -> Result<()> {
    let locations = if !overrides.is_empty() {
        overrides
    } else if !config.cleanup.locations.is_empty() {
        config.cleanup.locations.clone()
    } else {
        default_locations()
    };

    info!(roots = locations.len(), "starting cleanup");
    let engine = CleanupEngine::new(locations);
    let report = tokio::task::spawn_blocking(move || engine.clean()).await?;

    println!(
        "Removed {} files, freed {} MiB",
        report.files_removed, report.bytes_freed_mib
    );
    if !report.unreachable_locations.is_empty() {
        println!(
            "Could not access {} location(s):",
            report.unreachable_locations.len()
        );
        for path in &report.unreachable_locations {
            println!("  {}", path.display());
        }
    }
    Ok(())
}

fn print_snapshot(snapshot: &SystemSnapshot) {
    println!("Uptime:   {}", snapshot.uptime.as_deref().unwrap_or("unknown"));
    println!("CPU:      {:.1}%", snapshot.cpu_usage_percent);
    match snapshot.memory {
        Some(m) => println!(
            "Memory:   {:.1}% ({} GiB free of {} GiB)",
            m.usage_percent, m.available_gib, m.total_gib
        ),
        None => println!("Memory:   unknown"),
    }
    match snapshot.disk {
        Some(d) => println!(
            "Disk:     {:.1}% ({} GiB free of {} GiB)",
            d.usage_percent, d.free_gib, d.total_gib
        ),
        None => println!("Disk:     unknown"),
    }
    match snapshot.network {
        Some(n) => println!("Network:  {} MiB sent, {} MiB received", n.sent_mib, n.recv_mib),
        None => println!("Network:  unknown"),
    }
}
