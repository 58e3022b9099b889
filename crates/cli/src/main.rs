use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rigup_core::provisioner::{Provisioner, ProvisionerConfig};

mod commands;

/// Rigup - A declarative environment provisioning tool
#[derive(Parser)]
#[command(name = "rigup")]
#[command(about = "Provision local development environments from a task manifest")]
#[command(version)]
struct Cli {
    /// Path to the provisioning manifest
    #[arg(short, long, default_value = "rigup.yml")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tasks declared in the manifest
    List,
    /// Show what would run for the given targets without running anything
    Plan {
        /// Target task names (defaults to the manifest's defaultTargets)
        targets: Vec<String>,
    },
    /// Provision the given targets
    Run {
        /// Target task names (defaults to the manifest's defaultTargets)
        targets: Vec<String>,
    },
    /// Show the task dependency graph
    Graph,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize provisioner with all business logic
    let provisioner = Provisioner::new(ProvisionerConfig {
        manifest_path: cli.file,
    })
    .map_err(|e| anyhow::anyhow!("Failed to load manifest: {}", e))?;

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::List => commands::list::execute(&provisioner),
        Commands::Plan { targets } => commands::plan::execute(&provisioner, &targets),
        Commands::Run { targets } => commands::run::execute(&provisioner, &targets),
        Commands::Graph => commands::graph::execute(&provisioner),
    }
}
