//! Kubernetes workload sizing CLI
//!
//! A command-line front end for the sizing engine: coerces raw
//! `key=value` inputs into a parameter bag, runs the estimate, and
//! formats the result for display.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{estimate, fields, instances};

/// Fallback instance type when neither a flag nor a config default is set
const DEFAULT_INSTANCE_TYPE: &str = "m5.xlarge";

/// Kubernetes workload sizing estimator
#[derive(Parser)]
#[command(name = "ksize")]
#[command(author, version, about = "Kubernetes workload sizing estimator", long_about = None)]
pub struct Cli {
    /// Output format (table or json); falls back to the config default
    #[arg(long, short)]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate pods, resources and instance count for a workload
    Estimate {
        /// Workload kind (job-autoscaler, object-autoscaler, deployment, statefulset)
        #[arg(long, short)]
        kind: String,

        /// Instance type to size against (can also be set via KSIZE_INSTANCE_TYPE)
        #[arg(long, short, env = "KSIZE_INSTANCE_TYPE")]
        instance_type: Option<String>,

        /// Workload parameter as key=value (repeatable, e.g. --set replicas=3)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Persist the chosen instance type and format as defaults
        #[arg(long)]
        save_defaults: bool,
    },

    /// List the instance-type catalog
    Instances,

    /// Show the input fields for a workload kind
    Fields {
        /// Workload kind (job-autoscaler, object-autoscaler, deployment, statefulset)
        #[arg(long, short)]
        kind: String,

        /// Current value as key=value, used to evaluate field visibility
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with env filter; --verbose raises the default level
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_target(false))
        .init();

    let config = config::Config::load().unwrap_or_default();
    let format = cli
        .format
        .or_else(|| config.default_format())
        .unwrap_or_default();

    match cli.command {
        Commands::Estimate { kind, instance_type, set, save_defaults } => {
            let instance_type = instance_type
                .or_else(|| config.default_instance_type.clone())
                .unwrap_or_else(|| DEFAULT_INSTANCE_TYPE.to_string());

            estimate::run(&kind, &instance_type, &set, format)?;

            if save_defaults {
                let updated = config::Config {
                    default_instance_type: Some(instance_type),
                    default_format: Some(format.to_string()),
                };
                updated.save()?;
                output::print_success("Saved defaults");
            }
        }
        Commands::Instances => {
            instances::run(format)?;
        }
        Commands::Fields { kind, set } => {
            fields::run(&kind, &set, format)?;
        }
    }

    Ok(())
}
