//! The `instances` subcommand

use anyhow::Result;
use serde::Serialize;
use sizer_lib::catalog;
use tabled::Tabled;

use crate::output::{print_table, OutputFormat};

/// Row for the catalog table
#[derive(Tabled, Serialize)]
struct InstanceRow {
    #[tabled(rename = "Type")]
    name: &'static str,
    #[tabled(rename = "CPU Cores")]
    cpu_cores: f64,
    #[tabled(rename = "Memory (GiB)")]
    memory_gib: f64,
}

/// List the instance-type catalog
pub fn run(format: OutputFormat) -> Result<()> {
    let rows: Vec<InstanceRow> = catalog::entries()
        .map(|(name, spec)| InstanceRow {
            name,
            cpu_cores: spec.cpu_cores,
            memory_gib: spec.memory_gib,
        })
        .collect();

    print_table(&rows, format);
    Ok(())
}
