//! Output formatting utilities

use std::fmt;

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl OutputFormat {
    /// Parse a config-file value; unknown strings fall back to `None`
    pub fn from_config_value(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }
}

/// Print a table from a list of items
pub fn print_table<T: Tabled + Serialize>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No items found".yellow());
                return;
            }
            let table = Table::new(items).with(Style::rounded()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Format a memory quantity in Mi as a human-readable string
pub fn format_memory(memory_mi: f64) -> String {
    if memory_mi >= 1024.0 {
        format!("{:.2} Gi", memory_mi / 1024.0)
    } else {
        format!("{} Mi", memory_mi)
    }
}

/// Format a CPU quantity in milli-cores as a human-readable string
pub fn format_cpu(cpu_milli: f64) -> String {
    if cpu_milli >= 1000.0 {
        format!("{:.2} cores", cpu_milli / 1000.0)
    } else {
        format!("{} m", cpu_milli)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_switches_to_gi_at_1024() {
        assert_eq!(format_memory(512.0), "512 Mi");
        assert_eq!(format_memory(1024.0), "1.00 Gi");
        assert_eq!(format_memory(20480.0), "20.00 Gi");
        assert_eq!(format_memory(1536.0), "1.50 Gi");
    }

    #[test]
    fn cpu_switches_to_cores_at_1000() {
        assert_eq!(format_cpu(400.0), "400 m");
        assert_eq!(format_cpu(1000.0), "1.00 cores");
        assert_eq!(format_cpu(4500.0), "4.50 cores");
    }
}
