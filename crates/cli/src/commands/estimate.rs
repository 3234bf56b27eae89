//! The `estimate` subcommand

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::commands::parse_set_pairs;
use crate::output::{format_cpu, format_memory, print_table, OutputFormat};

/// Row for the results table
#[derive(Tabled, Serialize)]
struct ResultRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Run the estimate and print the sizing result
pub fn run(kind_tag: &str, instance_type: &str, set: &[String], format: OutputFormat) -> Result<()> {
    let params = parse_set_pairs(set);
    let result = sizer_lib::estimate_for_tag(kind_tag, &params, instance_type)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let agg = result.aggregate;
            let rows = vec![
                ResultRow { metric: "Min Pods", value: agg.min_pods.to_string() },
                ResultRow { metric: "Max Pods", value: agg.max_pods.to_string() },
                ResultRow { metric: "Min Memory", value: format_memory(agg.min_memory_mi) },
                ResultRow { metric: "Max Memory", value: format_memory(agg.max_memory_mi) },
                ResultRow { metric: "Min CPU", value: format_cpu(agg.min_cpu_milli) },
                ResultRow { metric: "Max CPU", value: format_cpu(agg.max_cpu_milli) },
                ResultRow {
                    metric: "Required Instances",
                    value: format!("{} x {}", result.required_instances, instance_type),
                },
            ];
            print_table(&rows, format);
        }
    }

    Ok(())
}
