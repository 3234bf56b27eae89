//! The `fields` subcommand

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use sizer_lib::fields::{fields_for, FieldSpec, FieldType};
use sizer_lib::WorkloadKind;
use tabled::Tabled;

use crate::commands::parse_set_pairs;
use crate::output::{print_table, OutputFormat};

/// Row for the field schema table
#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    id: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Type")]
    field_type: &'static str,
    #[tabled(rename = "Example")]
    example: &'static str,
    #[tabled(rename = "Visible")]
    visible: &'static str,
}

/// Show the input field schema for a workload kind
///
/// `--set` values feed the visibility predicates, so the listing
/// reflects what the form would currently show.
pub fn run(kind_tag: &str, set: &[String], format: OutputFormat) -> Result<()> {
    let kind: WorkloadKind = kind_tag.parse()?;
    let values = parse_set_pairs(set);

    match format {
        OutputFormat::Json => {
            let visible: Vec<&FieldSpec> = sizer_lib::fields::visible_fields(kind, &values);
            let json = serde_json::to_string_pretty(&visible)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", kind.display_name().bold());
            let rows: Vec<FieldRow> = fields_for(kind)
                .iter()
                .map(|f| FieldRow {
                    id: f.id,
                    label: f.label,
                    field_type: match f.field_type {
                        FieldType::Number { .. } => "number",
                        FieldType::Toggle => "toggle",
                    },
                    example: match f.field_type {
                        FieldType::Number { placeholder, .. } => placeholder,
                        FieldType::Toggle => "",
                    },
                    visible: if f.is_visible(&values) { "yes" } else { "no" },
                })
                .collect();
            print_table(&rows, format);
        }
    }

    Ok(())
}
