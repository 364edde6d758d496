//! Schema command - print the output row format

use crate::pay::render::CSV_COLUMNS;
use crate::pay::PayRow;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or csv-header
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for one output row
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(PayRow);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CsvHeader => println!("{}", CSV_COLUMNS.join(",")),
        }
        Ok(())
    }
}
