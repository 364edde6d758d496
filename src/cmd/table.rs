//! Table command - equivalent pay rates across a range of input rates

use crate::calculator::{calculate, Outcome, PayRequest};
use crate::pay::OutputFormat;
use crate::surface::{FileSurface, StdoutSurface};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct TableCommand {
    /// Lowest input rate
    low: f64,

    /// Highest input rate, always included in the table
    high: f64,

    /// Step between input rates
    increment: f64,

    /// What the input rates are: yearly, monthly, weekly or hourly
    #[arg(short, long)]
    pay_type: String,

    /// Flat tax rate as a percentage (e.g. 24.3)
    #[arg(short, long, default_value_t = 0.0)]
    tax_rate: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FormatArg {
    /// Fixed width columns
    #[default]
    Text,
    /// Boxed table
    Table,
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl TableCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let request = PayRequest {
            low: self.low,
            high: self.high,
            increment: self.increment,
            pay_type: self.pay_type.clone(),
            tax_rate: self.tax_rate,
            format: self.format.into(),
        };

        let outcome = match &self.output {
            Some(path) => calculate(&request, &mut FileSurface::new(path))?,
            None => calculate(&request, &mut StdoutSurface)?,
        };

        if let Outcome::Rejected(message) = outcome {
            eprintln!("{}", message);
        }
        Ok(())
    }
}
