//! Rendering of converted pay rates

use super::rates::{PayRateSet, PayType};
use super::tax::TaxRate;
use schemars::JsonSchema;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

pub const CURRENCY_SYMBOL: &str = "$";
pub const SEPARATOR_WIDTH: usize = 74;

/// How the rendered rates are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed width text columns
    #[default]
    Text,
    /// Boxed table
    Table,
    Csv,
    Json,
}

/// One output row: a pay rate set with its after tax figures
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema, Tabled)]
pub struct PayRow {
    /// Yearly pay before tax
    #[tabled(rename = "Yearly")]
    pub yearly: String,
    /// Yearly pay after tax
    #[tabled(rename = "w/tax")]
    pub yearly_after_tax: String,
    /// Monthly pay before tax
    #[tabled(rename = "Monthly")]
    pub monthly: String,
    /// Monthly pay after tax
    #[tabled(rename = "w/tax")]
    pub monthly_after_tax: String,
    /// Weekly pay before tax
    #[tabled(rename = "Weekly")]
    pub weekly: String,
    /// Weekly pay after tax
    #[tabled(rename = "w/tax")]
    pub weekly_after_tax: String,
    /// Hourly pay before tax
    #[tabled(rename = "Hourly")]
    pub hourly: String,
}

impl PayRow {
    pub fn new(rates: &PayRateSet, tax_rate: TaxRate) -> Self {
        PayRow {
            yearly: format!("{:.2}", rates.yearly),
            yearly_after_tax: format!("{:.2}", tax_rate.after_tax(rates.yearly)),
            monthly: format!("{:.2}", rates.monthly),
            monthly_after_tax: format!("{:.2}", tax_rate.after_tax(rates.monthly)),
            weekly: format!("{:.2}", rates.weekly),
            weekly_after_tax: format!("{:.2}", tax_rate.after_tax(rates.weekly)),
            hourly: format!("{:.2}", rates.hourly),
        }
    }
}

pub const CSV_COLUMNS: &[&str] = &[
    "yearly",
    "yearly_after_tax",
    "monthly",
    "monthly_after_tax",
    "weekly",
    "weekly_after_tax",
    "hourly",
];

#[derive(Debug, Serialize)]
struct RatesReport {
    pay_type: String,
    tax_rate: f64,
    take_home_ratio: f64,
    rows: Vec<PayRow>,
}

/// Render `rates` in the requested format as one complete block of text.
pub fn render(
    format: OutputFormat,
    rates: &[PayRateSet],
    pay_type: PayType,
    tax_rate: TaxRate,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_table(rates, tax_rate)),
        OutputFormat::Table => Ok(render_boxed(rates, tax_rate)),
        OutputFormat::Csv => render_csv(rates, tax_rate),
        OutputFormat::Json => render_json(rates, pay_type, tax_rate),
    }
}

/// Fixed width table: header, separator, then one row per rate set.
pub fn render_table(rates: &[PayRateSet], tax_rate: TaxRate) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>11}  {:>11}  {:>9}  {:>9}  {:>8}  {:>8}  {:>6}\n",
        "Yearly", "w/tax", "Monthly", "w/tax", "Weekly", "w/tax", "Hourly"
    ));
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    let c = CURRENCY_SYMBOL;
    for r in rates {
        out.push_str(&format!(
            "{c}{:>10.2}  {c}{:>10.2}  {c}{:>8.2}  {c}{:>8.2}  {c}{:>7.2}  {c}{:>7.2}  {c}{:>5.2}\n",
            r.yearly,
            tax_rate.after_tax(r.yearly),
            r.monthly,
            tax_rate.after_tax(r.monthly),
            r.weekly,
            tax_rate.after_tax(r.weekly),
            r.hourly,
        ));
    }
    out
}

fn rows(rates: &[PayRateSet], tax_rate: TaxRate) -> Vec<PayRow> {
    rates.iter().map(|r| PayRow::new(r, tax_rate)).collect()
}

fn render_boxed(rates: &[PayRateSet], tax_rate: TaxRate) -> String {
    let mut table = Table::new(rows(rates, tax_rate));
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()));
    format!("{}\n", table)
}

fn render_csv(rates: &[PayRateSet], tax_rate: TaxRate) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows(rates, tax_rate) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn render_json(rates: &[PayRateSet], pay_type: PayType, tax_rate: TaxRate) -> anyhow::Result<String> {
    let report = RatesReport {
        pay_type: pay_type.name().to_string(),
        tax_rate: tax_rate.percent(),
        take_home_ratio: tax_rate.take_home_ratio(),
        rows: rows(rates, tax_rate),
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
