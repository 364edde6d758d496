//! Ties range generation, conversion and rendering together

use crate::pay::{convert_all, generate_range, render, OutputFormat, PayType, TaxRate};
use crate::surface::Surface;

/// Parameters for one pay rate table
#[derive(Debug, Clone)]
pub struct PayRequest {
    pub low: f64,
    pub high: f64,
    pub increment: f64,
    /// Unparsed, so an unknown value can be reported rather than rejected by the CLI
    pub pay_type: String,
    pub tax_rate: f64,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered { rows: usize },
    /// The request was not understood; nothing was rendered
    Rejected(String),
}

pub fn invalid_pay_type_message() -> String {
    let names: Vec<_> = PayType::ALL.iter().map(|p| p.name()).collect();
    format!(
        "PAY-TYPE must be one of the four recognized values: {}",
        names.join(", ")
    )
}

/// Render the table for `request` and hand it to `surface`.
///
/// An unrecognised pay type is not an error: it yields `Outcome::Rejected`
/// with a message for the user. Invalid numeric input is an error.
pub fn calculate<S: Surface>(request: &PayRequest, surface: &mut S) -> anyhow::Result<Outcome> {
    let Some(pay_type) = PayType::from_str(&request.pay_type) else {
        log::debug!("Unrecognised pay type {:?}", request.pay_type);
        return Ok(Outcome::Rejected(invalid_pay_type_message()));
    };

    let tax_rate = TaxRate::new(request.tax_rate)?;
    let values = generate_range(request.low, request.high, request.increment)?;
    let rates = convert_all(&values, pay_type);

    log::info!(
        "{} {} rates, take home ratio {}",
        rates.len(),
        pay_type.name(),
        tax_rate.take_home_ratio()
    );

    let text = render(request.format, &rates, pay_type, tax_rate)?;
    surface.present(&text)?;

    Ok(Outcome::Rendered { rows: rates.len() })
}
