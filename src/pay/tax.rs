use super::error::PayError;

/// Flat tax rate as a percentage, e.g. `24.3` is 24.3%
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TaxRate(f64);

impl TaxRate {
    pub fn new(percent: f64) -> Result<Self, PayError> {
        if percent.is_finite() && (0.0..=100.0).contains(&percent) {
            Ok(TaxRate(percent))
        } else {
            Err(PayError::InvalidTaxRate(percent))
        }
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Fraction of gross pay kept after tax
    pub fn take_home_ratio(&self) -> f64 {
        (100.0 - self.0) / 100.0
    }

    pub fn after_tax(&self, amount: f64) -> f64 {
        amount * self.take_home_ratio()
    }
}
