pub const HOURS_PER_WEEK: f64 = 40.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Which figure an input rate represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayType {
    Yearly,
    Monthly,
    Weekly,
    Hourly,
}

impl PayType {
    pub const ALL: [PayType; 4] = [
        PayType::Yearly,
        PayType::Monthly,
        PayType::Weekly,
        PayType::Hourly,
    ];

    pub fn from_str(s: &str) -> Option<PayType> {
        match s.trim().to_lowercase().as_str() {
            "yearly" => Some(PayType::Yearly),
            "monthly" => Some(PayType::Monthly),
            "weekly" => Some(PayType::Weekly),
            "hourly" => Some(PayType::Hourly),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PayType::Yearly => "yearly",
            PayType::Monthly => "monthly",
            PayType::Weekly => "weekly",
            PayType::Hourly => "hourly",
        }
    }

    /// Convert a rate of this type into the full set of equivalent rates.
    pub fn convert(&self, value: f64) -> PayRateSet {
        match self {
            PayType::Yearly => PayRateSet::from_yearly(value),
            PayType::Monthly => PayRateSet::from_monthly(value),
            PayType::Weekly => PayRateSet::from_weekly(value),
            PayType::Hourly => PayRateSet::from_hourly(value),
        }
    }
}

/// A single level of pay expressed as each of the four rates.
///
/// Each constructor derives the other figures in a fixed order. Floating point
/// results can differ in the last place depending on that order, so the
/// constructors are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRateSet {
    pub yearly: f64,
    pub monthly: f64,
    pub weekly: f64,
    pub hourly: f64,
}

impl PayRateSet {
    pub fn from_yearly(yearly: f64) -> Self {
        let monthly = yearly / MONTHS_PER_YEAR;
        let weekly = yearly / WEEKS_PER_YEAR;
        let hourly = weekly / HOURS_PER_WEEK;
        PayRateSet {
            yearly,
            monthly,
            weekly,
            hourly,
        }
    }

    pub fn from_monthly(monthly: f64) -> Self {
        let yearly = monthly * MONTHS_PER_YEAR;
        let weekly = yearly / WEEKS_PER_YEAR;
        let hourly = weekly / HOURS_PER_WEEK;
        PayRateSet {
            yearly,
            monthly,
            weekly,
            hourly,
        }
    }

    pub fn from_weekly(weekly: f64) -> Self {
        let yearly = weekly * WEEKS_PER_YEAR;
        let monthly = yearly / MONTHS_PER_YEAR;
        let hourly = weekly / HOURS_PER_WEEK;
        PayRateSet {
            yearly,
            monthly,
            weekly,
            hourly,
        }
    }

    pub fn from_hourly(hourly: f64) -> Self {
        let weekly = hourly * HOURS_PER_WEEK;
        let yearly = weekly * WEEKS_PER_YEAR;
        let monthly = yearly / MONTHS_PER_YEAR;
        PayRateSet {
            yearly,
            monthly,
            weekly,
            hourly,
        }
    }
}

/// Convert every input rate of type `pay_type`.
pub fn convert_all(values: &[f64], pay_type: PayType) -> Vec<PayRateSet> {
    log::debug!("Converting {} {} rates", values.len(), pay_type.name());
    values.iter().map(|v| pay_type.convert(*v)).collect()
}
