pub mod error;
pub mod range;
pub mod rates;
pub mod render;
pub mod tax;

pub use range::generate_range;
pub use rates::{convert_all, PayType};
pub use render::{render, OutputFormat, PayRow};
pub use tax::TaxRate;
