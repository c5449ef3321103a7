pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{aggregator::total_price, report::TallyReport};
pub use crate::domain::model::Item;
pub use crate::domain::ports::{ReportSink, StdoutSink};
pub use crate::utils::error::{PriceError, Result};
