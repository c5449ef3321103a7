pub mod aggregator;
pub mod report;

pub use crate::domain::model::Item;
pub use crate::domain::ports::{ReportSink, StdoutSink};
pub use crate::utils::error::Result;
