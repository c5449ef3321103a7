use crate::core::aggregator::total_price;
use crate::core::{Item, ReportSink, Result};

/// Runs the aggregation over a sequence of items and writes the formatted
/// total to an injected sink.
pub struct TallyReport<S: ReportSink> {
    sink: S,
}

impl<S: ReportSink> TallyReport<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Computes the total and writes exactly one line to the sink:
    /// `Total price: <sum>\n`. Returns the total for the caller.
    pub fn run(&mut self, items: &[Item]) -> Result<i64> {
        tracing::debug!("Aggregating {} items", items.len());

        let total = total_price(items)?;
        self.sink.write_line(&format!("Total price: {}\n", total))?;

        Ok(total)
    }

    /// Hands the sink back, for callers that need to inspect what was written.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
