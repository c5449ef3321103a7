use serde::{Deserialize, Serialize};

/// A labeled price record, the unit of aggregation. Labels carry no meaning
/// for the aggregator and are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub price: i64,
}

impl Item {
    pub fn new(label: impl Into<String>, price: i64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}
