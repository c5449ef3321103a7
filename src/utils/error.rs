use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("price total overflowed adding item {label:?} (running total {total})")]
    Overflow { total: i64, label: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PriceError>;
