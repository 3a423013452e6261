use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,

    #[error("invalid amount: negative")]
    Negative,

    #[error("amount contains more than one dot")]
    TooManyDots,

    #[error("not a number: {0}")]
    NotANumber(String),

    #[error("amount too large: {0}")]
    Overflow(String),
}

/// An amount left the range of `i64`.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("amount overflowed")]
pub struct Overflow;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger amounts overflowed on day {day}")]
    Overflow { day: u32 },

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
