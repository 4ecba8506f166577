use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("template must contain {{{slot}}} exactly once (found {count})")]
    InvalidTemplate { slot: &'static str, count: usize },
    #[error("invalid item column range: {start}..={end}")]
    InvalidItemRange { start: usize, end: usize },
    #[error("invalid mobile number: {0}")]
    InvalidPhone(String),
    #[error("no order for phone {0}")]
    UnknownPhone(String),
}
