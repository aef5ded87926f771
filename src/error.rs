use thiserror::Error;

/// Errors produced by the billing core.
///
/// Every variant is a caller-side configuration or input problem; nothing in
/// this crate is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("Invalid billing configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Validation failed: {0}")]
    UnprocessableInput(String),
}

pub type BillingResult<T> = Result<T, BillingError>;
