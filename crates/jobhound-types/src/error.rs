use thiserror::Error;

use crate::filter::MIN_SALARY_FLOOR;

/// Errors from filter mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("minimum salary {given} is below the floor of {floor}")]
    SalaryBelowFloor { given: u32, floor: u32 },
}

/// Outcome of parsing a free-text minimum-salary message.
///
/// Both variants are answered by the same re-prompt; they are distinguished
/// so tests (and log lines) can tell a garbage message from a lowball number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SalaryInputError {
    #[error("no digits found in input")]
    NotANumber,

    #[error("{0} is below the minimum of {}", MIN_SALARY_FLOOR)]
    BelowFloor(u32),
}

/// Errors from the external job-search and area-directory APIs.
#[derive(Debug, Error)]
pub enum SearchApiError {
    /// Network failure, timeout, or non-success HTTP status.
    #[error("request to job-search API failed: {0}")]
    Transport(String),

    /// The API answered but the body could not be decoded.
    #[error("malformed job-search API response: {0}")]
    Payload(String),
}
