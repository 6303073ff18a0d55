//! Free-text input validation.
//!
//! All parse failures are values, not panics or exceptions; the engine maps
//! each variant onto the same re-prompt arm for its step.

use jobhound_types::error::SalaryInputError;
use jobhound_types::filter::MIN_SALARY_FLOOR;

/// Minimum length for a profession or city name, after trimming.
const MIN_NAME_LEN: usize = 2;

/// Validate a profession or city name: trimmed, at least two characters.
pub fn validate_name(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (trimmed.chars().count() >= MIN_NAME_LEN).then_some(trimmed)
}

/// Parse a minimum-salary message.
///
/// Users type salaries with spaces and separators ("90 000", "150,000"), so
/// all non-digit characters are stripped before parsing. Values below
/// [`MIN_SALARY_FLOOR`] are rejected.
pub fn parse_min_salary(text: &str) -> Result<u32, SalaryInputError> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let salary: u32 = digits.parse().map_err(|_| SalaryInputError::NotANumber)?;
    if salary < MIN_SALARY_FLOOR {
        return Err(SalaryInputError::BelowFloor(salary));
    }
    Ok(salary)
}
