//! Parsing of the comma-separated `ids` parameter used by bulk deletes.

use crate::errors::ServiceError;

pub const BLANK_IDS: &str = "ids must not be blank";
pub const NON_NUMERIC_IDS: &str = "ids must be a number";

/// Split `raw` on commas into ids. Tokens are trimmed and trailing empty
/// tokens dropped (`"1,2,"` is `[1, 2]`); the whole list is rejected when it
/// is blank or when any remaining token is not an integer.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, ServiceError> {
    if raw.trim().is_empty() {
        return Err(ServiceError::Validation(BLANK_IDS.into()));
    }
    let mut tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    if tokens.is_empty() {
        return Err(ServiceError::Validation(BLANK_IDS.into()));
    }
    tokens
        .into_iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ServiceError::Validation(NON_NUMERIC_IDS.into()))
        })
        .collect()
}
