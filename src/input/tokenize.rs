//! Splitting typed lines into key presses.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::Key;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Unknown key: {0}")]
    Unknown(String),
}

lazy_static! {
    /// Matches one key label at the start of the input.
    /// Word labels come first so "cos" never splits into "c" + "os".
    static ref KEY_TOKEN: Regex = Regex::new(
        r"^(?i:sqrt|sin|cos|tan|log|ln|neg|ac|ce|bs|[0-9.+\-−*/×÷^%=√±⌫])"
    ).unwrap();
}

/// Split a typed line into key presses.
///
/// Whitespace is ignored, so `"12+3="` and `"1 2 + 3 ="` are the same input.
/// Text that is not a key label fails with the offending fragment.
pub fn tokenize(line: &str) -> Result<Vec<Key>, TokenError> {
    let mut keys = Vec::new();
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        let Some(found) = KEY_TOKEN.find(rest) else {
            let fragment = rest.split_whitespace().next().unwrap_or(rest);
            return Err(TokenError::Unknown(fragment.to_string()));
        };

        keys.push(found.as_str().parse()?);
        rest = rest[found.end()..].trim_start();
    }

    Ok(keys)
}
