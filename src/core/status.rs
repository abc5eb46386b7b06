use crate::utils::error::{FetchError, Result};
use reqwest::StatusCode;

/// Maps the response status to a typed outcome. Any non-2xx status that is not
/// one of the known service responses is treated as a failure.
pub fn check_status(status: StatusCode) -> Result<()> {
    match status.as_u16() {
        401 => Err(FetchError::InvalidCredentials),
        403 => Err(FetchError::TooManyLoginFailures),
        404 => Err(FetchError::ProjectNotFound),
        405 | 406 => Err(FetchError::IncompatibleServer),
        _ if status.is_success() => Ok(()),
        code => Err(FetchError::UnexpectedStatus(code)),
    }
}
