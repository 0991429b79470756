use crate::domain::model::SquawkCode;
use crate::utils::error::Rejection;

/// Parses `candidate` and rejects reserved codes.
///
/// Checks run in order (length, alphabet, reservation) and stop at the
/// first failure.
pub fn check(candidate: &str) -> Result<SquawkCode, Rejection> {
    let code: SquawkCode = candidate.parse()?;
    match code.emergency() {
        Some(emergency) => Err(Rejection::Reserved(emergency)),
        None => Ok(code),
    }
}

/// Whether `candidate` is an assignable code. Total over all strings.
pub fn is_valid(candidate: &str) -> bool {
    check(candidate).is_ok()
}
