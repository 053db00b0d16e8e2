//! Success/failure result contract used by every validator

use crate::error::{Failure, FailureCode};
use std::future::Future;

/// Result of an operation that may fail with a [`Failure`]
pub type Outcome<T = ()> = Result<T, Failure>;

/// Wrap data into a successful outcome
pub fn success<T>(data: T) -> Outcome<T> {
    Ok(data)
}

/// Build a failed outcome without a code
pub fn failed<T>(message: impl Into<String>) -> Outcome<T> {
    Err(Failure::new(message))
}

/// Build a failed outcome carrying a code
pub fn failed_with_code<T>(message: impl Into<String>, code: impl Into<FailureCode>) -> Outcome<T> {
    Err(Failure::with_code(message, code))
}

/// Apply `formatter` to the data of a successful outcome; failures pass through untouched
pub fn map_success<T, U, F>(outcome: Outcome<T>, formatter: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    match outcome {
        Ok(data) => Ok(formatter(data)),
        Err(failure) => Err(failure),
    }
}

/// Await a pending outcome, then behave like [`map_success`]
pub async fn map_success_async<T, U, Fut, F>(pending: Fut, formatter: F) -> Outcome<U>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    map_success(pending.await, formatter)
}
