//! Conversion helpers between `Option`, `Result`, and [`RailResult`].
//!
//! These adapters make it straightforward to incrementally adopt
//! `result-rail` at the edges of a codebase: wrap an optional or a plain
//! result into a two-track value on the way in, and flatten back out when
//! handing data to APIs that expect core types.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::*;
//! use result_rail::RailResult;
//!
//! let present = option_to_rail(Some(42), "missing");
//! assert!(present.is_success());
//!
//! let absent = option_to_rail(None::<i32>, "missing");
//! assert_eq!(absent.failed_with().as_slice(), &["missing"]);
//! ```

use crate::rail::{MessageVec, RailResult};

/// Converts an optional into a result, failing with the given message when
/// absent.
///
/// # Arguments
///
/// * `opt` - The optional value
/// * `message` - The failure message used when `opt` is `None`
///
/// # Returns
///
/// * `Success(value, [])` if `opt` carries a value
/// * `Failure([message])` otherwise
///
/// # Examples
///
/// ```
/// use result_rail::convert::option_to_rail;
///
/// let r = option_to_rail(Some(42), "error");
/// assert_eq!(r.succeeded_with(), 42);
///
/// let r = option_to_rail(None::<i32>, "error");
/// assert_eq!(r.failed_with().as_slice(), &["error"]);
/// ```
#[inline]
pub fn option_to_rail<S, M>(opt: Option<S>, message: M) -> RailResult<S, M> {
    match opt {
        Some(value) => RailResult::succeed(value),
        None => RailResult::fail_with(message),
    }
}

/// Converts an optional into a result, building the absence message lazily.
///
/// The closure only runs when `opt` is `None`, so nothing is formatted on
/// the success path.
///
/// # Arguments
///
/// * `opt` - The optional value
/// * `message` - Produces the failure message on absence
///
/// # Examples
///
/// ```
/// use result_rail::convert::option_to_rail_with;
///
/// let id = 7;
/// let r = option_to_rail_with(None::<i32>, || format!("user {} not found", id));
/// assert!(r.is_failure());
/// ```
#[inline]
pub fn option_to_rail_with<S, M, F>(opt: Option<S>, message: F) -> RailResult<S, M>
where
    F: FnOnce() -> M,
{
    match opt {
        Some(value) => RailResult::succeed(value),
        None => RailResult::fail_with(message()),
    }
}

/// Converts a plain `Result` into a two-track result.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Success(value, [])` if `Ok`
/// * `Failure([error])` if `Err`
///
/// # Examples
///
/// ```
/// use result_rail::convert::result_to_rail;
///
/// let r = result_to_rail(Ok::<_, &str>(42));
/// assert!(r.is_success());
///
/// let r = result_to_rail(Err::<i32, _>("boom"));
/// assert!(r.is_failure());
/// ```
#[inline]
pub fn result_to_rail<S, M>(result: Result<S, M>) -> RailResult<S, M> {
    match result {
        Ok(value) => RailResult::succeed(value),
        Err(error) => RailResult::fail_with(error),
    }
}

/// Flattens a two-track result into a plain `Result`.
///
/// Success-track messages have no home in a plain `Result` and are dropped
/// on the `Ok` path; failure messages are kept in full.
///
/// # Arguments
///
/// * `rail` - The result to flatten
///
/// # Examples
///
/// ```
/// use result_rail::convert::rail_to_result;
/// use result_rail::RailResult;
///
/// let r = RailResult::<i32, &str>::succeed_with(42, "warn");
/// assert_eq!(rail_to_result(r), Ok(42));
///
/// let r = RailResult::<i32, &str>::fail_with_all(["a", "b"]);
/// assert_eq!(rail_to_result(r).unwrap_err().len(), 2);
/// ```
#[inline]
pub fn rail_to_result<S, M>(rail: RailResult<S, M>) -> Result<S, MessageVec<M>> {
    match rail {
        RailResult::Success(value, _) => Ok(value),
        RailResult::Failure(messages) => Err(messages),
    }
}

/// Extracts the payload of a two-track result, discarding all messages.
///
/// # Examples
///
/// ```
/// use result_rail::convert::rail_to_option;
/// use result_rail::RailResult;
///
/// assert_eq!(rail_to_option(RailResult::<i32, &str>::succeed(42)), Some(42));
/// assert_eq!(rail_to_option(RailResult::<i32, &str>::fail_with("no")), None);
/// ```
#[inline]
pub fn rail_to_option<S, M>(rail: RailResult<S, M>) -> Option<S> {
    rail.into_value()
}
