//! Extension trait for converting plain `Result` values onto the rails.

use crate::rail::RailResult;

/// Adds rail conversion to `Result`.
///
/// # Examples
///
/// ```
/// use result_rail::traits::ResultRailExt;
///
/// let r = Ok::<_, &str>(42).into_rail();
/// assert!(r.is_success());
///
/// let r = Err::<i32, _>("boom").into_rail();
/// assert_eq!(r.failed_with().as_slice(), &["boom"]);
/// ```
pub trait ResultRailExt<S, M> {
    /// Wraps `Ok` as a messageless success and `Err` as a single-message
    /// failure.
    fn into_rail(self) -> RailResult<S, M>;
}

impl<S, M> ResultRailExt<S, M> for Result<S, M> {
    #[inline]
    fn into_rail(self) -> RailResult<S, M> {
        crate::convert::result_to_rail(self)
    }
}
