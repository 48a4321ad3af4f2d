//! Extension trait for converting `Option` values onto the rails.

use crate::rail::RailResult;

/// Adds rail conversions to `Option`.
///
/// The lazy variant [`to_rail_with`](OptionRailExt::to_rail_with) defers
/// building the absence message until it is actually needed, so nothing is
/// allocated on the success path.
///
/// # Examples
///
/// ```
/// use result_rail::traits::OptionRailExt;
///
/// let r = Some(42).to_rail("error");
/// assert_eq!(r.succeeded_with(), 42);
///
/// let r = None::<i32>.to_rail("error");
/// assert_eq!(r.failed_with().as_slice(), &["error"]);
/// ```
pub trait OptionRailExt<S> {
    /// Converts to a result, failing with `message` when absent.
    ///
    /// # Arguments
    ///
    /// * `message` - The failure message used when the optional is empty
    fn to_rail<M>(self, message: M) -> RailResult<S, M>;

    /// Converts to a result, building the absence message lazily.
    ///
    /// # Arguments
    ///
    /// * `f` - Produces the failure message; only called on `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::OptionRailExt;
    ///
    /// let key = "port";
    /// let r = None::<u16>.to_rail_with(|| format!("config key '{}' absent", key));
    /// assert!(r.is_failure());
    /// ```
    fn to_rail_with<M, F>(self, f: F) -> RailResult<S, M>
    where
        F: FnOnce() -> M;
}

impl<S> OptionRailExt<S> for Option<S> {
    #[inline]
    fn to_rail<M>(self, message: M) -> RailResult<S, M> {
        crate::convert::option_to_rail(self, message)
    }

    #[inline]
    fn to_rail_with<M, F>(self, f: F) -> RailResult<S, M>
    where
        F: FnOnce() -> M,
    {
        crate::convert::option_to_rail_with(self, f)
    }
}
