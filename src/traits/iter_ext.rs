//! Extension trait for collecting iterators of results.

use crate::alloc_type::Vec;
use crate::rail::RailResult;

/// Adds accumulating collection to iterators of [`RailResult`].
///
/// Sugar over the `FromIterator` implementation for callers that do not
/// want to spell out the target type.
///
/// # Examples
///
/// ```
/// use result_rail::traits::IteratorRailExt;
/// use result_rail::RailResult;
///
/// let merged = vec![
///     RailResult::<i32, &str>::succeed(1),
///     RailResult::fail_with("bad"),
///     RailResult::fail_with("worse"),
/// ]
/// .into_iter()
/// .collect_rail();
///
/// assert_eq!(merged.failed_with().as_slice(), &["bad", "worse"]);
/// ```
pub trait IteratorRailExt<S, M>: Iterator<Item = RailResult<S, M>> + Sized {
    /// Collects every element, accumulating the messages of all failures.
    fn collect_rail(self) -> RailResult<Vec<S>, M> {
        self.collect()
    }
}

impl<S, M, I> IteratorRailExt<S, M> for I where I: Iterator<Item = RailResult<S, M>> {}
