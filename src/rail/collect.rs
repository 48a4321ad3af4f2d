//! Accumulating aggregation of many results into one.
//!
//! Collecting never short-circuits: every element is inspected, so a
//! partly-failing batch reports the messages of *all* failing elements, in
//! input order. Successes among a failing batch contribute nothing to the
//! failure.

use crate::alloc_type::Vec;
use crate::rail::{MessageVec, RailResult};

fn gather<S, M, I>(results: I) -> Result<(Vec<S>, MessageVec<M>), MessageVec<M>>
where
    I: IntoIterator<Item = RailResult<S, M>>,
{
    let mut values = Vec::new();
    let mut messages = MessageVec::new();
    let mut failed = false;
    for result in results {
        match result {
            RailResult::Success(value, more) => {
                if !failed {
                    values.push(value);
                    messages.extend(more);
                }
            }
            RailResult::Failure(more) => {
                if !failed {
                    // First failure: accumulated success messages are discarded.
                    failed = true;
                    values.clear();
                    messages.clear();
                }
                messages.extend(more);
            }
        }
    }
    if failed {
        Err(messages)
    } else {
        Ok((values, messages))
    }
}

/// Collects an iterator of results into a single result over a collection.
///
/// All elements succeeding yields `Success` with the payloads (in input
/// order) and every success message (in input order). Any element failing
/// yields `Failure` carrying the concatenated messages of every failing
/// element. An empty iterator yields an empty success with no messages.
///
/// # Examples
///
/// ```
/// use result_rail::RailResult;
///
/// let all: RailResult<Vec<i32>, &str> = vec![
///     RailResult::succeed(1),
///     RailResult::succeed(2),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(all.value(), Some(&vec![1, 2]));
///
/// let some: RailResult<Vec<i32>, &str> = vec![
///     RailResult::succeed(1),
///     RailResult::fail_with("bad"),
///     RailResult::fail_with("worse"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(some.failed_with().as_slice(), &["bad", "worse"]);
/// ```
impl<S, M, C> FromIterator<RailResult<S, M>> for RailResult<C, M>
where
    C: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = RailResult<S, M>>>(iter: I) -> Self {
        match gather(iter) {
            Ok((values, messages)) => RailResult::Success(values.into_iter().collect(), messages),
            Err(messages) => RailResult::Failure(messages),
        }
    }
}

impl<S, M> RailResult<S, M> {
    /// Collects many already-evaluated results into one, accumulating every
    /// failure.
    ///
    /// Direct form of the `FromIterator` implementation, returning the
    /// payloads in a `Vec`. A batch of N independent checks collected this
    /// way reports up to N failure messages at once; the same checks chained
    /// with [`and_then`](RailResult::and_then) report only the first.
    ///
    /// # Arguments
    ///
    /// * `results` - The results to merge, in order
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let merged = RailResult::collect([
    ///     RailResult::<i32, &str>::succeed(1),
    ///     RailResult::succeed(2),
    /// ]);
    /// assert_eq!(merged.value(), Some(&vec![1, 2]));
    /// ```
    #[inline]
    pub fn collect<I>(results: I) -> RailResult<Vec<S>, M>
    where
        I: IntoIterator<Item = RailResult<S, M>>,
    {
        results.into_iter().collect()
    }
}
