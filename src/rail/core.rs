use crate::rail::MessageVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Two-track result that accumulates diagnostic messages on both tracks.
///
/// `RailResult<S, M>` represents a computation that either succeeded with a
/// payload of type `S` (plus zero or more non-fatal messages collected along
/// the way) or failed with one or more fatal messages of type `M`. The same
/// type supports both composition styles of railway-oriented programming:
/// fail-fast chaining via [`and_then`](RailResult::and_then) and
/// error-accumulating validation via [`join`](RailResult::join) and
/// [`collect`](RailResult::collect).
///
/// Every combinator consumes the result and produces a new one; a
/// `RailResult` is never mutated in place.
///
/// # Serde Support
///
/// `RailResult` implements `Serialize` and `Deserialize` when `S` and `M` do
/// (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `S` - The success payload type
/// * `M` - The message type (warnings on the success track, errors on the
///   failure track)
///
/// # Variants
///
/// * `Success(S, MessageVec<M>)` - Payload plus accumulated messages
/// * `Failure(MessageVec<M>)` - One or more failure messages
///
/// # Examples
///
/// ```
/// use result_rail::RailResult;
///
/// let ok = RailResult::<i32, &str>::succeed(42);
/// assert!(ok.is_success());
///
/// let bad = RailResult::<i32, &str>::fail_with("out of range");
/// assert!(bad.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum RailResult<S, M> {
    Success(S, MessageVec<M>),
    Failure(MessageVec<M>),
}

impl<S, M> RailResult<S, M> {
    /// Creates a success carrying no messages.
    ///
    /// # Arguments
    ///
    /// * `value` - The success payload to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::succeed(42);
    /// assert_eq!(r.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn succeed(value: S) -> Self {
        Self::Success(value, MessageVec::new())
    }

    /// Creates a success annotated with a single message.
    ///
    /// # Arguments
    ///
    /// * `value` - The success payload to wrap
    /// * `message` - A non-fatal annotation to attach
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::succeed_with(42, "computed from cache");
    /// assert_eq!(r.messages(), &["computed from cache"]);
    /// ```
    #[inline]
    pub fn succeed_with(value: S, message: M) -> Self {
        Self::Success(value, smallvec![message])
    }

    /// Creates a success annotated with an iterator of messages.
    ///
    /// An empty iterator is fine; a success is allowed to carry no messages.
    ///
    /// # Arguments
    ///
    /// * `value` - The success payload to wrap
    /// * `messages` - Non-fatal annotations to attach, in order
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::succeed_with_all(42, ["step one", "step two"]);
    /// assert_eq!(r.messages().len(), 2);
    /// ```
    #[inline]
    pub fn succeed_with_all<I>(value: S, messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
    {
        Self::Success(value, messages.into_iter().collect())
    }

    /// Creates a failure from a single message.
    ///
    /// # Arguments
    ///
    /// * `message` - The failure message
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::fail_with("missing field");
    /// assert!(r.is_failure());
    /// ```
    #[inline]
    pub fn fail_with(message: M) -> Self {
        Self::Failure(smallvec![message])
    }

    /// Creates a failure from an iterator of messages.
    ///
    /// # Arguments
    ///
    /// * `messages` - The failure messages, in order
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields no messages. A failure with nothing to
    /// say is a programming error, not a representable state.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::fail_with_all(["missing", "invalid"]);
    /// assert_eq!(r.failed_with().len(), 2);
    /// ```
    #[inline]
    pub fn fail_with_all<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
    {
        let messages: MessageVec<M> = messages.into_iter().collect();
        assert!(
            !messages.is_empty(),
            "RailResult::fail_with_all requires at least one message"
        );
        Self::Failure(messages)
    }

    /// Returns `true` if the result is on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::succeed(42);
    /// assert!(r.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(..))
    }

    /// Returns `true` if the result is on the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::fail_with("nope");
    /// assert!(r.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the payload, if on the success track.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&S> {
        match self {
            Self::Success(value, _) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the messages attached to whichever track the result is on.
    ///
    /// A success may carry zero or more warnings; a failure always carries at
    /// least one error.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::succeed_with(1, "warn");
    /// assert_eq!(r.messages(), &["warn"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn messages(&self) -> &[M] {
        match self {
            Self::Success(_, messages) | Self::Failure(messages) => messages,
        }
    }

    /// Extracts the payload, if on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::succeed(42);
    /// assert_eq!(r.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Success(value, _) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the result and returns the attached messages of either track.
    #[must_use]
    #[inline]
    pub fn into_messages(self) -> MessageVec<M> {
        match self {
            Self::Success(_, messages) | Self::Failure(messages) => messages,
        }
    }

    /// Dispatches exhaustively on the track, consuming the result.
    ///
    /// This is the terminal observation: exactly one of the two closures
    /// runs, receiving the full contents of its variant.
    ///
    /// # Arguments
    ///
    /// * `if_success` - Called with the payload and accumulated messages
    /// * `if_failure` - Called with the failure messages
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::succeed_with(2, "doubled");
    /// let rendered = r.fold(
    ///     |value, msgs| format!("{} ({} notes)", value, msgs.len()),
    ///     |errs| format!("failed with {} errors", errs.len()),
    /// );
    /// assert_eq!(rendered, "2 (1 notes)");
    /// ```
    #[inline]
    pub fn fold<R, FS, FF>(self, if_success: FS, if_failure: FF) -> R
    where
        FS: FnOnce(S, MessageVec<M>) -> R,
        FF: FnOnce(MessageVec<M>) -> R,
    {
        match self {
            Self::Success(value, messages) => if_success(value, messages),
            Self::Failure(messages) => if_failure(messages),
        }
    }

    /// Extracts the success payload, panicking on the failure track.
    ///
    /// Intended for tests and demos where the track is already known; use
    /// [`fold`](RailResult::fold) or pattern matching in production code.
    ///
    /// # Panics
    ///
    /// Panics if the result is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::succeed(42);
    /// assert_eq!(r.succeeded_with(), 42);
    /// ```
    #[must_use]
    #[inline]
    pub fn succeeded_with(self) -> S {
        match self {
            Self::Success(value, _) => value,
            Self::Failure(_) => {
                panic!("called `RailResult::succeeded_with` on a `Failure` value")
            }
        }
    }

    /// Extracts the failure messages, panicking on the success track.
    ///
    /// # Panics
    ///
    /// Panics if the result is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::fail_with("nope");
    /// assert_eq!(r.failed_with().as_slice(), &["nope"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn failed_with(self) -> MessageVec<M> {
        match self {
            Self::Success(..) => {
                panic!("called `RailResult::failed_with` on a `Success` value")
            }
            Self::Failure(messages) => messages,
        }
    }

    /// Maps the success payload, leaving messages and failures untouched.
    ///
    /// A `Failure` passes through unchanged and `f` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the payload from type `S` to `S2`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::succeed_with(21, "halved");
    /// let doubled = r.map(|x| x * 2);
    /// assert_eq!(doubled.value(), Some(&42));
    /// assert_eq!(doubled.messages(), &["halved"]);
    /// ```
    #[inline]
    pub fn map<S2, F>(self, f: F) -> RailResult<S2, M>
    where
        F: FnOnce(S) -> S2,
    {
        match self {
            Self::Success(value, messages) => RailResult::Success(f(value), messages),
            Self::Failure(messages) => RailResult::Failure(messages),
        }
    }

    /// Transforms the failure messages, possibly changing the message type.
    ///
    /// On the failure track the mapper receives the whole message sequence
    /// and its output becomes the new failure. On the success track the
    /// payload is kept and the old-type messages are discarded: they cannot
    /// be represented in `M2` and are deliberately erased, not carried.
    ///
    /// # Arguments
    ///
    /// * `f` - A function mapping the old message sequence to the new one
    ///
    /// # Panics
    ///
    /// Panics if the mapper yields no messages for a failure; a failure must
    /// keep at least one message.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::<i32, &str>::fail_with_all(["err1", "err2"]);
    /// let coded = r.map_failure(|msgs| msgs.into_iter().map(|m| m.len()));
    /// assert_eq!(coded.failed_with().as_slice(), &[4, 4]);
    ///
    /// // Success-track messages are dropped, not transformed.
    /// let r = RailResult::<i32, &str>::succeed_with(42, "warn");
    /// let coded = r.map_failure(|_| [0u32]);
    /// assert!(coded.messages().is_empty());
    /// ```
    #[inline]
    pub fn map_failure<M2, F, I>(self, f: F) -> RailResult<S, M2>
    where
        F: FnOnce(MessageVec<M>) -> I,
        I: IntoIterator<Item = M2>,
    {
        match self {
            Self::Success(value, _) => RailResult::Success(value, MessageVec::new()),
            Self::Failure(messages) => {
                let mapped: MessageVec<M2> = f(messages).into_iter().collect();
                assert!(
                    !mapped.is_empty(),
                    "RailResult::map_failure must produce at least one message"
                );
                RailResult::Failure(mapped)
            }
        }
    }

    /// Chains a further fallible step, short-circuiting on failure.
    ///
    /// On the failure track `f` is never invoked and the messages pass
    /// through unchanged. On the success track, `f` runs on the payload and
    /// the accumulated messages are prepended to whatever the next step
    /// produces; when the next step fails, the prior warnings ride along
    /// into the failure so the error report still includes them.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step's result
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let r = RailResult::succeed_with(1, "m1")
    ///     .and_then(|v| RailResult::succeed_with(v + 1, "m2"));
    /// assert_eq!(r.value(), Some(&2));
    /// assert_eq!(r.messages(), &["m1", "m2"]);
    /// ```
    #[inline]
    pub fn and_then<S2, F>(self, f: F) -> RailResult<S2, M>
    where
        F: FnOnce(S) -> RailResult<S2, M>,
    {
        match self {
            Self::Failure(messages) => RailResult::Failure(messages),
            Self::Success(value, mut messages) => match f(value) {
                RailResult::Success(next, more) => {
                    messages.extend(more);
                    RailResult::Success(next, messages)
                }
                RailResult::Failure(more) => {
                    messages.extend(more);
                    RailResult::Failure(messages)
                }
            },
        }
    }

    /// Combines two independently-evaluated results, accumulating failures.
    ///
    /// Both operands are already-computed values; nothing is short-circuited
    /// across them. Four cases:
    ///
    /// 1. Both successes: `combine` merges the payloads and the message
    ///    sequences concatenate in (self, other) order.
    /// 2. Only `self` failed: its messages, each mapped through
    ///    `on_self_failure`, become the failure. The other side's success
    ///    messages are discarded.
    /// 3. Only `other` failed: symmetric, via `on_other_failure`.
    /// 4. Both failed: both mapped message sequences concatenate in
    ///    (self, other) order — the divergence from
    ///    [`and_then`](RailResult::and_then), where the second failure would
    ///    never have been reached.
    ///
    /// The selectors rewrite messages element-wise within `M`; pass the
    /// identity when no rewrite is wanted. Changing the message type is
    /// [`map_failure`](RailResult::map_failure)'s job — the two-success case
    /// forwards unmapped success messages, which pins the selector output
    /// to `M`.
    ///
    /// # Arguments
    ///
    /// * `other` - The second, independently-computed result
    /// * `on_self_failure` - Per-message rewrite applied to this side's
    ///   failure messages
    /// * `on_other_failure` - Per-message rewrite applied to the other
    ///   side's failure messages
    /// * `combine` - Merges the two payloads when both sides succeeded
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::RailResult;
    ///
    /// let a = RailResult::<i32, &str>::succeed_with(1, "added one");
    /// let b = RailResult::<i32, &str>::succeed_with(2, "added two");
    /// let sum = a.join(b, |m| m, |m| m, |x, y| x + y);
    /// assert_eq!(sum.value(), Some(&3));
    /// assert_eq!(sum.messages(), &["added one", "added two"]);
    ///
    /// let a = RailResult::<i32, &str>::fail_with("too old");
    /// let b = RailResult::<i32, &str>::fail_with("sober up");
    /// let merged = a.join(b, |m| m, |m| m, |x, y| x + y);
    /// assert_eq!(merged.failed_with().as_slice(), &["too old", "sober up"]);
    /// ```
    #[inline]
    pub fn join<S2, S3, F1, F2, C>(
        self,
        other: RailResult<S2, M>,
        on_self_failure: F1,
        on_other_failure: F2,
        combine: C,
    ) -> RailResult<S3, M>
    where
        F1: FnMut(M) -> M,
        F2: FnMut(M) -> M,
        C: FnOnce(S, S2) -> S3,
    {
        match (self, other) {
            (Self::Success(a, mut messages), RailResult::Success(b, more)) => {
                messages.extend(more);
                RailResult::Success(combine(a, b), messages)
            }
            (Self::Failure(messages), RailResult::Success(..)) => {
                RailResult::Failure(messages.into_iter().map(on_self_failure).collect())
            }
            (Self::Success(..), RailResult::Failure(messages)) => {
                RailResult::Failure(messages.into_iter().map(on_other_failure).collect())
            }
            (Self::Failure(messages), RailResult::Failure(more)) => {
                let mut merged: MessageVec<M> =
                    messages.into_iter().map(on_self_failure).collect();
                merged.extend(more.into_iter().map(on_other_failure));
                RailResult::Failure(merged)
            }
        }
    }
}
