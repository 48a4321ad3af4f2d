//! The two-track result type and its combinator algebra.
//!
//! This module provides [`RailResult`], a success-or-failure value that
//! accumulates diagnostic messages on both tracks. Chains built with
//! [`RailResult::and_then`] fail fast; the same checks combined with
//! [`RailResult::join`] or collected via [`RailResult::collect`] accumulate
//! every failure instead. Which composition operator the caller picks is the
//! whole choice — the type is the same on both sides.
//!
//! # Key Components
//!
//! - [`RailResult`] - Core type: payload-with-messages or messages-only
//! - [`MessageVec`] - SmallVec-backed storage for accumulated messages
//! - `FromIterator` support for collecting many results into one
//!
//! # Examples
//!
//! ```
//! use result_rail::RailResult;
//!
//! let fail_fast = RailResult::<i32, &str>::fail_with("first")
//!     .and_then(|v| RailResult::succeed(v + 1));
//! assert_eq!(fail_fast.failed_with().as_slice(), &["first"]);
//!
//! let accumulated: RailResult<Vec<i32>, &str> = [
//!     RailResult::fail_with("first"),
//!     RailResult::fail_with("second"),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(accumulated.failed_with().len(), 2);
//! ```
use smallvec::SmallVec;

pub mod collect;
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;

/// SmallVec-backed collection used for accumulating messages.
///
/// Uses inline storage for up to 2 elements, so the common one-warning or
/// two-error case stays off the heap.
pub type MessageVec<M> = SmallVec<[M; 2]>;
