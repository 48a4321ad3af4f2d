//! Two-track results for railway-oriented programming.
//!
//! A [`RailResult<S, M>`] is either a success carrying a payload plus
//! accumulated non-fatal messages, or a failure carrying one or more fatal
//! messages. The same type supports both composition styles: fail-fast
//! chaining with [`RailResult::and_then`], and accumulating validation with
//! [`RailResult::join`] and [`RailResult::collect`]. Picking the combinator
//! picks the semantics; no second type is needed.
//!
//! # Examples
//!
//! ## Fail-Fast Chaining
//!
//! ```
//! use result_rail::{chain, RailResult};
//!
//! fn non_empty(s: &str) -> RailResult<&str, String> {
//!     if s.is_empty() {
//!         RailResult::fail_with("empty input".to_string())
//!     } else {
//!         RailResult::succeed(s)
//!     }
//! }
//!
//! let shouted = chain! {
//!     s <- non_empty("hello");
//!     => s.to_uppercase()
//! };
//! assert_eq!(shouted.succeeded_with(), "HELLO");
//! ```
//!
//! ## Accumulating Validation
//!
//! ```
//! use result_rail::RailResult;
//!
//! let checks: RailResult<Vec<i32>, &str> = vec![
//!     RailResult::succeed(1),
//!     RailResult::fail_with("too small"),
//!     RailResult::fail_with("not even"),
//! ]
//! .into_iter()
//! .collect();
//!
//! // Every failing check reports, not just the first.
//! assert_eq!(checks.failed_with().len(), 2);
//! ```
//!
//! ## Interop at the Edges
//!
//! ```
//! use result_rail::traits::OptionRailExt;
//!
//! let port = Some(8080).to_rail("port not configured");
//! assert_eq!(port.succeeded_with(), 8080);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod alloc_type;

/// Conversion helpers between `Option`, `Result`, and the rail
pub mod convert;
/// Sequential-composition sugar over the combinators
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The two-track result type and its combinator algebra
pub mod rail;
/// Extension traits for `Option`, `Result`, and iterators
pub mod traits;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use rail::{MessageVec, RailResult};
pub use traits::*;
