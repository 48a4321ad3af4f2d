//! Tracing integration for result-rail.
//!
//! This module provides utilities for surfacing accumulated messages to the
//! `tracing` ecosystem without disturbing the value flowing down the rails.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::rail::RailResult;

/// Extension trait that emits accumulated messages as tracing events.
///
/// Success-track messages are emitted at `debug` level, failure-track
/// messages at `warn` level; the result itself passes through unchanged, so
/// `traced` can be dropped into the middle of a chain.
///
/// # Example
///
/// ```rust,ignore
/// use result_rail::tracing_ext::RailTraceExt;
///
/// let cost = check_age(&person)
///     .and_then(|p| check_sobriety(p))
///     .traced("door_policy")
///     .map(price_for);
/// ```
pub trait RailTraceExt {
    /// Emits one event per attached message, tagged with `operation`.
    fn traced(self, operation: &str) -> Self;
}

impl<S, M: Display> RailTraceExt for RailResult<S, M> {
    fn traced(self, operation: &str) -> Self {
        match &self {
            RailResult::Success(_, messages) => {
                for message in messages {
                    tracing::debug!(operation, message = %message, "success-track message");
                }
            }
            RailResult::Failure(messages) => {
                for message in messages {
                    tracing::warn!(operation, message = %message, "failure-track message");
                }
            }
        }
        self
    }
}
