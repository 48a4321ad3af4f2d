//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use result_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`](crate::chain)
//! - **Types**: [`RailResult`], [`MessageVec`]
//! - **Traits**: [`OptionRailExt`], [`ResultRailExt`], [`IteratorRailExt`]
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude::*;
//!
//! fn lookup(table: &[(&'static str, u16)], key: &str) -> RailResult<u16, String> {
//!     table
//!         .iter()
//!         .find(|(k, _)| *k == key)
//!         .map(|(_, v)| *v)
//!         .to_rail_with(|| format!("no entry for '{}'", key))
//! }
//!
//! assert!(lookup(&[("port", 8080)], "port").is_success());
//! assert!(lookup(&[("port", 8080)], "host").is_failure());
//! ```

// Macros
pub use crate::chain;

// Core types
pub use crate::rail::{MessageVec, RailResult};

// Traits
pub use crate::traits::{IteratorRailExt, OptionRailExt, ResultRailExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::RailTraceExt;
