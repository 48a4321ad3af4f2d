//! Extension traits for pulling core types onto the rails.
//!
//! These traits put the [`convert`](crate::convert) adapters on the types
//! they convert from, so call sites read left to right:
//!
//! ```
//! use result_rail::traits::OptionRailExt;
//!
//! let r = Some(42).to_rail("missing");
//! assert!(r.is_success());
//! ```

pub mod iter_ext;
pub mod option_ext;
pub mod result_ext;

pub use iter_ext::*;
pub use option_ext::*;
pub use result_ext::*;
