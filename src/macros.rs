//! Sequential-composition sugar over the fail-fast combinators.
//!
//! [`macro@crate::chain`] is a declarative projection of comprehension-style
//! syntax onto [`and_then`](crate::RailResult::and_then) and
//! [`succeed`](crate::RailResult::succeed). It introduces no semantics of its
//! own: a chain written with the macro and the equivalent nested method calls
//! produce identical results, message ordering included.

/// Chains fallible steps left to right, short-circuiting on the first
/// failure.
///
/// Each `name <- expr;` line binds the success payload of `expr` for the
/// following lines; `name = expr;` binds a plain value without touching the
/// tracks; the final `=> expr` wraps the chain's outcome as a success. The
/// expansion is nested [`and_then`](crate::RailResult::and_then) calls, so
/// warnings accumulate across steps and the first failing step ends the
/// chain with all messages gathered so far.
///
/// # Syntax
///
/// - `name <- expr;` - Runs a step; later lines see its payload
/// - `name = expr;` - Pure binding, no step involved
/// - `=> expr` - Final payload of the whole chain
///
/// # Examples
///
/// ```
/// use result_rail::{chain, RailResult};
///
/// fn parse(s: &str) -> RailResult<i32, String> {
///     match s.parse() {
///         Ok(n) => RailResult::succeed(n),
///         Err(_) => RailResult::fail_with(format!("not a number: {}", s)),
///     }
/// }
///
/// let total = chain! {
///     a <- parse("1");
///     b <- parse("2");
///     sum = a + b;
///     => sum * 10
/// };
/// assert_eq!(total.succeeded_with(), 30);
///
/// let broken = chain! {
///     a <- parse("1");
///     b <- parse("oops");
///     => a + b
/// };
/// assert_eq!(broken.failed_with().as_slice(), &["not a number: oops"]);
/// ```
#[macro_export]
macro_rules! chain {
    (=> $finish:expr) => {
        $crate::RailResult::succeed($finish)
    };

    ($binding:ident = $value:expr; $($rest:tt)+) => {{
        let $binding = $value;
        $crate::chain!($($rest)+)
    }};

    ($binding:ident <- $step:expr; $($rest:tt)+) => {
        $step.and_then(move |$binding| $crate::chain!($($rest)+))
    };
}
