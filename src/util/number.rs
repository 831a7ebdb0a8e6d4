//! A set of utilities for working with the money values that flow through
//! packages, quotes, and cash-on-delivery totals.

/// Create a number.
///
/// This is mostly a wrapper around difference number types that makes it
/// easier to swap out money types crate-wide without having to change each
/// instance by hand, but can also be used by callers of the core to create
/// prices more seamlessly.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
