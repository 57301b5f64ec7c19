//! # outcome
//!
//! An immutable two-variant result container and the combinators needed to
//! compose fallible computations without branching on the variant by hand.
//!
//! ## Overview
//!
//! - **Outcome**: `Outcome<T, E>` is either `Ok(T)` or `Err(E)`
//! - **Transformers**: `map`, `fmap`, `bimap`, `alter`
//! - **Composers**: `bind` (and its `>>` alias), `bibind`, `and_then`, `or_else`, `join`
//! - **Combiners**: `and`, `or`
//! - **Extractors**: the `unwrap` family, `expect`, `map_or`, `map_or_do`
//! - **Safe adapter**: `safe` turns a panicking function into one returning `Outcome`
//!
//! ## Feature Flags
//!
//! - `typeclass`: the `Bifunctor` trait and its implementation for `Outcome`
//! - `safe`: the panic-to-`Outcome` adapter
//! - `tracing`: emit `tracing` events when the safe adapter captures a panic
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let parsed: Outcome<i32, String> = Outcome::Ok(2);
//! let result = parsed
//!     .map(|x| x + 10)
//!     .and_then(|x| if x > 0 { Outcome::Ok(x) } else { Outcome::Err("negative".to_string()) });
//! assert_eq!(result, Outcome::Ok(12));
//! assert_eq!(result.unwrap_or(0), 12);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use outcome::prelude::*;
/// ```
pub mod prelude {
    pub use crate::outcome::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "safe")]
    pub use crate::safe::*;
}

pub mod outcome;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "safe")]
pub mod safe;

pub use crate::outcome::{Outcome, UnwrapError, Variant, err, ok};

#[cfg(feature = "safe")]
pub use crate::safe::{Panic, attempt, safe};
