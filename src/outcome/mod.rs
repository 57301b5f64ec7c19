//! Outcome type - the result of a fallible computation.
//!
//! This module provides the `Outcome<T, E>` type, which is either an
//! `Ok(T)` carrying a success value or an `Err(E)` carrying an error payload.
//! The combinators are split by role:
//!
//! - transformers (`map`, `fmap`, `bimap`, `alter`) change a payload
//! - composers (`bind`, `bibind`, `and_then`, `or_else`, `join`) chain fallible steps
//! - combiners (`and`, `or`) merge two outcomes
//! - extractors (`unwrap`, `unwrap_or`, `expect`, `map_or`, ...) leave the wrapper
//!
//! Every combinator consumes its receiver and builds a new `Outcome`; there is
//! no API that mutates an existing value.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//!
//! let success: Outcome<i32, String> = Outcome::Ok(2);
//! let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
//!
//! assert_eq!(success.clone().map(|x| x + 10), Outcome::Ok(12));
//! assert_eq!(failure.clone().map(|x| x + 10), Outcome::Err("boom".to_string()));
//!
//! // Recover from the failure with a function of the error
//! assert_eq!(failure.unwrap_or_do(|error| error.len() as i32), 4);
//! ```

mod chain;
mod combine;
mod error;
mod extract;
mod transform;

pub use error::{UnwrapError, Variant};

use std::fmt;
use std::hash::Hash;

/// The outcome of a fallible computation.
///
/// `Outcome<T, E>` is exactly one of `Ok(T)` or `Err(E)`. `T` and `E` are
/// independent; nothing requires one to be convertible into the other.
///
/// Two outcomes are equal when they are the same variant and their payloads
/// are equal.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error payload
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Ok(42);
/// assert!(success.is_ok());
///
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Ok(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// The success variant, holding the computed value.
    Ok(T),
    /// The failure variant, holding the error payload.
    Err(E),
}

/// Builds a successful outcome.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, ok};
///
/// let value: Outcome<i32, String> = ok(7);
/// assert_eq!(value, Outcome::Ok(7));
/// ```
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Builds a failed outcome.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, err};
///
/// let value: Outcome<i32, &str> = err("missing");
/// assert_eq!(value, Outcome::Err("missing"));
/// ```
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(2);
    /// assert!(success.is_ok());
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert!(!failure.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert!(failure.is_err());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns which variant this outcome is.
    #[inline]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Ok(_) => Variant::Ok,
            Self::Err(_) => Variant::Err,
        }
    }

    // =========================================================================
    // Reference and Option Conversions
    // =========================================================================

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok("hello".to_string());
    /// assert_eq!(success.as_ref().map(|s| s.len()), Outcome::Ok(5));
    /// assert!(success.is_ok()); // still available
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts the outcome into an `Option<T>`, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(2);
    /// assert_eq!(success.ok(), Some(2));
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts the outcome into an `Option<E>`, discarding any success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(failure.err(), Some("boom"));
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts the outcome into a standard library `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when this is an `Err` outcome.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome`, keeping the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let parsed: Outcome<i32, _> = "42".parse::<i32>().into();
    /// assert_eq!(parsed.ok(), Some(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`, keeping the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// let result: Result<i32, String> = failure.into();
    /// assert_eq!(result, Err("boom".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone, Eq, Hash);
static_assertions::assert_impl_all!(Outcome<i32, u8>: Copy);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, String>: Send, Sync);
