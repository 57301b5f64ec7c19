//! Error types for extractor misuse.
//!
//! Calling `unwrap` on an `Err`, `unwrap_err` on an `Ok`, or `expect` on an
//! `Err` is a programmer error. The panicking extractors format an
//! [`UnwrapError`] into their panic message, and the `try_*` extractors
//! return it as a value.

use std::fmt;

/// The two variants of an [`Outcome`](super::Outcome), without payloads.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, Variant};
///
/// let failure: Outcome<i32, &str> = Outcome::Err("boom");
/// assert_eq!(failure.variant(), Variant::Err);
/// assert_eq!(Variant::Err.to_string(), "Err");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// The success variant.
    Ok,
    /// The failure variant.
    Err,
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => formatter.write_str("Ok"),
            Self::Err => formatter.write_str("Err"),
        }
    }
}

/// Represents an extraction that found the wrong variant.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, UnwrapError, Variant};
///
/// let failure: Outcome<i32, &str> = Outcome::Err("boom");
/// let error = failure.try_unwrap().unwrap_err();
/// assert_eq!(error.found(), Variant::Err);
/// assert_eq!(
///     error.to_string(),
///     "called `Outcome::unwrap()` on an `Err` value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError {
    operation: &'static str,
    found: Variant,
    message: Option<String>,
}

impl UnwrapError {
    /// Creates an error for `operation` having been called on the `found` variant.
    pub const fn wrong_variant(operation: &'static str, found: Variant) -> Self {
        Self {
            operation,
            found,
            message: None,
        }
    }

    /// Creates an error carrying a caller-supplied message, as `expect` does.
    pub fn with_message(
        operation: &'static str,
        found: Variant,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            found,
            message: Some(message.into()),
        }
    }

    /// The name of the extractor that failed.
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// The variant the extractor actually found.
    pub const fn found(&self) -> Variant {
        self.found
    }

    /// The variant the extractor expected.
    pub const fn expected(&self) -> Variant {
        match self.found {
            Variant::Ok => Variant::Err,
            Variant::Err => Variant::Ok,
        }
    }

    /// The caller-supplied message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => formatter.write_str(message),
            None => write!(
                formatter,
                "called `Outcome::{}()` on an `{}` value",
                self.operation, self.found
            ),
        }
    }
}

impl std::error::Error for UnwrapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_variant_display() {
        let error = UnwrapError::wrong_variant("unwrap_err", Variant::Ok);
        assert_eq!(
            format!("{error}"),
            "called `Outcome::unwrap_err()` on an `Ok` value"
        );
        assert_eq!(error.expected(), Variant::Err);
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_with_message_display_uses_message_verbatim() {
        let error = UnwrapError::with_message("expect", Variant::Err, "config must load");
        assert_eq!(format!("{error}"), "config must load");
        assert_eq!(error.operation(), "expect");
        assert_eq!(error.expected(), Variant::Ok);
    }
}
