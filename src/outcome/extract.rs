//! Extractors: leave the `Outcome` wrapper.
//!
//! `unwrap`, `unwrap_err`, `expect` and `expect_err` panic when the variant is
//! not the one the caller assumed. The `*_or`, `*_or_do` and `try_*` forms
//! never panic.

use super::{Outcome, UnwrapError, Variant};

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Panicking Extraction
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err` value. The panic payload is a `String`
    /// holding the `Display` text of the matching [`UnwrapError`]; use
    /// [`try_unwrap`](Self::try_unwrap) to get the error itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(success.unwrap(), 2);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => misuse(&UnwrapError::wrong_variant("unwrap", Variant::Err)),
        }
    }

    /// Returns the error payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value. The panic payload is a `String`
    /// holding the `Display` text of the matching [`UnwrapError`]; use
    /// [`try_unwrap_err`](Self::try_unwrap_err) to get the error itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Err(3);
    /// assert_eq!(failure.unwrap_err(), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => misuse(&UnwrapError::wrong_variant("unwrap_err", Variant::Ok)),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value, or panics with `message`.
    ///
    /// The message is used verbatim; it does not depend on the error payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an `Err` value. The payload is a
    /// `String` copy of `message`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.expect("value must be present"), 2);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => misuse(&UnwrapError::with_message("expect", Variant::Err, message)),
        }
    }

    /// Returns the error payload, or panics with `message`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an `Ok` value. The payload is a
    /// `String` copy of `message`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Ok(_) => misuse(&UnwrapError::with_message("expect_err", Variant::Ok, message)),
            Self::Err(error) => error,
        }
    }

    // =========================================================================
    // Non-panicking Extraction
    // =========================================================================

    /// Returns the success value, or `UnwrapError` if this is an `Err`.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` whose `found()` is `Variant::Err` when this is an
    /// `Err` value.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(UnwrapError::wrong_variant("unwrap", Variant::Err)),
        }
    }

    /// Returns the error payload, or `UnwrapError` if this is an `Ok`.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` whose `found()` is `Variant::Ok` when this is an
    /// `Ok` value.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        match self {
            Self::Ok(_) => Err(UnwrapError::wrong_variant("unwrap_err", Variant::Ok)),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the success value, or `default` if this is an `Err`.
    ///
    /// `default` is evaluated eagerly; use [`unwrap_or_do`](Self::unwrap_or_do)
    /// to compute the fallback from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Err(3);
    /// assert_eq!(failure.unwrap_or(10), 10);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or `function(error)` if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Err(3);
    /// assert_eq!(failure.unwrap_or_do(|x| x + 1), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_do<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Returns `function(value)` if this is `Ok`, otherwise `default`.
    ///
    /// The success path is computed and the failure path is a fixed fallback,
    /// the reverse of [`unwrap_or_do`](Self::unwrap_or_do).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::Ok("hello");
    /// assert_eq!(success.map_or(0, |s| s.len()), 5);
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Err(3);
    /// assert_eq!(failure.map_or(0, |s| s.len()), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Eliminates the outcome by applying `ok_function` or `err_function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// let message = failure.map_or_do(|x| format!("value {x}"), |e| format!("error {e}"));
    /// assert_eq!(message, "error boom");
    /// ```
    #[inline]
    pub fn map_or_do<U, F, G>(self, ok_function: F, err_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Err(error) => err_function(error),
        }
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value, or `T::default()` if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err(3);
    /// assert_eq!(failure.unwrap_or_default(), String::new());
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

// The panic payload is the `Display` text of `error` as a `String`.
#[cold]
#[inline(never)]
#[track_caller]
fn misuse(error: &UnwrapError) -> ! {
    panic!("{error}")
}
