//! Panic-to-`Outcome` adapter.
//!
//! Rust signals unrecoverable failure by unwinding. This module is the single
//! boundary where such a failure is turned back into a value: [`attempt`] runs
//! a closure under [`std::panic::catch_unwind`] and returns `Ok` on normal
//! return or `Err(Panic)` when the closure panicked. [`safe`] (and the
//! `safe2`..`safe4` forms) lift a whole function the same way.
//!
//! Panics are only caught when the binary unwinds; with `panic = "abort"` the
//! process aborts before the adapter sees the panic. The installed panic hook
//! still runs for every captured panic.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{Outcome, safe};
//!
//! let reciprocal = safe(|x: f64| {
//!     if x == 0.0 {
//!         panic!("Divide by zero");
//!     }
//!     1.0 / x
//! });
//!
//! assert_eq!(reciprocal(2.0).ok(), Some(0.5));
//! assert_eq!(
//!     reciprocal(0.0).alter(|panic| panic.to_string()),
//!     Outcome::Err("Divide by zero".to_string())
//! );
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::outcome::Outcome;

/// The payload of a panic captured by the safe adapter.
///
/// Holds the value passed to `panic!` (or `std::panic::panic_any`). Panics
/// raised with a format string carry a `String`, literal panics a
/// `&'static str`; [`message`](Self::message) reads either.
///
/// `Panic` is `Send` but not `Sync`, like the payload it owns.
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    /// Wraps a raw panic payload.
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns the panic message if the payload is a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::attempt;
    ///
    /// let captured = attempt(|| -> i32 { panic!("code {}", 7) }).unwrap_err();
    /// assert_eq!(captured.message(), Some("code 7"));
    /// ```
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns a reference to the payload if it is of type `P`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::attempt;
    ///
    /// let captured = attempt(|| -> u8 { std::panic::panic_any(42_u32) }).unwrap_err();
    /// assert_eq!(captured.downcast_ref::<u32>(), Some(&42));
    /// assert_eq!(captured.message(), None);
    /// ```
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Returns the raw payload, e.g. to continue unwinding with
    /// [`std::panic::resume_unwind`].
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => formatter.write_str(message),
            None => formatter.write_str("Box<dyn Any>"),
        }
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Panic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl std::error::Error for Panic {}

static_assertions::assert_impl_all!(Panic: Send, std::error::Error);
static_assertions::assert_not_impl_any!(Panic: Sync);

/// Runs `function`, converting a panic into `Err(Panic)`.
///
/// Returns `Ok(value)` when `function` returns normally.
///
/// # Examples
///
/// ```rust
/// use outcome::attempt;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(attempt(|| values[1]).ok(), Some(2));
/// assert!(attempt(|| values[10]).is_err());
/// ```
pub fn attempt<T, F>(function: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            let panic = Panic::new(payload);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "outcome::safe",
                panic_message = panic.message().unwrap_or("Box<dyn Any>"),
                "captured panic"
            );
            Outcome::Err(panic)
        }
    }
}

/// Lifts a one-argument function into one that returns an `Outcome`.
///
/// Each call of the returned function runs `function` through [`attempt`].
///
/// # Examples
///
/// ```rust
/// use outcome::safe;
///
/// let parse = safe(|text: &str| text.parse::<u8>().expect("not a byte"));
/// assert_eq!(parse("42").ok(), Some(42));
/// let captured = parse("x").unwrap_err();
/// assert!(captured.message().is_some_and(|text| text.starts_with("not a byte")));
/// ```
pub fn safe<A, T, F>(function: F) -> impl Fn(A) -> Outcome<T, Panic>
where
    F: Fn(A) -> T,
{
    move |argument| attempt(|| function(argument))
}

macro_rules! define_safe {
    ($($arity:literal => ($($argument:ident: $argument_type:ident),+);)+) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Lifts a ", stringify!($arity),
                    "-argument function into one that returns an `Outcome`.\n\n",
                    "See [`safe`] for the one-argument form."
                )]
                pub fn [<safe $arity>]<$($argument_type,)+ T, F>(
                    function: F,
                ) -> impl Fn($($argument_type),+) -> Outcome<T, Panic>
                where
                    F: Fn($($argument_type),+) -> T,
                {
                    move |$($argument),+| attempt(|| function($($argument),+))
                }
            )+
        }
    };
}

define_safe! {
    2 => (first: A, second: B);
    3 => (first: A, second: B, third: C);
    4 => (first: A, second: B, third: C, fourth: D);
}
