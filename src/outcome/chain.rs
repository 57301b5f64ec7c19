//! Composers: chain fallible computations.
//!
//! # Laws
//!
//! For `bind` on `Outcome<A, A>`, with `unit` being the constructor of the
//! variant in question:
//!
//! ```text
//! Outcome::Ok(x).bind(f)            == f(x)                            // left identity
//! r.bind(unit)                      == r                               // right identity
//! r.bind(f).bind(g)                 == r.bind(|x| f(x).bind(g))        // associativity
//! r.fmap(f)                         == r.bind(|x| unit(f(x)))
//! r.join()                          == r.bind(|x| x)
//! ```

use std::convert::identity;
use std::ops::Shr;

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Chains a computation on the success value; an `Err` passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, String> {
    ///     if x % 2 == 0 { Outcome::Ok(x / 2) } else { Outcome::Err(format!("{x} is odd")) }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(8).and_then(half).and_then(half), Outcome::Ok(2));
    /// let odd = Outcome::Ok(6).and_then(half).and_then(half);
    /// assert_eq!(odd, Outcome::Err("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a recovery computation on the error payload; an `Ok` passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("timeout");
    /// let recovered: Outcome<i32, String> = failure.or_else(|e| {
    ///     if e == "timeout" { Outcome::Ok(0) } else { Outcome::Err(e.to_string()) }
    /// });
    /// assert_eq!(recovered, Outcome::Ok(0));
    /// ```
    #[inline]
    pub fn or_else<R, G>(self, function: G) -> Outcome<T, R>
    where
        G: FnOnce(E) -> Outcome<T, R>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Chains one of two computations depending on the variant.
    ///
    /// This is the two-function form of [`bind`](Outcome::bind) for outcomes
    /// whose success and error types differ. Either branch may produce either
    /// variant, so an `Err` can be turned back into an `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("7".to_string());
    /// let result: Outcome<i32, String> = failure.bibind(
    ///     |x| Outcome::Ok(x * 2),
    ///     |e| e.parse::<i32>().map_err(|error| error.to_string()).into(),
    /// );
    /// assert_eq!(result, Outcome::Ok(7));
    /// ```
    #[inline]
    pub fn bibind<U, V, F, G>(self, ok_function: F, err_function: G) -> Outcome<U, V>
    where
        F: FnOnce(T) -> Outcome<U, V>,
        G: FnOnce(E) -> Outcome<U, V>,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Err(error) => err_function(error),
        }
    }
}

impl<A> Outcome<A, A> {
    /// Feeds whichever payload is present into a function producing a new outcome.
    ///
    /// `Ok(v)` becomes `function(v)` and `Err(e)` becomes `function(e)`. Since
    /// both branches call `function`, a chain can recover from an `Err` by
    /// returning an `Ok`. Only available when the success and error types are
    /// the same; see [`bibind`](Outcome::bibind) and
    /// [`and_then`](Outcome::and_then) for the other cases.
    ///
    /// The `>>` operator is an alias: `outcome >> function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(success.bind(|x| Outcome::<i32, i32>::Ok(x * 2)), Outcome::Ok(4));
    /// assert_eq!(success.bind(|x| Outcome::<i32, i32>::Err(x * 2)), Outcome::Err(4));
    ///
    /// // Recovery: the error payload is fed to the same function
    /// let failure: Outcome<i32, i32> = Outcome::Err(-1);
    /// let fixed = failure >> (|x: i32| Outcome::<i32, i32>::Ok(x.abs()));
    /// assert_eq!(fixed, Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn bind<U, V, F>(self, function: F) -> Outcome<U, V>
    where
        F: FnOnce(A) -> Outcome<U, V>,
    {
        match self {
            Self::Ok(value) | Self::Err(value) => function(value),
        }
    }
}

impl<U, V> Outcome<Outcome<U, V>, Outcome<U, V>> {
    /// Removes one level of nesting.
    ///
    /// Equivalent to `self.bind(|inner| inner)`, for both an `Ok` and an `Err`
    /// wrapping an inner outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, i32>, Outcome<i32, i32>> = Outcome::Ok(Outcome::Err(3));
    /// assert_eq!(nested.join(), Outcome::Err(3));
    ///
    /// let nested: Outcome<Outcome<i32, i32>, Outcome<i32, i32>> = Outcome::Err(Outcome::Ok(2));
    /// assert_eq!(nested.join(), Outcome::Ok(2));
    /// ```
    #[inline]
    pub fn join(self) -> Outcome<U, V> {
        self.bind(identity)
    }
}

impl<A, U, V, F> Shr<F> for Outcome<A, A>
where
    F: FnOnce(A) -> Outcome<U, V>,
{
    type Output = Outcome<U, V>;

    /// `outcome >> function` is `outcome.bind(function)`.
    #[inline]
    fn shr(self, function: F) -> Self::Output {
        self.bind(function)
    }
}
