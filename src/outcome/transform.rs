//! Transformers: change a payload while keeping the variant.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Applies a function to the success value if present.
    ///
    /// If this is `Ok(v)`, returns `Ok(function(v))`.
    /// If this is `Err(e)`, returns `Err(e)` unchanged and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(success.map(|x| x + 10), Outcome::Ok(12));
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Err(3);
    /// assert_eq!(failure.map(|x| x + 10), Outcome::Err(3));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies a function to the error payload if present.
    ///
    /// The dual of [`map`](Self::map): identity on `Ok`, `Err(e)` becomes
    /// `Err(function(e))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(failure.alter(|e| e.len()), Outcome::Err(4));
    ///
    /// let success: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(success.alter(|e| e.len()), Outcome::Ok(2));
    /// ```
    #[inline]
    pub fn alter<R, G>(self, function: G) -> Outcome<T, R>
    where
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Applies one of two functions depending on the variant, keeping the variant.
    ///
    /// This is the two-function form of [`fmap`](Outcome::fmap) for outcomes
    /// whose success and error types differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(2);
    /// assert_eq!(success.bimap(|x| x * 2, |e| e.len()), Outcome::Ok(4));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert_eq!(failure.bimap(|x| x * 2, |e| e.len()), Outcome::Err(4));
    /// ```
    #[inline]
    pub fn bimap<U, V, F, G>(self, ok_function: F, err_function: G) -> Outcome<U, V>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(ok_function(value)),
            Self::Err(error) => Outcome::Err(err_function(error)),
        }
    }
}

impl<A> Outcome<A, A> {
    /// Applies a function to whichever payload is present, keeping the variant.
    ///
    /// `Ok(v)` becomes `Ok(function(v))` and `Err(e)` becomes `Err(function(e))`.
    /// Because one function handles both payloads, `fmap` is only available when
    /// the success and error types are the same; use [`bimap`](Outcome::bimap)
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(success.fmap(|x| x + 10), Outcome::Ok(12));
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Err(3);
    /// assert_eq!(failure.fmap(|x| x + 10), Outcome::Err(13));
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Outcome<B, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }
}
