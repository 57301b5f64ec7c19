//! Combiners: merge two already-evaluated outcomes.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Returns `other` if this is `Ok`, otherwise returns this `Err`.
    ///
    /// The first error wins; on two successes the second is returned.
    ///
    /// | self     | other    | result   |
    /// |----------|----------|----------|
    /// | `Ok(a)`  | `Ok(b)`  | `Ok(b)`  |
    /// | `Ok(a)`  | `Err(f)` | `Err(f)` |
    /// | `Err(e)` | anything | `Err(e)` |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let first: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(first.and(Outcome::<i32, i32>::Ok(20)), Outcome::Ok(20));
    /// assert_eq!(first.and(Outcome::<i32, i32>::Err(4)), Outcome::Err(4));
    ///
    /// let failed: Outcome<i32, i32> = Outcome::Err(3);
    /// assert_eq!(failed.and(Outcome::<i32, i32>::Err(4)), Outcome::Err(3));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns this outcome if it is `Ok`, otherwise returns `other`.
    ///
    /// Success wins; when both fail, the error of `other` (the later one) is
    /// reported.
    ///
    /// | self     | other    | result   |
    /// |----------|----------|----------|
    /// | `Ok(a)`  | anything | `Ok(a)`  |
    /// | `Err(e)` | `Ok(b)`  | `Ok(b)`  |
    /// | `Err(e)` | `Err(f)` | `Err(f)` |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let first: Outcome<i32, i32> = Outcome::Ok(2);
    /// assert_eq!(first.or(Outcome::<i32, i32>::Err(3)), Outcome::Ok(2));
    ///
    /// let failed: Outcome<i32, i32> = Outcome::Err(3);
    /// assert_eq!(failed.or(Outcome::<i32, i32>::Err(5)), Outcome::Err(5));
    /// ```
    #[inline]
    pub fn or<R>(self, other: Outcome<T, R>) -> Outcome<T, R> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }
}
