//! Bifunctor type class - mapping over both payloads of a two-parameter type.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf                                              // identity
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)  // composition
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)          // consistency
//! ```
//!
//! # Parameter Order for Outcome
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<T, E>`, following the order of
//! its variants:
//! - `first`: transforms the success value - equivalent to `Outcome::map`
//! - `second`: transforms the error payload - equivalent to `Outcome::alter`
//!
//! so `Bifunctor::bimap` takes its functions in the same order as the
//! inherent `Outcome::bimap`.

use crate::outcome::Outcome;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
/// use outcome::typeclass::Bifunctor;
///
/// fn describe<B: Bifunctor<i32, String>>(value: B) -> B::Target<String, usize> {
///     value.bimap(|x| format!("#{x}"), |s| s.len())
/// }
///
/// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
/// assert_eq!(describe(failure), Outcome::Err(4));
/// ```
pub trait Bifunctor<A, B> {
    /// The same type constructor applied to `C` and `D`.
    ///
    /// For `Outcome<T, E>`, `Target<C, D> = Outcome<C, D>`.
    type Target<C, D>;

    /// Applies two functions, one per type parameter.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of the payloads without consuming self.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::typeclass::Bifunctor;
    ///
    /// let success: Outcome<String, String> = Outcome::Ok("hello".to_string());
    /// assert_eq!(success.bimap_ref(|s| s.len(), |e| e.is_empty()), Outcome::Ok(5));
    /// assert!(success.is_ok()); // still available
    /// ```
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Applies a function to a reference of the first payload, cloning the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::typeclass::Bifunctor;
    ///
    /// let success: Outcome<String, i32> = Outcome::Ok("hello".to_string());
    /// assert_eq!(success.first_ref(|s| s.len()), Outcome::Ok(5));
    ///
    /// let failure: Outcome<String, i32> = Outcome::Err(7);
    /// assert_eq!(failure.first_ref(|s| s.len()), Outcome::Err(7));
    /// ```
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, B::clone)
    }

    /// Applies a function to a reference of the second payload, cloning the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::typeclass::Bifunctor;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert_eq!(failure.second_ref(|e| e.len()), Outcome::Err(4));
    /// assert_eq!(failure.err().as_deref(), Some("boom"));
    /// ```
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(A::clone, function)
    }
}

impl<T, E> Bifunctor<T, E> for Outcome<T, E> {
    type Target<C, D> = Outcome<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(T) -> C,
        G: FnOnce(E) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T) -> C,
    {
        self.map(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<T, D>
    where
        G: FnOnce(E) -> D,
    {
        self.alter(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(&T) -> C,
        G: FnOnce(&E) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }

    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Outcome<C, E>
    where
        E: Clone,
        F: FnOnce(&T) -> C,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error.clone()),
        }
    }

    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Outcome<T, D>
    where
        T: Clone,
        G: FnOnce(&E) -> D,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value.clone()),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }
}
