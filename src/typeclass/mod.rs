//! Type class traits implemented by [`Outcome`](crate::Outcome).
//!
//! - [`Bifunctor`]: Mapping over both payloads

mod bifunctor;

pub use bifunctor::Bifunctor;
