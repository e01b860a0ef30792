//! Conversions between [`Outcome`] and `core::result::Result`.
//!
//! Converting out of an outcome is structural consumption: the unhandled
//! policy no longer applies to the released failure. The inverse
//! conversion is provided as `From` and as
//! [`Outcome::from_result`]; the `Outcome -> Result` direction lives on
//! the container as [`Outcome::into_result`](Outcome::into_result) (a
//! generic `From` impl in that direction is ruled out by coherence).

use crate::traits::storage::OutcomeError;
use crate::traits::unhandled::UnhandledPolicy;
use crate::types::outcome::Outcome;

impl<V, E: OutcomeError, P: UnhandledPolicy> From<Result<V, E>> for Outcome<V, E, P> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Self::from_result(result)
    }
}

impl<V, E: OutcomeError, P: UnhandledPolicy> Outcome<V, E, P> {
    /// Adopts a plain `Result`, placing an `Err` under policy
    /// enforcement.
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway::{InlineStorage, Outcome, OutcomeError};
    /// use core::fmt;
    ///
    /// #[derive(Debug)]
    /// struct Saturated;
    ///
    /// impl fmt::Display for Saturated {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("counter saturated")
    ///     }
    /// }
    ///
    /// impl OutcomeError for Saturated {
    ///     type Storage = InlineStorage<Self>;
    /// }
    ///
    /// let adopted: Outcome<u32, Saturated> = Outcome::from_result(41u32.checked_add(1).ok_or(Saturated));
    /// assert_eq!(adopted.into_value(), 42);
    /// ```
    #[inline]
    pub fn from_result(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::failed(error),
        }
    }
}
