//! Bridging from `core::result::Result` into the [`Outcome`] channel.

use alloc::string::ToString;
use core::fmt;

use crate::codes::ErrorCode;
use crate::traits::unhandled::UnhandledPolicy;
use crate::types::error::Error;
use crate::types::outcome::Outcome;

/// Lifts a plain `Result` into an [`Outcome`], coding the failure.
///
/// The source error's `Display` text becomes the explanation, and the
/// origin is the call site of [`fail_with`](ResultExt::fail_with).
///
/// # Examples
///
/// ```
/// use causeway::prelude::*;
///
/// mod codes {
///     causeway::define_error_category!(21, CONFIG_ERRORS);
///     causeway::define_error_code!(1, CONFIG_ERRORS, CONFIG_UNREADABLE, "Configuration unreadable");
/// }
///
/// fn parse_retries(raw: &str) -> Outcome<u32> {
///     raw.parse::<u32>().fail_with(codes::CONFIG_UNREADABLE)
/// }
///
/// let outcome = parse_retries("not a number");
/// assert!(outcome.has_failed());
/// assert_eq!(outcome.error().code(), codes::CONFIG_UNREADABLE);
/// # outcome.dismiss();
/// ```
pub trait ResultExt<V> {
    /// Converts `Ok` to a success and `Err` to a failure carrying `code`.
    fn fail_with<P: UnhandledPolicy>(self, code: ErrorCode) -> Outcome<V, Error, P>;
}

impl<V, X: fmt::Display> ResultExt<V> for Result<V, X> {
    #[track_caller]
    fn fail_with<P: UnhandledPolicy>(self, code: ErrorCode) -> Outcome<V, Error, P> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(source) => Outcome::raise(Error::new(code, source.to_string())),
        }
    }
}
