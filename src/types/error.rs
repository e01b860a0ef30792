//! The structured failure value: code identity, provenance, causal chain,
//! and an optional typed payload.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::any::{type_name, Any};
use core::fmt;

use crate::builtin;
use crate::codes::{ErrorCode, SourceLocation};
use crate::traits::storage::OutcomeError;
use crate::types::error_formatter;
use crate::types::outcome::Outcome;

/// A single failure: what went wrong ([`ErrorCode`]), where
/// ([`SourceLocation`]), free-text explanation, an optional owned cause,
/// and an optional attached payload.
///
/// Errors are move-only. The cause chain is exclusively owned and linear:
/// each error owns at most one predecessor, attached only after that
/// predecessor was fully constructed, so cycles cannot form.
///
/// Constructors are `#[track_caller]` — the recorded origin is the call
/// site, not a line inside this crate.
///
/// # Examples
///
/// ```
/// mod codes {
///     causeway::define_error_category!(17, INDEX_ERRORS);
///     causeway::define_error_code!(4, INDEX_ERRORS, KEY_TOO_LARGE, "Key exceeds page size");
/// }
///
/// let error = causeway::Error::new(codes::KEY_TOO_LARGE, "key is 9312 bytes").with_data(9312u32);
///
/// assert_eq!(error.code(), codes::KEY_TOO_LARGE);
/// assert_eq!(error.explanation(), "key is 9312 bytes");
/// assert_eq!(error.data::<u32>().into_value(), &9312);
/// assert!(error.cause().is_none());
/// ```
pub struct Error {
    code: ErrorCode,
    origin: SourceLocation,
    explanation: String,
    cause: Option<Box<Error>>,
    data: Option<Box<dyn Any>>,
}

impl Error {
    /// Creates an error at the caller's location. The explanation may be
    /// empty.
    #[track_caller]
    pub fn new(code: ErrorCode, explanation: impl Into<String>) -> Self {
        Self {
            code,
            origin: SourceLocation::capture(),
            explanation: explanation.into(),
            cause: None,
            data: None,
        }
    }

    /// Creates an error owning `cause` as its causal predecessor.
    #[track_caller]
    pub fn caused_by(code: ErrorCode, explanation: impl Into<String>, cause: Error) -> Self {
        let mut error = Self::new(code, explanation);
        error.cause = Some(Box::new(cause));
        error
    }

    /// Wraps `cause` in the reserved [`PROPAGATED`](builtin::PROPAGATED)
    /// marker, recording the forwarding expression and the caller's
    /// location. This is what [`attempt!`](crate::attempt) emits per hop.
    #[track_caller]
    pub fn propagated(expression: impl Into<String>, cause: Error) -> Self {
        Self::caused_by(builtin::PROPAGATED, expression, cause)
    }

    /// Builds the error raised by a broken [`expect!`](crate::expect) or
    /// [`ensure!`](crate::ensure) condition.
    #[track_caller]
    pub fn assertion_failure(
        code: ErrorCode,
        expression: &str,
        explanation: &str,
        cause: Option<Error>,
    ) -> Self {
        let text = format!("Expression: '{expression}'\nExplanation: {explanation}");
        match cause {
            Some(cause) => Self::caused_by(code, text, cause),
            None => Self::new(code, text),
        }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[inline]
    pub fn origin(&self) -> SourceLocation {
        self.origin
    }

    /// The causal predecessor, if one was attached.
    #[inline]
    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }

    /// Iterates the causal chain, innermost last.
    pub fn causes(&self) -> Causes<'_> {
        Causes { next: self.cause() }
    }

    /// Makes `cause` the causal predecessor, replacing any previous one.
    ///
    /// Legal only while the error is still being assembled, before it is
    /// handed to an [`Outcome`].
    #[inline]
    pub fn attach_cause(&mut self, cause: Error) {
        self.cause = Some(Box::new(cause));
    }

    /// Attaches a payload of any type. At most one payload is carried;
    /// attaching again replaces it.
    #[must_use]
    pub fn with_data<T: Any>(mut self, data: T) -> Self {
        self.data = Some(Box::new(data));
        self
    }

    /// Non-consuming form of [`with_data`](Self::with_data).
    #[inline]
    pub fn set_data<T: Any>(&mut self, data: T) {
        self.data = Some(Box::new(data));
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Reads the attached payload as a `T`.
    ///
    /// Fails with [`DATA_ABSENT`](builtin::DATA_ABSENT) when no payload
    /// was attached and with
    /// [`DATA_TYPE_MISMATCH`](builtin::DATA_TYPE_MISMATCH) when the
    /// payload holds a different type — never a silently wrong value.
    #[track_caller]
    pub fn data<T: Any>(&self) -> Outcome<&T> {
        match &self.data {
            None => Outcome::failed(Error::new(builtin::DATA_ABSENT, "")),
            Some(payload) => match payload.downcast_ref::<T>() {
                Some(data) => Outcome::ok(data),
                None => Outcome::failed(Error::new(
                    builtin::DATA_TYPE_MISMATCH,
                    format!("requested {}", type_name::<T>()),
                )),
            },
        }
    }
}

impl OutcomeError for Error {
    // Several words wide: keep the success path pointer-sized.
    type Storage = Box<Error>;
}

/// Dispatch on code identity: `error == SOME_CODE` compares global ids.
impl PartialEq<ErrorCode> for Error {
    #[inline]
    fn eq(&self, other: &ErrorCode) -> bool {
        self.code == *other
    }
}

impl fmt::Display for Error {
    /// `{}` renders a one-line summary, `{:#}` the full report with the
    /// cause chain (see the crate docs on rendering).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            error_formatter::write_report(f, self)
        } else {
            error_formatter::write_compact(f, self)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("code", &self.code.name())
            .field("origin", &format_args!("{}", self.origin))
            .field("explanation", &self.explanation)
            .field("cause", &self.cause)
            .field("has_data", &self.has_data())
            .finish()
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause().map(|cause| cause as _)
    }
}

/// Iterator over an error's causal chain. Created by [`Error::causes`].
pub struct Causes<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
