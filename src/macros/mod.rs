//! The propagation and assertion protocol, as macros.
//!
//! Stable Rust does not allow `?` on user-defined carriers, so the
//! protocol is spelled out here:
//!
//! - [`err!`] - builds a failed [`Outcome`](crate::Outcome) from a code,
//!   optionally with an explanation, an attached payload, or a cause.
//! - [`attempt!`] - the try operation: unwraps a success in expression
//!   position, or returns the enclosing operation with the failure
//!   wrapped in the reserved [`PROPAGATED`](crate::builtin::PROPAGATED)
//!   marker.
//! - [`forward!`] - returns the evaluated outcome itself from the
//!   enclosing operation, without a marker.
//! - [`expect!`] / [`ensure!`] - precondition and postcondition checks
//!   over `bool` or outcome conditions.
//!
//! # Examples
//!
//! ```
//! use causeway::prelude::*;
//!
//! mod codes {
//!     causeway::define_error_category!(23, AUTH_ERRORS);
//!     causeway::define_error_code!(1, AUTH_ERRORS, TOKEN_EXPIRED, "Token lifetime exceeded");
//! }
//!
//! fn validate(age_secs: u64) -> Outcome<()> {
//!     expect!(age_secs < 3600, "tokens live for one hour");
//!     ok(())
//! }
//!
//! fn refresh(age_secs: u64) -> Outcome<u64> {
//!     attempt!(validate(age_secs));
//!     ok(0)
//! }
//!
//! assert!(refresh(30).is_ok());
//! let failed = refresh(7200);
//! assert!(failed.has_failed());
//! # failed.dismiss();
//! ```

/// Builds a failed [`Outcome`](crate::Outcome) at the call site.
///
/// Forms:
///
/// - `err!(CODE)` — no explanation.
/// - `err!(CODE, explanation)` — with free-text explanation.
/// - `err!(CODE, explanation, data: payload)` — additionally attaches a
///   payload readable through [`Error::data`](crate::Error::data).
/// - `err!(CODE, explanation, cause: outcome)` — takes the error out of a
///   *currently failed* outcome and attaches it as the cause.
///
/// Delivery goes through [`Outcome::raise`](crate::Outcome::raise), so an
/// assertion-category code honors the assertion delivery mode.
///
/// # Examples
///
/// ```
/// use causeway::prelude::*;
///
/// mod codes {
///     causeway::define_error_category!(24, DISK_ERRORS);
///     causeway::define_error_code!(1, DISK_ERRORS, SECTOR_BAD, "Unreadable sector");
/// }
///
/// fn read_sector(lba: u64) -> Outcome<()> {
///     err!(codes::SECTOR_BAD, "read retries exhausted", data: lba)
/// }
///
/// let outcome = read_sector(0x2ff);
/// assert_eq!(outcome.error().data::<u64>().into_value(), &0x2ff);
/// # outcome.dismiss();
/// ```
#[macro_export]
macro_rules! err {
    ($code:expr) => {
        $crate::Outcome::raise($crate::Error::new($code, ""))
    };
    ($code:expr, $explanation:expr) => {
        $crate::Outcome::raise($crate::Error::new($code, $explanation))
    };
    ($code:expr, $explanation:expr, data: $data:expr) => {
        $crate::Outcome::raise($crate::Error::new($code, $explanation).with_data($data))
    };
    ($code:expr, $explanation:expr, cause: $outcome:expr) => {
        $crate::Outcome::raise($crate::Error::caused_by(
            $code,
            $explanation,
            $crate::Outcome::into_error($outcome),
        ))
    };
}

/// The try operation: evaluates an outcome, yielding the success value in
/// expression position.
///
/// On failure the enclosing operation returns immediately with a new
/// failure: the reserved [`PROPAGATED`](crate::builtin::PROPAGATED)
/// marker, carrying the stringified expression, the `attempt!` call site
/// as origin, and the entire original error as cause. The innermost
/// code, explanation, and origin stay inspectable through the chain.
///
/// Works in statement and expression position: `attempt!(expr);` discards
/// the value, `let x = attempt!(expr);` binds it.
///
/// # Examples
///
/// ```
/// use causeway::prelude::*;
///
/// mod codes {
///     causeway::define_error_category!(25, DNS_ERRORS);
///     causeway::define_error_code!(1, DNS_ERRORS, NAME_UNRESOLVED, "Name did not resolve");
/// }
///
/// fn resolve(host: &str) -> Outcome<[u8; 4]> {
///     if host == "localhost" {
///         return ok([127, 0, 0, 1]);
///     }
///     err!(codes::NAME_UNRESOLVED, "no record")
/// }
///
/// fn connect(host: &str) -> Outcome<[u8; 4]> {
///     let address = attempt!(resolve(host));
///     ok(address)
/// }
///
/// assert_eq!(connect("localhost").into_value(), [127, 0, 0, 1]);
///
/// let failed = connect("nowhere.invalid");
/// assert_eq!(failed.error().code(), causeway::builtin::PROPAGATED);
/// assert_eq!(failed.error().cause().unwrap().code(), codes::NAME_UNRESOLVED);
/// # failed.dismiss();
/// ```
#[macro_export]
macro_rules! attempt {
    ($outcome:expr) => {
        match $crate::Outcome::into_result($outcome) {
            Ok(value) => value,
            Err(error) => {
                return $crate::Outcome::failed($crate::Error::propagated(
                    stringify!($outcome),
                    error,
                ))
            }
        }
    };
}

/// Returns the evaluated outcome itself from the enclosing operation.
///
/// Use when the enclosing operation's success type is identical to the
/// inner one: on success the unwrapped outcome is returned as-is, and on
/// failure the error is forwarded without a propagation marker. The
/// unhandled policy is re-tagged to the enclosing operation's.
///
/// # Examples
///
/// ```
/// use causeway::prelude::*;
///
/// mod codes {
///     causeway::define_error_category!(26, FS_ERRORS);
///     causeway::define_error_code!(1, FS_ERRORS, VOLUME_OFFLINE, "Volume not mounted");
/// }
///
/// fn stat(path: &str) -> Outcome<u64> {
///     if path.starts_with("/mnt") {
///         return err!(codes::VOLUME_OFFLINE, "mount first");
///     }
///     ok(4096)
/// }
///
/// fn size_of(path: &str) -> Outcome<u64> {
///     forward!(stat(path));
/// }
///
/// assert_eq!(size_of("/tmp/x").into_value(), 4096);
/// let failed = size_of("/mnt/x");
/// // No marker: the original code comes straight through.
/// assert_eq!(failed.error().code(), codes::VOLUME_OFFLINE);
/// # failed.dismiss();
/// ```
#[macro_export]
macro_rules! forward {
    ($outcome:expr) => {
        return $crate::Outcome::retag($outcome)
    };
}

/// Precondition check. The condition is either a `bool` or an outcome
/// (true iff ok), evaluated once.
///
/// When broken, constructs a
/// [`PRECONDITION_FAILED`](crate::builtin::PRECONDITION_FAILED) error
/// carrying the stringified condition, the supplied explanation, the call
/// site, and — for a failed outcome condition — the outcome's error as
/// cause. Delivery depends on the build: with `terminate-on-assert` the
/// process stops fatally with the full report; otherwise the enclosing
/// operation returns the error as an ordinary failure. The error content
/// is identical in both modes.
#[macro_export]
macro_rules! expect {
    ($condition:expr, $explanation:expr) => {
        match $crate::Condition::check($condition) {
            $crate::Checked::Holds => {}
            $crate::Checked::Violated(cause) => {
                return $crate::Outcome::raise($crate::Error::assertion_failure(
                    $crate::builtin::PRECONDITION_FAILED,
                    stringify!($condition),
                    $explanation,
                    cause,
                ))
            }
        }
    };
}

/// Postcondition check; see [`expect!`]. Broken conditions produce
/// [`POSTCONDITION_FAILED`](crate::builtin::POSTCONDITION_FAILED).
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $explanation:expr) => {
        match $crate::Condition::check($condition) {
            $crate::Checked::Holds => {}
            $crate::Checked::Violated(cause) => {
                return $crate::Outcome::raise($crate::Error::assertion_failure(
                    $crate::builtin::POSTCONDITION_FAILED,
                    stringify!($condition),
                    $explanation,
                    cause,
                ))
            }
        }
    };
}
