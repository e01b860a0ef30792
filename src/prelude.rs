//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use causeway::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`err!`](crate::err), [`attempt!`](crate::attempt),
//!   [`forward!`](crate::forward), [`expect!`](crate::expect),
//!   [`ensure!`](crate::ensure)
//! - **Types**: [`Outcome`], [`UnitOutcome`], [`Error`], [`ErrorCategory`],
//!   [`ErrorCode`], [`SourceLocation`], the stock policies
//! - **Traits**: [`OutcomeError`], [`UnhandledPolicy`], [`Condition`],
//!   [`ResultExt`]
//! - **Functions**: [`ok`]
//!
//! # Examples
//!
//! ```
//! use causeway::prelude::*;
//!
//! mod codes {
//!     causeway::define_error_category!(27, SESSION_ERRORS);
//!     causeway::define_error_code!(1, SESSION_ERRORS, SESSION_GONE, "Session expired or revoked");
//! }
//!
//! fn touch(live: bool) -> UnitOutcome {
//!     if !live {
//!         return err!(codes::SESSION_GONE, "revoked by admin");
//!     }
//!     ok(())
//! }
//!
//! assert!(touch(true).is_ok());
//! ```

pub use crate::{attempt, define_error_category, define_error_code, ensure, err, expect, forward};

pub use crate::codes::{ErrorCategory, ErrorCode, SourceLocation};
pub use crate::types::{ok, Error, Outcome, UnitOutcome};

pub use crate::traits::{
    Condition, Discard, ErrorStorage, InlineStorage, OutcomeError, PanicUnhandled, ResultExt,
    UnhandledPolicy,
};

#[cfg(feature = "tracing")]
pub use crate::traits::LogUnhandled;
