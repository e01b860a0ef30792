//! Causeway is a typed result and error-propagation library: every
//! fallible operation returns an [`Outcome`] that is exactly one of a
//! success carrying a payload or a failure carrying a structured
//! [`Error`] — coded, located, and chainable into a causal trace as it
//! crosses call boundaries. Failures are never dropped silently: an
//! outcome that reaches the end of its life unhandled triggers its
//! [`UnhandledPolicy`].
//!
//! # Examples
//!
//! ## Coded failures and propagation
//!
//! ```
//! use causeway::prelude::*;
//!
//! mod codes {
//!     causeway::define_error_category!(16, LEDGER_ERRORS);
//!     causeway::define_error_code!(1, LEDGER_ERRORS, ENTRY_MISSING, "Ledger entry not found");
//! }
//!
//! fn lookup(id: u32) -> Outcome<u64> {
//!     if id == 0 {
//!         return err!(codes::ENTRY_MISSING, "id 0 is reserved");
//!     }
//!     ok(40 + u64::from(id))
//! }
//!
//! fn balance() -> Outcome<u64> {
//!     let credit = attempt!(lookup(2));
//!     ok(credit)
//! }
//!
//! assert_eq!(balance().into_value(), 42);
//!
//! let failed = lookup(0);
//! assert!(failed.has_failed());
//! assert_eq!(failed.error().code(), codes::ENTRY_MISSING);
//! # failed.dismiss();
//! ```
//!
//! ## Recovery with preserved history
//!
//! ```
//! use causeway::prelude::*;
//!
//! mod codes {
//!     causeway::define_error_category!(16, LEDGER_ERRORS);
//!     causeway::define_error_code!(1, LEDGER_ERRORS, ENTRY_MISSING, "Ledger entry not found");
//!     causeway::define_error_code!(2, LEDGER_ERRORS, LEDGER_CLOSED, "Ledger closed for writes");
//! }
//!
//! let miss: Outcome<u64> = err!(codes::ENTRY_MISSING, "id 7");
//! let outcome = miss.handle_error(|_error| err!(codes::LEDGER_CLOSED, "recovery impossible"));
//!
//! // Failed recovery keeps the original failure as cause.
//! assert_eq!(outcome.error().code(), codes::LEDGER_CLOSED);
//! assert_eq!(outcome.error().cause().unwrap().code(), codes::ENTRY_MISSING);
//! # outcome.dismiss();
//! ```
//!
//! ## Assertions
//!
//! ```
//! use causeway::prelude::*;
//!
//! fn reserve(slots: u32) -> UnitOutcome {
//!     expect!(slots > 0, "reserving zero slots is meaningless");
//!     ok(())
//! }
//!
//! let failed = reserve(0);
//! assert_eq!(failed.error().code(), causeway::builtin::PRECONDITION_FAILED);
//! # failed.dismiss();
//! ```
//!
//! Propagation is spelled with [`attempt!`] and [`forward!`] rather than
//! `?`, which stable Rust reserves for its own carriers.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Reserved categories and codes used by the library itself
pub mod builtin;
/// Compile-time error identity: categories, codes, source locations
pub mod codes;
/// Conversions to and from `core::result::Result`
pub mod convert;
/// The propagation and assertion protocol macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Failure storage, unhandled-result policies, assertion operands
pub mod traits;
/// The error value and the result container
pub mod types;

pub use codes::{global_id, ErrorCategory, ErrorCode, SourceLocation};
pub use traits::{
    Checked, Condition, Discard, ErrorStorage, InlineStorage, OutcomeError, PanicUnhandled,
    ResultExt, UnhandledPolicy,
};
pub use types::{ok, Causes, Error, Outcome, UnitOutcome};

#[cfg(feature = "tracing")]
pub use traits::LogUnhandled;
