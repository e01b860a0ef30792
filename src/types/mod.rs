//! The error value and the result container.
//!
//! # Examples
//!
//! ```
//! use causeway::prelude::*;
//!
//! mod codes {
//!     causeway::define_error_category!(22, WIRE_ERRORS);
//!     causeway::define_error_code!(3, WIRE_ERRORS, FRAME_TRUNCATED, "Frame ended early");
//! }
//!
//! fn decode(len: usize) -> Outcome<usize> {
//!     if len < 4 {
//!         return err!(codes::FRAME_TRUNCATED, "need at least a header");
//!     }
//!     ok(len - 4)
//! }
//!
//! assert_eq!(decode(10).into_value(), 6);
//! ```

pub mod error;
pub mod error_formatter;
pub mod outcome;

pub use error::{Causes, Error};
pub use outcome::{ok, Outcome};

use crate::traits::unhandled::Discard;

/// Outcome of an operation with no payload, the most common shape for
/// command-style functions.
pub type UnitOutcome<P = Discard> = Outcome<(), Error, P>;
