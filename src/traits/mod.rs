//! Core traits: failure storage, unhandled-result policies, assertion
//! operands, and `Result` interop.
//!
//! - [`OutcomeError`] / [`ErrorStorage`]: per-error-type choice between an
//!   inline and an indirect failure representation.
//! - [`UnhandledPolicy`]: end-of-life hook for failures nobody handled.
//! - [`Condition`]: operand contract of [`expect!`](crate::expect) and
//!   [`ensure!`](crate::ensure).
//! - [`ResultExt`]: lift `core::result::Result` into the outcome channel.

pub mod condition;
pub mod result_ext;
pub mod storage;
pub mod unhandled;

pub use condition::{Checked, Condition};
pub use result_ext::ResultExt;
pub use storage::{ErrorStorage, InlineStorage, OutcomeError};
pub use unhandled::{Discard, PanicUnhandled, UnhandledPolicy};

#[cfg(feature = "tracing")]
pub use unhandled::LogUnhandled;
