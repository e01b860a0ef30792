//! Operands accepted by the [`expect!`](crate::expect) and
//! [`ensure!`](crate::ensure) assertion macros.

use crate::traits::unhandled::UnhandledPolicy;
use crate::types::error::Error;
use crate::types::outcome::Outcome;

/// Verdict of evaluating an assertion operand.
#[derive(Debug)]
pub enum Checked {
    /// The condition holds; the enclosing operation continues.
    Holds,
    /// The condition is broken. When the operand was a failed
    /// [`Outcome`], its error is carried as evidence and becomes the
    /// cause of the assertion failure.
    Violated(Option<Error>),
}

/// Anything that can stand as an assertion condition: a `bool`, or an
/// [`Outcome`] whose truth value is "is ok".
///
/// Evaluation consumes the operand, so a failed outcome handed to an
/// assertion counts as handled.
pub trait Condition {
    fn check(self) -> Checked;
}

impl Condition for bool {
    #[inline]
    fn check(self) -> Checked {
        if self {
            Checked::Holds
        } else {
            Checked::Violated(None)
        }
    }
}

impl<V, P: UnhandledPolicy> Condition for Outcome<V, Error, P> {
    #[inline]
    fn check(self) -> Checked {
        match self.into_result() {
            Ok(_) => Checked::Holds,
            Err(error) => Checked::Violated(Some(error)),
        }
    }
}
