//! The result container: exactly one of a success value or a stored
//! failure, with mandatory-handling enforcement at end of life.

use core::fmt;
use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ptr;

use crate::builtin;
use crate::traits::storage::{ErrorStorage, OutcomeError};
use crate::traits::unhandled::{Discard, UnhandledPolicy};
use crate::types::error::Error;

/// The two-alternative sum the container wraps. `Failed` holds the
/// representation chosen by [`OutcomeError::Storage`].
enum State<V, S> {
    Ok(V),
    Failed(S),
}

/// Either a success carrying a `V` or a failure carrying an `E`.
///
/// An outcome owns its state exclusively and is move-only. The failure
/// branch is stored through the representation the error type declares
/// ([`OutcomeError::Storage`]), so the container is exactly the size of
/// the sum of the value and that representation — the policy parameter is
/// carried as [`PhantomData`] and costs nothing.
///
/// Dropping an outcome that still holds a failure — one that was never
/// consumed, ignored, or dismissed — invokes `P::on_unhandled` with a
/// read-only view of the error. The default [`Discard`] policy does
/// nothing; test harnesses typically substitute
/// [`PanicUnhandled`](crate::PanicUnhandled).
///
/// Reading the wrong branch (`value()` while failed, `error()` while ok)
/// is a contract violation and panics: it indicates a bug in the caller,
/// not a recoverable condition.
///
/// # Examples
///
/// ```
/// use causeway::prelude::*;
///
/// mod codes {
///     causeway::define_error_category!(18, QUEUE_ERRORS);
///     causeway::define_error_code!(1, QUEUE_ERRORS, QUEUE_FULL, "Queue capacity exhausted");
/// }
///
/// fn push(len: usize) -> Outcome<usize> {
///     if len >= 8 {
///         return err!(codes::QUEUE_FULL, "at capacity");
///     }
///     ok(len + 1)
/// }
///
/// assert_eq!(push(3).into_value(), 4);
///
/// let failed = push(8);
/// assert!(failed.has_failed());
/// assert!(!failed.is_ok());
/// assert_eq!(failed.error().code(), codes::QUEUE_FULL);
/// failed.dismiss();
/// ```
#[must_use = "a failed outcome must be handled, ignored, or dismissed"]
pub struct Outcome<V, E: OutcomeError = Error, P: UnhandledPolicy = Discard> {
    state: State<V, E::Storage>,
    _policy: PhantomData<P>,
}

impl<V, E: OutcomeError, P: UnhandledPolicy> Outcome<V, E, P> {
    /// Builds a success. See also the free [`ok`] function, which reads
    /// better in return position.
    #[inline]
    pub fn ok(value: V) -> Self {
        Self {
            state: State::Ok(value),
            _policy: PhantomData,
        }
    }

    /// Builds a failure, moving the error into its storage
    /// representation.
    #[inline]
    pub fn failed(error: E) -> Self {
        Self {
            state: State::Failed(ErrorStorage::store(error)),
            _policy: PhantomData,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self.state, State::Ok(_))
    }

    #[inline]
    pub fn has_failed(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Contract violation if the outcome has failed.
    pub fn value(&self) -> &V {
        match &self.state {
            State::Ok(value) => value,
            State::Failed(storage) => {
                panic!("contract violation: value() on a failed outcome:\n{:#}", storage.get())
            }
        }
    }

    /// Borrows the stored error.
    ///
    /// Borrowing does not count as handling — the unhandled policy still
    /// runs at drop unless the failure is consumed, ignored, or
    /// dismissed.
    ///
    /// # Panics
    ///
    /// Contract violation if the outcome is ok.
    pub fn error(&self) -> &E {
        match &self.state {
            State::Ok(_) => panic!("contract violation: error() on an ok outcome"),
            State::Failed(storage) => storage.get(),
        }
    }

    /// Moves the state out without running `Drop` (and therefore without
    /// running the unhandled policy). Every structurally-consuming
    /// operation funnels through here.
    #[inline]
    fn into_state(self) -> State<V, E::Storage> {
        let this = ManuallyDrop::new(self);
        // `this` is never dropped; the state is read out exactly once.
        unsafe { ptr::read(&this.state) }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Contract violation if the outcome has failed.
    pub fn into_value(self) -> V {
        match self.into_state() {
            State::Ok(value) => value,
            State::Failed(storage) => {
                panic!("contract violation: into_value() on a failed outcome:\n{:#}", storage.get())
            }
        }
    }

    /// Consumes the outcome, returning the error. This is structural
    /// consumption: the unhandled policy will not run.
    ///
    /// # Panics
    ///
    /// Contract violation if the outcome is ok.
    pub fn into_error(self) -> E {
        match self.into_state() {
            State::Ok(_) => panic!("contract violation: into_error() on an ok outcome"),
            State::Failed(storage) => ErrorStorage::take(storage),
        }
    }

    /// Consumes the outcome into a plain `Result`, releasing the failure
    /// from policy enforcement.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self.into_state() {
            State::Ok(value) => Ok(value),
            State::Failed(storage) => Err(ErrorStorage::take(storage)),
        }
    }

    /// Borrows the state as a plain `Result` for pattern matching.
    #[inline]
    pub fn as_result(&self) -> Result<&V, &E> {
        match &self.state {
            State::Ok(value) => Ok(value),
            State::Failed(storage) => Err(storage.get()),
        }
    }

    /// Applies `op` to the success value; a failure passes through
    /// untouched in its existing representation (no re-allocation).
    pub fn map_value<U, F>(self, op: F) -> Outcome<U, E, P>
    where
        F: FnOnce(V) -> U,
    {
        let state = match self.into_state() {
            State::Ok(value) => State::Ok(op(value)),
            State::Failed(storage) => State::Failed(storage),
        };
        Outcome {
            state,
            _policy: PhantomData,
        }
    }

    /// Re-tags the unhandled policy when an outcome crosses into a scope
    /// that enforces a different one. Used by [`forward!`](crate::forward).
    pub fn retag<Q: UnhandledPolicy>(self) -> Outcome<V, E, Q> {
        Outcome {
            state: self.into_state(),
            _policy: PhantomData,
        }
    }

    /// Marks the failure as deliberately unhandled. The policy is
    /// suppressed; the stored error is dropped with the container, here.
    pub fn ignore(self) {
        let _ = self.into_state();
    }

    /// Actively clears the stored failure: the error is extracted and
    /// dropped immediately, and no policy or further inspection applies.
    pub fn dismiss(self) {
        if let State::Failed(storage) = self.into_state() {
            let error: E = ErrorStorage::take(storage);
            drop(error);
        }
    }
}

impl<V, P: UnhandledPolicy> Outcome<V, Error, P> {
    /// Delivers a failure, honoring the assertion delivery mode: with the
    /// `terminate-on-assert` feature enabled, an error from the reserved
    /// [`ASSERTIONS`](builtin::ASSERTIONS) category aborts with the full
    /// report instead of being returned.
    #[track_caller]
    pub fn raise(error: Error) -> Self {
        if cfg!(feature = "terminate-on-assert") && error.code().category() == builtin::ASSERTIONS {
            panic!("{error:#}");
        }
        Self::failed(error)
    }

    /// Attempts recovery from a failure.
    ///
    /// On success the handler is never invoked and the success is
    /// returned unchanged. On failure the handler runs exactly once with
    /// the stored error: a successful recovery becomes the returned
    /// outcome, and a failed recovery is returned with the *original*
    /// error attached as its cause, preserving the full causal history.
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway::prelude::*;
    ///
    /// mod codes {
    ///     causeway::define_error_category!(19, CACHE_ERRORS);
    ///     causeway::define_error_code!(1, CACHE_ERRORS, CACHE_MISS, "Entry not cached");
    ///     causeway::define_error_code!(2, CACHE_ERRORS, BACKEND_DOWN, "Backing store unreachable");
    /// }
    ///
    /// let miss: Outcome<u32> = err!(codes::CACHE_MISS, "key 7");
    /// let recovered = miss.handle_error(|error| {
    ///         if *error == codes::CACHE_MISS {
    ///             ok(0u32)
    ///         } else {
    ///             err!(codes::BACKEND_DOWN, "gave up")
    ///         }
    ///     });
    /// assert_eq!(recovered.into_value(), 0);
    /// ```
    pub fn handle_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(&Error) -> Self,
    {
        let original = match self.into_state() {
            State::Ok(value) => return Self::ok(value),
            State::Failed(storage) => ErrorStorage::take(storage),
        };
        match handler(&original).into_state() {
            State::Ok(value) => Self::ok(value),
            State::Failed(storage) => {
                let mut failure = ErrorStorage::take(storage);
                failure.attach_cause(original);
                Self::failed(failure)
            }
        }
    }
}

/// Default-constructs as a success carrying the value's default, the
/// natural state for command-style outcomes (`Outcome<()>`).
impl<V: Default, E: OutcomeError, P: UnhandledPolicy> Default for Outcome<V, E, P> {
    fn default() -> Self {
        Self::ok(V::default())
    }
}

impl<V, E: OutcomeError, P: UnhandledPolicy> Drop for Outcome<V, E, P> {
    fn drop(&mut self) {
        if let State::Failed(storage) = &self.state {
            P::on_unhandled(storage.get());
        }
    }
}

impl<V, E: OutcomeError, P: UnhandledPolicy> fmt::Display for Outcome<V, E, P> {
    /// `ok`, or the stored error (with `{:#}` passed through).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(_) => f.write_str("ok"),
            State::Failed(storage) => {
                if f.alternate() {
                    write!(f, "{:#}", storage.get())
                } else {
                    write!(f, "{}", storage.get())
                }
            }
        }
    }
}

impl<V: fmt::Debug, E: OutcomeError, P: UnhandledPolicy> fmt::Debug for Outcome<V, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            State::Failed(storage) => f
                .debug_tuple("Failed")
                .field(&format_args!("{}", storage.get()))
                .finish(),
        }
    }
}

/// Builds a success, inferring the outcome type from return position.
/// The void-payload case is `ok(())`.
#[inline]
pub fn ok<V, E: OutcomeError, P: UnhandledPolicy>(value: V) -> Outcome<V, E, P> {
    Outcome::ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    // Inline-stored fixture error.
    #[derive(Debug, PartialEq)]
    struct Tiny(u8);

    impl fmt::Display for Tiny {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "tiny {}", self.0)
        }
    }

    impl OutcomeError for Tiny {
        type Storage = crate::InlineStorage<Self>;
    }

    #[test]
    fn container_size_equals_sum_representation() {
        assert_eq!(
            size_of::<Outcome<u64, Error>>(),
            size_of::<Result<u64, alloc::boxed::Box<Error>>>()
        );
        assert_eq!(
            size_of::<Outcome<(), Error>>(),
            size_of::<Result<(), alloc::boxed::Box<Error>>>()
        );
        assert_eq!(size_of::<Outcome<u64, Tiny>>(), size_of::<Result<u64, Tiny>>());
    }

    #[test]
    fn stateless_policy_adds_no_padding() {
        struct Quiet;
        impl UnhandledPolicy for Quiet {
            fn on_unhandled<E: fmt::Display>(_error: &E) {}
        }
        assert_eq!(
            size_of::<Outcome<u64, Tiny, Quiet>>(),
            size_of::<Outcome<u64, Tiny, Discard>>()
        );
    }

    #[test]
    fn inline_failure_is_stored_in_place() {
        let failed: Outcome<u64, Tiny> = Outcome::failed(Tiny(7));
        assert!(failed.has_failed());
        assert_eq!(failed.error(), &Tiny(7));
        assert_eq!(failed.into_error(), Tiny(7));
    }
}
