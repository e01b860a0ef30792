//! End-of-life policies for failures that were never handled.
//!
//! A policy runs at most once per [`Outcome`](crate::Outcome), when the
//! container is dropped while still holding a failure that was neither
//! consumed, ignored, nor dismissed. Policies are stateless by
//! construction — the trait has no `self` — so carrying one costs nothing.

use core::fmt;

/// Behavior invoked when a failed [`Outcome`](crate::Outcome) reaches the
/// end of its life unhandled.
///
/// The policy receives a read-only view of the stored error. It must not
/// run if the failure was structurally consumed (moved out through
/// `into_error`, `handle_error`, propagation, ...), ignored, or dismissed.
///
/// # Examples
///
/// A policy that counts unhandled failures:
///
/// ```
/// use causeway::{err, Outcome, UnhandledPolicy};
/// use core::fmt;
/// use core::sync::atomic::{AtomicUsize, Ordering};
///
/// static UNHANDLED: AtomicUsize = AtomicUsize::new(0);
///
/// struct Count;
///
/// impl UnhandledPolicy for Count {
///     fn on_unhandled<E: fmt::Display>(_error: &E) {
///         UNHANDLED.fetch_add(1, Ordering::Relaxed);
///     }
/// }
///
/// mod codes {
///     causeway::define_error_category!(20, DEMO);
///     causeway::define_error_code!(1, DEMO, BROKEN, "Broken");
/// }
///
/// {
///     let _dropped_unhandled: Outcome<(), _, Count> = err!(codes::BROKEN, "oops");
/// }
/// assert_eq!(UNHANDLED.load(Ordering::Relaxed), 1);
/// ```
pub trait UnhandledPolicy {
    /// Called once with the error still stored in the dropped container.
    fn on_unhandled<E: fmt::Display>(error: &E);
}

/// The default policy: unhandled failures are dropped silently.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl UnhandledPolicy for Discard {
    #[inline]
    fn on_unhandled<E: fmt::Display>(_error: &E) {}
}

/// Panics with the rendered error. Intended for test harnesses where an
/// unhandled failure is itself a bug.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicUnhandled;

impl UnhandledPolicy for PanicUnhandled {
    fn on_unhandled<E: fmt::Display>(error: &E) {
        panic!("unhandled failure:\n{error:#}");
    }
}

/// Logs the rendered error through `tracing`.
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogUnhandled;

#[cfg(feature = "tracing")]
impl UnhandledPolicy for LogUnhandled {
    fn on_unhandled<E: fmt::Display>(error: &E) {
        tracing::error!("unhandled failure:\n{error:#}");
    }
}
