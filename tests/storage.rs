use causeway::prelude::*;
use core::fmt;
use core::mem::size_of;

mod codes {
    causeway::define_error_category!(36, SLOT_ERRORS);
    causeway::define_error_code!(1, SLOT_ERRORS, UNKNOWN, "Undefined error");
}
use codes::*;

/// A failure no wider than a machine word, stored inline.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ProbeFault {
    Timeout,
    Refused(u16),
}

impl fmt::Display for ProbeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("probe timed out"),
            Self::Refused(port) => write!(f, "probe refused on port {port}"),
        }
    }
}

impl OutcomeError for ProbeFault {
    type Storage = InlineStorage<Self>;
}

#[test]
fn indirect_failures_cost_one_pointer_on_the_success_path() {
    assert_eq!(
        size_of::<Outcome<u64, Error>>(),
        size_of::<Result<u64, Box<Error>>>()
    );
    assert_eq!(
        size_of::<Outcome<(), Error>>(),
        size_of::<Result<(), Box<Error>>>()
    );
    assert_eq!(
        size_of::<Outcome<String, Error>>(),
        size_of::<Result<String, Box<Error>>>()
    );
}

#[test]
fn inline_failures_share_the_value_slot() {
    assert_eq!(
        size_of::<Outcome<u64, ProbeFault>>(),
        size_of::<Result<u64, ProbeFault>>()
    );
    assert_eq!(
        size_of::<Outcome<(), ProbeFault>>(),
        size_of::<Result<(), ProbeFault>>()
    );
}

#[test]
fn accessors_behave_identically_under_both_representations() {
    let inline: Outcome<u64, ProbeFault> = Outcome::failed(ProbeFault::Refused(443));
    assert!(inline.has_failed());
    assert_eq!(inline.error(), &ProbeFault::Refused(443));
    assert_eq!(inline.into_error(), ProbeFault::Refused(443));

    let indirect: Outcome<u64> = err!(UNKNOWN, "boxed");
    assert!(indirect.has_failed());
    assert_eq!(indirect.error().code(), UNKNOWN);
    assert_eq!(indirect.into_error().explanation(), "boxed");
}

#[test]
fn inline_failures_support_the_same_transformations() {
    let mapped = Outcome::<u64, ProbeFault>::failed(ProbeFault::Timeout).map_value(|n| n + 1);
    assert_eq!(mapped.into_error(), ProbeFault::Timeout);

    let succeeded = Outcome::<u64, ProbeFault>::ok(41).map_value(|n| n + 1);
    assert_eq!(succeeded.into_value(), 42);

    let released: Result<u64, ProbeFault> =
        Outcome::<u64, ProbeFault>::failed(ProbeFault::Timeout).into_result();
    assert_eq!(released.unwrap_err(), ProbeFault::Timeout);
}
