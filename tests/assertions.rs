use causeway::builtin;
use causeway::prelude::*;

mod codes {
    causeway::define_error_category!(34, GUARD_ERRORS);
    causeway::define_error_code!(1, GUARD_ERRORS, UNKNOWN, "Undefined error");
}
use codes::*;

fn ok_outcome() -> UnitOutcome {
    ok(())
}

fn failed_outcome() -> UnitOutcome {
    err!(UNKNOWN, "failure")
}

#[cfg(not(feature = "terminate-on-assert"))]
mod propagating {
    use super::*;

    fn ok_precondition() -> UnitOutcome {
        expect!(true, "");
        ok(())
    }
    fn failed_precondition() -> UnitOutcome {
        expect!(false, "must hold");
        ok(())
    }
    fn ok_outcome_precondition() -> UnitOutcome {
        expect!(ok_outcome(), "");
        ok(())
    }
    fn failed_outcome_precondition() -> UnitOutcome {
        expect!(failed_outcome(), "dependency must be available");
        ok(())
    }
    fn failed_postcondition() -> UnitOutcome {
        ensure!(false, "must still hold");
        ok(())
    }
    fn failed_outcome_postcondition() -> UnitOutcome {
        ensure!(failed_outcome(), "");
        ok(())
    }

    #[test]
    fn holding_conditions_pass_through() {
        assert!(ok_precondition().is_ok());
        assert!(ok_outcome_precondition().is_ok());
    }

    #[test]
    fn broken_preconditions_fail_with_the_reserved_code() {
        let outcome = failed_precondition();
        assert!(outcome.has_failed());
        assert_eq!(outcome.error().code(), builtin::PRECONDITION_FAILED);
        assert!(outcome.error().cause().is_none());
        assert!(outcome.error().origin().file().ends_with("assertions.rs"));
        outcome.dismiss();
    }

    #[test]
    fn broken_postconditions_fail_with_the_reserved_code() {
        let outcome = failed_postcondition();
        assert_eq!(outcome.error().code(), builtin::POSTCONDITION_FAILED);
        outcome.dismiss();
    }

    #[test]
    fn failed_outcome_conditions_carry_their_error_as_cause() {
        let outcome = failed_outcome_precondition();
        assert_eq!(outcome.error().code(), builtin::PRECONDITION_FAILED);
        let cause = outcome.error().cause().expect("operand failure preserved");
        assert_eq!(cause.code(), UNKNOWN);
        assert_eq!(cause.explanation(), "failure");
        outcome.dismiss();

        let outcome = failed_outcome_postcondition();
        assert_eq!(outcome.error().code(), builtin::POSTCONDITION_FAILED);
        assert!(outcome.error().cause().is_some());
        outcome.dismiss();
    }

    #[test]
    fn the_explanation_names_the_expression() {
        let outcome = failed_precondition();
        let explanation = outcome.error().explanation().to_string();
        assert!(explanation.contains("Expression: 'false'"));
        assert!(explanation.contains("Explanation: must hold"));
        outcome.dismiss();
    }

    #[test]
    fn assertion_errors_propagate_like_domain_errors() {
        let outcome = (|| -> UnitOutcome {
            attempt!(failed_precondition());
            ok(())
        })();
        assert_eq!(outcome.error().code(), builtin::PROPAGATED);
        assert_eq!(
            outcome.error().cause().unwrap().code(),
            builtin::PRECONDITION_FAILED
        );
        outcome.dismiss();
    }
}

#[cfg(feature = "terminate-on-assert")]
mod terminating {
    use super::*;

    fn failed_precondition() -> UnitOutcome {
        expect!(false, "must hold");
        ok(())
    }

    #[test]
    #[should_panic(expected = "PRECONDITION_FAILED")]
    fn broken_preconditions_are_fatal() {
        let _ = failed_precondition();
    }

    #[test]
    #[should_panic(expected = "Pre-condition failed")]
    fn the_abort_carries_the_full_report() {
        let _ = failed_precondition();
    }

    #[test]
    #[should_panic(expected = "must hold")]
    fn failed_outcome_conditions_are_fatal_too() {
        let _ = (|| -> UnitOutcome {
            expect!(failed_outcome(), "must hold");
            ok(())
        })();
    }
}
