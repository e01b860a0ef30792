//! Reserved categories and codes used by the library itself.
//!
//! Category ids below 16 are reserved; application categories should start
//! at 16 or above.

use crate::{define_error_category, define_error_code};

define_error_category!(1, ASSERTIONS);
define_error_code!(1, ASSERTIONS, PRECONDITION_FAILED, "Pre-condition failed");
define_error_code!(2, ASSERTIONS, POSTCONDITION_FAILED, "Post-condition failed");

define_error_category!(2, PROPAGATION);
define_error_code!(1, PROPAGATION, PROPAGATED, "Failure propagated from a nested operation");

define_error_category!(3, ERROR_DATA);
define_error_code!(1, ERROR_DATA, DATA_ABSENT, "No data attached to the error");
define_error_code!(2, ERROR_DATA, DATA_TYPE_MISMATCH, "Attached data has a different type");
