//! Compile-time error identity: categories, codes, and source locations.
//!
//! Categories and codes are plain `const` values. There is no runtime
//! registry — two codes are the same error iff their derived global ids
//! match, and the global id is packed from `(category id, local id)` at
//! definition time. Collisions are a build-time concern: two codes sharing
//! a category must use distinct local ids.
//!
//! # Examples
//!
//! ```
//! mod codes {
//!     causeway::define_error_category!(10, STORAGE_ERRORS);
//!     causeway::define_error_code!(1, STORAGE_ERRORS, SEGMENT_MISSING, "Segment file not found");
//!     causeway::define_error_code!(2, STORAGE_ERRORS, SEGMENT_CORRUPT, "Segment checksum mismatch");
//! }
//!
//! assert_eq!(codes::SEGMENT_MISSING.category(), codes::STORAGE_ERRORS);
//! assert_ne!(codes::SEGMENT_MISSING, codes::SEGMENT_CORRUPT);
//! assert_eq!(codes::SEGMENT_CORRUPT.description(), "Segment checksum mismatch");
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::panic::Location;

/// A named family of related error codes.
///
/// Identity is the numeric id alone; the name exists for display and
/// grouping. Categories are defined once per error family with
/// [`define_error_category!`](crate::define_error_category).
#[derive(Debug, Clone, Copy)]
pub struct ErrorCategory {
    id: u32,
    name: &'static str,
}

impl ErrorCategory {
    /// Creates a category constant. Prefer
    /// [`define_error_category!`](crate::define_error_category), which
    /// derives the name from the constant's identifier.
    #[inline]
    pub const fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }

    #[inline]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ErrorCategory {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorCategory {}

impl Hash for ErrorCategory {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Packs a category id and a category-local id into one comparable key.
///
/// The packing is deterministic and collision-free across categories, so
/// global ids can be compared and hashed without consulting the category.
#[inline]
pub const fn global_id(category_id: u32, local_id: u32) -> u64 {
    ((category_id as u64) << 32) | local_id as u64
}

/// A single, globally identifiable kind of error within a category.
///
/// Equality and hashing use the derived global id only. Dispatch ("is this
/// the invalid-argument error?") must compare codes, never categories.
#[derive(Debug, Clone, Copy)]
pub struct ErrorCode {
    category: ErrorCategory,
    global_id: u64,
    name: &'static str,
    description: &'static str,
}

impl ErrorCode {
    /// Creates a code constant. Prefer
    /// [`define_error_code!`](crate::define_error_code), which derives the
    /// name from the constant's identifier.
    #[inline]
    pub const fn new(
        category: ErrorCategory,
        local_id: u32,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            category,
            global_id: global_id(category.id(), local_id),
            name,
            description,
        }
    }

    #[inline]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// The packed global id, unique across all categories.
    #[inline]
    pub const fn id(&self) -> u64 {
        self.global_id
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The human-readable description fixed at definition time.
    #[inline]
    pub const fn description(&self) -> &'static str {
        self.description
    }
}

impl PartialEq for ErrorCode {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.global_id == other.global_id
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.global_id.hash(state);
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The call site at which a failure or assertion was recorded.
///
/// Captured through [`core::panic::Location`], so constructors annotated
/// with `#[track_caller]` record the location of *their* caller rather
/// than a line inside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Captures the caller's file and line.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Defines an error category as a `pub const`, named after the constant.
///
/// # Examples
///
/// ```
/// mod codes {
///     causeway::define_error_category!(7, PARSER_ERRORS);
/// }
///
/// assert_eq!(codes::PARSER_ERRORS.id(), 7);
/// assert_eq!(codes::PARSER_ERRORS.name(), "PARSER_ERRORS");
/// ```
#[macro_export]
macro_rules! define_error_category {
    ($id:expr, $name:ident) => {
        pub const $name: $crate::ErrorCategory =
            $crate::ErrorCategory::new($id, stringify!($name));
    };
}

/// Defines an error code as a `pub const` under an existing category.
///
/// The first argument is the category-local id; the global id is derived
/// from it and the category id.
///
/// # Examples
///
/// ```
/// mod codes {
///     causeway::define_error_category!(7, PARSER_ERRORS);
///     causeway::define_error_code!(1, PARSER_ERRORS, UNEXPECTED_TOKEN, "Unexpected token");
/// }
///
/// assert_eq!(codes::UNEXPECTED_TOKEN.name(), "UNEXPECTED_TOKEN");
/// assert_eq!(codes::UNEXPECTED_TOKEN.category(), codes::PARSER_ERRORS);
/// ```
#[macro_export]
macro_rules! define_error_code {
    ($local_id:expr, $category:expr, $name:ident, $description:expr) => {
        pub const $name: $crate::ErrorCode =
            $crate::ErrorCode::new($category, $local_id, stringify!($name), $description);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    define_error_category!(1, FIRST);
    define_error_category!(2, SECOND);
    define_error_code!(1, FIRST, FIRST_ONE, "first/one");
    define_error_code!(1, SECOND, SECOND_ONE, "second/one");
    define_error_code!(2, FIRST, FIRST_TWO, "first/two");

    #[test]
    fn global_ids_do_not_collide_across_categories() {
        assert_ne!(FIRST_ONE, SECOND_ONE);
        assert_ne!(FIRST_ONE.id(), SECOND_ONE.id());
        assert_ne!(FIRST_ONE, FIRST_TWO);
    }

    #[test]
    fn global_id_packs_category_and_local_id() {
        assert_eq!(global_id(1, 2), (1u64 << 32) | 2);
        assert_eq!(FIRST_TWO.id(), global_id(1, 2));
    }

    #[test]
    fn category_equality_ignores_name() {
        assert_eq!(ErrorCategory::new(3, "a"), ErrorCategory::new(3, "b"));
        assert_ne!(FIRST, SECOND);
    }

    #[test]
    fn capture_records_this_file() {
        let location = SourceLocation::capture();
        assert!(location.file().ends_with("codes.rs"));
        assert!(location.line() > 0);
    }
}
