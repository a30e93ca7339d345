//! Category identifiers for courier.
//!
//! A category is the router's dispatch index: a caller-defined integer
//! naming a class of messages. The router assigns no semantics to the
//! value beyond using it as a table key.

/// A message category identifier.
pub type Category = usize;

/// Default bound on the category space.
pub const DEFAULT_MAX_CATEGORIES: usize = 128;

/// Check whether a category lies within a router's configured bound.
///
/// Valid categories are `0..max_categories`. The router treats an
/// out-of-range category as a contract violation, not a recoverable
/// error; this helper exists for callers that want to check first.
#[must_use]
pub fn category_in_range(category: Category, max_categories: usize) -> bool {
    category < max_categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_range() {
        assert!(category_in_range(0, DEFAULT_MAX_CATEGORIES));
        assert!(category_in_range(DEFAULT_MAX_CATEGORIES - 1, DEFAULT_MAX_CATEGORIES));

        // One past the last valid index.
        assert!(!category_in_range(DEFAULT_MAX_CATEGORIES, DEFAULT_MAX_CATEGORIES));
        assert!(!category_in_range(usize::MAX, DEFAULT_MAX_CATEGORIES));
    }
}
