//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}` and a
//! `data-page-category` with one of the constants below.

/// Use-case page: a single user action with its own lifecycle.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// BEM class for the page root.
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_USECASE), "page page--usecase");
        assert_eq!(page_class("unknown"), "page");
    }
}
