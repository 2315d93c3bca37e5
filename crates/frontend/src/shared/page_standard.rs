//! Page category constants for page standardization.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a025_rulebook--detail"`)
//!   - `data-page-category` with one of the constants below

/// Detail view for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";
