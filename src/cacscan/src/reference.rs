//! Reference data for ID card code fields
//!
//! Hardcoded lookup tables for the single-character codes carried in the
//! front-of-card barcode. Unknown codes resolve to [`NOT_APPLICABLE`]
//! rather than failing.

pub mod branch;
pub mod category;

pub use branch::{branch_by_code, branch_name, Branch, BRANCHES};
pub use category::{category_by_code, category_name, Category, CATEGORIES};

/// Label used for codes missing from a table
pub const NOT_APPLICABLE: &str = "N/A";
