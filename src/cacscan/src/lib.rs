//! # cacscan
//!
//! DoD identification card barcode library - payload decoding.
//!
//! This library provides functionality to:
//! - Decode the PDF417 payload printed on the front of a card
//! - Decode the Code 39 payload printed on the back of a card
//! - Identify an arbitrary scanned string as one of the two
//! - Resolve branch and personnel category codes to display labels
//!
//! Input is the text a scanner already produced; no image decoding happens
//! here.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = std::io::read_to_string(std::io::stdin())?;
//!
//! match cacscan::identify(raw.trim_end_matches(['\r', '\n']))? {
//!     cacscan::Barcode::Pdf417(card) => println!("{} ({})", card.name, card.edipi),
//!     cacscan::Barcode::Code39(card) => println!("EDIPI {}", card.edipi),
//! }
//! # Ok(())
//! # }
//! ```

pub mod barcode;
pub mod reference;

// Re-export commonly used items
#[doc(inline)]
pub use barcode::{
    code39, identify, pdf417, Barcode, BarcodeFormat, DecodeError, IdentityRecord,
    MinimalRecord,
};

#[doc(inline)]
pub use barcode::reader::{read_date, read_number, read_slice, FieldSpec, DEFAULT_RADIX, EPOCH};

// Reference data (branches of service, personnel categories)
#[doc(inline)]
pub use reference::{
    branch_by_code, branch_name, category_by_code, category_name, Branch, Category, BRANCHES,
    CATEGORIES, NOT_APPLICABLE,
};
