//! ID card barcode decoding
//!
//! Cards carry two barcodes with fixed text layouts:
//! 1. A PDF417 symbol on the front holding the full identity block
//! 2. A Code 39 symbol on the back holding little more than the EDIPI
//!
//! Both layouts are read positionally through [`reader`], and [`identify`]
//! picks whichever layout a scanned string satisfies.
//!
//! Layout reference: DoD ID Bar Code SDK Formats v7.5, pp. 13-18.

pub mod code39;
pub mod dispatch;
pub mod pdf417;
pub mod reader;

use std::fmt;

use serde::Serialize;

pub use code39::MinimalRecord;
pub use dispatch::identify;
pub use pdf417::IdentityRecord;

/// Errors that can occur during barcode decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Empty barcode payload")]
    InvalidPayload,

    #[error("Field at {offset}+{len} exceeds payload of {actual} characters")]
    MalformedPayload {
        offset: usize,
        len: usize,
        actual: usize,
    },

    #[error("Invalid numeric field at {offset}+{len}: {value:?}")]
    InvalidNumericField {
        offset: usize,
        len: usize,
        value: String,
    },

    #[error("Invalid date field at {offset}: {value:?}")]
    InvalidDateField { offset: usize, value: String },

    #[error("Unrecognized barcode ({length} characters)")]
    UnrecognizedBarcode { length: usize },
}

/// Barcode symbology a payload was decoded as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BarcodeFormat {
    #[serde(rename = "PDF417")]
    Pdf417,
    Code39,
}

impl BarcodeFormat {
    /// Get the type tag shown to operators and written to exports
    pub fn name(&self) -> &'static str {
        match self {
            BarcodeFormat::Pdf417 => "PDF417",
            BarcodeFormat::Code39 => "Code39",
        }
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successfully decoded barcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Barcode {
    /// Front of card, full identity block
    Pdf417(IdentityRecord),
    /// Back of card, identifier only
    Code39(MinimalRecord),
}

impl Barcode {
    pub fn format(&self) -> BarcodeFormat {
        match self {
            Barcode::Pdf417(record) => record.format,
            Barcode::Code39(record) => record.format,
        }
    }

    pub fn edipi(&self) -> u64 {
        match self {
            Barcode::Pdf417(record) => record.edipi,
            Barcode::Code39(record) => record.edipi,
        }
    }

    /// Raw payload the record was decoded from
    pub fn data(&self) -> &str {
        match self {
            Barcode::Pdf417(record) => &record.data,
            Barcode::Code39(record) => &record.data,
        }
    }

    /// Identity block, if this is a front-of-card scan
    pub fn identity(&self) -> Option<&IdentityRecord> {
        match self {
            Barcode::Pdf417(record) => Some(record),
            Barcode::Code39(_) => None,
        }
    }
}

/// Reject payloads no decoder can read before touching any field
fn validate(raw: &str) -> Result<(), DecodeError> {
    if raw.is_empty() {
        return Err(DecodeError::InvalidPayload);
    }
    Ok(())
}
