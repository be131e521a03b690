//! Code 39 payload (back of card)
//!
//! Only the EDIPI is parsed. The remaining characters stay on the record
//! as part of the raw payload.

use serde::Serialize;

use super::reader::{extent, FieldSpec};
use super::{validate, BarcodeFormat, DecodeError};

pub const BARCODE_VERSION: FieldSpec = FieldSpec::new("barcode_version", 0, 1);
pub const PDI: FieldSpec = FieldSpec::new("pdi", 1, 6);
pub const EDIPI: FieldSpec = FieldSpec::new("edipi", 8, 7);

/// Published layout. Only [`EDIPI`] is decoded.
pub const FIELDS: &[FieldSpec] = &[BARCODE_VERSION, PDI, EDIPI];

/// Identifier decoded from a back-of-card barcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalRecord {
    pub format: BarcodeFormat,
    pub data: String,
    pub edipi: u64,
}

/// Minimum payload length that covers every field
pub fn min_len() -> usize {
    extent(FIELDS)
}

/// Decode a back-of-card payload
pub fn decode(raw: &str) -> Result<MinimalRecord, DecodeError> {
    validate(raw)?;

    Ok(MinimalRecord {
        format: BarcodeFormat::Code39,
        data: raw.to_string(),
        edipi: EDIPI.read_number(raw)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table() {
        assert_eq!(min_len(), 15);
        assert_eq!(EDIPI.end(), 15);
    }

    #[test]
    fn test_decode() {
        let card = decode("M1ABCDEX1KP3Q7AZZ").unwrap();
        assert_eq!(card.format, BarcodeFormat::Code39);
        assert_eq!(card.edipi, 1_771_170_026);
        assert_eq!(card.data, "M1ABCDEX1KP3Q7AZZ");
    }

    #[test]
    fn test_decode_exact_length() {
        assert_eq!(decode("M1ABCDEX0000001").map(|c| c.edipi), Ok(1));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), Err(DecodeError::InvalidPayload));
    }

    #[test]
    fn test_decode_short() {
        assert!(matches!(
            decode("M1ABCDEX00001"),
            Err(DecodeError::MalformedPayload { offset: 8, len: 7, actual: 13 })
        ));
    }

    #[test]
    fn test_decode_bad_edipi() {
        assert!(matches!(
            decode("M1ABCDEX00-0001"),
            Err(DecodeError::InvalidNumericField { offset: 8, .. })
        ));
    }
}
