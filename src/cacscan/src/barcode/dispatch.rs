//! Barcode identification
//!
//! A scanned string carries no symbology marker, so every layout is tried
//! in a fixed order. PDF417 goes first: the Code 39 layout only checks one
//! field and would accept most front-of-card payloads too.

use super::{code39, pdf417, Barcode, DecodeError};

type Decoder = fn(&str) -> Result<Barcode, DecodeError>;

/// Decoders in priority order
const DECODERS: &[Decoder] = &[decode_pdf417, decode_code39];

fn decode_pdf417(raw: &str) -> Result<Barcode, DecodeError> {
    pdf417::decode(raw).map(Barcode::Pdf417)
}

fn decode_code39(raw: &str) -> Result<Barcode, DecodeError> {
    code39::decode(raw).map(Barcode::Code39)
}

/// Decode `raw` with the first layout that accepts it
///
/// Decoder failures only move on to the next layout; when none accept the
/// input the result is [`DecodeError::UnrecognizedBarcode`].
pub fn identify(raw: &str) -> Result<Barcode, DecodeError> {
    DECODERS
        .iter()
        .find_map(|decode| decode(raw).ok())
        .ok_or_else(|| DecodeError::UnrecognizedBarcode {
            length: raw.chars().count(),
        })
}
