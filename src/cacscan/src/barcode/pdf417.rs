//! PDF417 payload (front of card)
//!
//! Fixed-width layout; the table below mirrors the published format
//! verbatim, including its overlaps (`pcc` falls inside `dob`, and
//! `category`/`branch` fall inside `rank`).

use chrono::NaiveDate;
use serde::Serialize;

use super::reader::{extent, FieldSpec};
use super::{validate, BarcodeFormat, DecodeError};
use crate::reference::{branch_name, category_name};

pub const BARCODE_VERSION: FieldSpec = FieldSpec::new("barcode_version", 0, 1);
pub const EDIPI: FieldSpec = FieldSpec::new("edipi", 1, 7);
pub const FIRST_NAME: FieldSpec = FieldSpec::new("firstname", 16, 20);
pub const INITIAL: FieldSpec = FieldSpec::new("initial", 36, 1);
pub const LAST_NAME: FieldSpec = FieldSpec::new("lastname", 37, 25);
pub const DOB: FieldSpec = FieldSpec::new("dob", 63, 4);
pub const PCC: FieldSpec = FieldSpec::new("pcc", 65, 1);
pub const RANK: FieldSpec = FieldSpec::new("rank", 69, 6);
pub const CATEGORY: FieldSpec = FieldSpec::new("category", 70, 1);
pub const BRANCH: FieldSpec = FieldSpec::new("branch", 71, 1);
pub const PPC: FieldSpec = FieldSpec::new("ppc", 75, 2);
pub const PPGC: FieldSpec = FieldSpec::new("ppgc", 77, 2);
pub const PDI: FieldSpec = FieldSpec::new("pdi", 94, 6);

/// Every field of the layout, in format order
pub const FIELDS: &[FieldSpec] = &[
    BARCODE_VERSION,
    EDIPI,
    FIRST_NAME,
    INITIAL,
    LAST_NAME,
    DOB,
    PCC,
    RANK,
    CATEGORY,
    BRANCH,
    PPC,
    PPGC,
    PDI,
];

/// Identity block decoded from a front-of-card barcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityRecord {
    pub format: BarcodeFormat,
    pub data: String,
    pub barcode_version: String,
    pub edipi: u64,
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    /// "first initial last", single-space joined even when a part is empty
    pub name: String,
    pub dob: NaiveDate,
    pub pcc: String,
    pub category: &'static str,
    pub branch: &'static str,
    pub rank: String,
    pub ppc: String,
    pub ppgc: String,
    pub pdi: String,
}

/// Minimum payload length that covers every field
pub fn min_len() -> usize {
    extent(FIELDS)
}

/// Decode a front-of-card payload
pub fn decode(raw: &str) -> Result<IdentityRecord, DecodeError> {
    validate(raw)?;

    let first_name = FIRST_NAME.read_trimmed(raw)?.to_string();
    let middle_initial = INITIAL.read_trimmed(raw)?.to_string();
    let last_name = LAST_NAME.read_trimmed(raw)?.to_string();
    let name = format!("{} {} {}", first_name, middle_initial, last_name);

    Ok(IdentityRecord {
        format: BarcodeFormat::Pdf417,
        data: raw.to_string(),
        barcode_version: BARCODE_VERSION.read(raw)?.to_string(),
        edipi: EDIPI.read_number(raw)?,
        first_name,
        middle_initial,
        last_name,
        name,
        dob: DOB.read_date(raw)?,
        pcc: PCC.read(raw)?.to_string(),
        category: category_name(CATEGORY.read_char(raw)?),
        branch: branch_name(BRANCH.read_char(raw)?),
        rank: RANK.read_trimmed(raw)?.to_string(),
        ppc: PPC.read(raw)?.to_string(),
        ppgc: PPGC.read(raw)?.to_string(),
        pdi: PDI.read(raw)?.to_string(),
    })
}
