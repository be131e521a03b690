//! Positional field reading shared by every barcode layout.
//!
//! Layouts are tables of [`FieldSpec`]s; all parsing goes through the three
//! readers here so both decoders fail the same way on the same defects.

use chrono::{Days, NaiveDate};

use super::DecodeError;

/// Radix of numeric fields unless a layout says otherwise
pub const DEFAULT_RADIX: u32 = 32;

/// Width of a day-offset date field
pub const DATE_FIELD_LEN: usize = 4;

/// Day zero for day-offset date fields (1 January 1000)
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1000, 1, 1) {
    Some(date) => date,
    None => panic!("epoch outside chrono's date range"),
};

/// Location of a named field within a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
}

impl FieldSpec {
    pub const fn new(name: &'static str, offset: usize, len: usize) -> Self {
        Self { name, offset, len }
    }

    /// One past the last character this field covers
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn read<'a>(&self, payload: &'a str) -> Result<&'a str, DecodeError> {
        read_slice(payload, self.offset, self.len)
    }

    /// Read with surrounding padding removed
    pub fn read_trimmed<'a>(&self, payload: &'a str) -> Result<&'a str, DecodeError> {
        self.read(payload).map(str::trim)
    }

    /// Read as a single code character
    pub fn read_char(&self, payload: &str) -> Result<char, DecodeError> {
        let field = self.read(payload)?;
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(self.malformed(payload)),
        }
    }

    pub fn read_number(&self, payload: &str) -> Result<u64, DecodeError> {
        read_number(payload, self.offset, self.len, DEFAULT_RADIX)
    }

    pub fn read_date(&self, payload: &str) -> Result<NaiveDate, DecodeError> {
        debug_assert_eq!(self.len, DATE_FIELD_LEN, "{} is not a date field", self.name);
        read_date(payload, self.offset)
    }

    fn malformed(&self, payload: &str) -> DecodeError {
        DecodeError::MalformedPayload {
            offset: self.offset,
            len: self.len,
            actual: payload.chars().count(),
        }
    }
}

/// Smallest payload length that covers every field in a layout
pub fn extent(fields: &[FieldSpec]) -> usize {
    fields.iter().map(FieldSpec::end).max().unwrap_or(0)
}

/// Read `len` characters starting at `offset`
///
/// Offsets and lengths count characters, not bytes. Ranges past the end
/// of the payload are an error, never a shorter slice.
pub fn read_slice(payload: &str, offset: usize, len: usize) -> Result<&str, DecodeError> {
    let malformed = || DecodeError::MalformedPayload {
        offset,
        len,
        actual: payload.chars().count(),
    };

    // Byte position of every character boundary, including the end
    let mut bounds = payload
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(payload.len()));

    let start = bounds.nth(offset).ok_or_else(malformed)?;
    let end = match len.checked_sub(1) {
        None => start,
        Some(last) => bounds.nth(last).ok_or_else(malformed)?,
    };

    Ok(&payload[start..end])
}

/// Read `len` characters starting at `offset` as an unsigned integer in `radix`
///
/// Digits are `0-9` followed by letters, case-insensitive. Signs,
/// whitespace, empty fields and radixes outside `2..=36` are rejected.
pub fn read_number(payload: &str, offset: usize, len: usize, radix: u32) -> Result<u64, DecodeError> {
    let field = read_slice(payload, offset, len)?;
    let invalid = || DecodeError::InvalidNumericField {
        offset,
        len,
        value: field.to_string(),
    };

    if field.is_empty() || !(2..=36).contains(&radix) {
        return Err(invalid());
    }

    field.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(radix).ok_or_else(invalid)?;
        acc.checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(invalid)
    })
}

/// Read a 4-character base-32 day count at `offset` and resolve it against [`EPOCH`]
pub fn read_date(payload: &str, offset: usize) -> Result<NaiveDate, DecodeError> {
    let days = match read_number(payload, offset, DATE_FIELD_LEN, DEFAULT_RADIX) {
        Ok(days) => days,
        Err(DecodeError::InvalidNumericField { value, .. }) => {
            return Err(DecodeError::InvalidDateField { offset, value });
        }
        Err(e) => return Err(e),
    };

    // 32^4 days stays well inside chrono's range; checked anyway
    EPOCH
        .checked_add_days(Days::new(days))
        .ok_or_else(|| DecodeError::InvalidDateField {
            offset,
            value: days.to_string(),
        })
}
