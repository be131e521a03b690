//! CSV rows for scan logs and exports
//!
//! Column layout matches the scan station's export format. Back-only
//! (Code 39) rows leave the identity columns empty.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use cacscan::Barcode;

use crate::session::ScanRow;

/// Errors that can occur while writing scan logs and exports
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const HEADER: [&str; 12] = [
    "Type", "Data", "EDIPI", "Name", "Branch", "Category", "Rank", "DOB", "PCC", "PPC", "PPGC",
    "DateTime",
];

/// `%x` in the C locale
pub const DOB_FORMAT: &str = "%m/%d/%y";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a row as CSV fields, in [`HEADER`] order
pub fn fields(row: &ScanRow) -> [String; 12] {
    let barcode = &row.barcode;
    let mut out: [String; 12] = Default::default();
    out[0] = barcode.format().to_string();
    out[1] = barcode.data().to_string();
    out[2] = barcode.edipi().to_string();

    if let Barcode::Pdf417(card) = barcode {
        out[3] = card.name.clone();
        out[4] = card.branch.to_string();
        out[5] = card.category.to_string();
        out[6] = card.rank.clone();
        out[7] = card.dob.format(DOB_FORMAT).to_string();
        out[8] = card.pcc.clone();
        out[9] = card.ppc.clone();
        out[10] = card.ppgc.clone();
    }

    out[11] = row.scanned_at.format(TIMESTAMP_FORMAT).to_string();
    out
}

/// Case-insensitive substring match against every column of a row
pub fn matches(row: &ScanRow, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    fields(row)
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Write a header and every row to `writer`
pub fn write_rows<'a, W: Write>(
    writer: W,
    rows: impl IntoIterator<Item = &'a ScanRow>,
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for row in rows {
        csv.write_record(fields(row))?;
    }
    csv.flush()?;
    Ok(())
}

/// Replace `path` with a full export of `rows`
pub fn export(path: &Path, rows: &[ScanRow]) -> Result<(), ExportError> {
    write_rows(File::create(path)?, rows)
}

/// Append one row to the scan log, writing the header first if the log is new
pub fn append(path: &Path, row: &ScanRow) -> Result<(), ExportError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_new = file.metadata()?.len() == 0;

    let mut csv = csv::Writer::from_writer(file);
    if is_new {
        csv.write_record(HEADER)?;
    }
    csv.write_record(fields(row))?;
    csv.flush()?;
    Ok(())
}

/// Empty the scan log after an export
pub fn truncate(path: &Path) -> Result<(), ExportError> {
    File::create(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;

    const FRONT: &str = "N00000011KP3Q7ALJOHN                QPUBLIC                   MAVCS00EAA04 1103000000000000000K4M2QZ";
    const BACK: &str = "M1ABCDEX0000002";

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap()
    }

    fn row(raw: &str) -> ScanRow {
        ScanRow {
            barcode: cacscan::identify(raw).unwrap(),
            scanned_at: at(),
        }
    }

    #[test]
    fn test_front_fields() {
        let f = fields(&row(FRONT));
        assert_eq!(f[0], "PDF417");
        assert_eq!(f[1], FRONT);
        assert_eq!(f[2], "1");
        assert_eq!(f[3], "JOHN Q PUBLIC");
        assert_eq!(f[4], "USA");
        assert_eq!(f[5], "Active Duty member");
        assert_eq!(f[6], "EAA04");
        assert_eq!(f[7], "03/14/85");
        assert_eq!(f[8], "C");
        assert_eq!(f[9], "11");
        assert_eq!(f[10], "03");
        assert_eq!(f[11], "2024-06-01 09:30:05");
    }

    #[test]
    fn test_back_fields() {
        let f = fields(&row(BACK));
        assert_eq!(f[0], "Code39");
        assert_eq!(f[2], "2");
        assert!(f[3..11].iter().all(String::is_empty));
        assert_eq!(f[11], "2024-06-01 09:30:05");
    }

    #[test]
    fn test_matches() {
        let front = row(FRONT);
        assert!(matches(&front, "public"));
        assert!(matches(&front, "ACTIVE duty"));
        assert!(!matches(&front, "USMC"));
        assert!(matches(&row(BACK), "code39"));
    }

    #[test]
    fn test_write_rows() {
        let mut out = Vec::new();
        write_rows(&mut out, &[row(BACK)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Type,Data,EDIPI,Name,Branch,Category,Rank,DOB,PCC,PPC,PPGC,DateTime")
        );
        assert_eq!(
            lines.next(),
            Some("Code39,M1ABCDEX0000002,2,,,,,,,,,2024-06-01 09:30:05")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_append_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scanned_data.csv");

        append(&path, &row(FRONT)).unwrap();
        append(&path, &row(BACK)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.matches("Type,Data").count(), 1);
        assert!(text.lines().nth(1).unwrap().starts_with("PDF417,"));
    }

    #[test]
    fn test_export_to_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("export.csv");

        let err = export(&out, &[row(BACK)]).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
    }

    #[test]
    fn test_export_and_truncate() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("scanned_data.csv");
        let out = dir.path().join("export.csv");

        append(&log, &row(BACK)).unwrap();
        export(&out, &[row(FRONT), row(BACK)]).unwrap();
        truncate(&log).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 3);
        assert_eq!(fs::metadata(&log).unwrap().len(), 0);
    }
}
