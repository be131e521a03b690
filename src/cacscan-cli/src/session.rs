//! Scan session state
//!
//! Keeps one row per EDIPI across scans. A card's back and front can be
//! scanned in either order; the row ends up holding the front's identity
//! block either way.

use std::collections::HashMap;

use cacscan::{Barcode, BarcodeFormat};
use chrono::NaiveDateTime;

/// A scanned card as shown to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRow {
    pub barcode: Barcode,
    pub scanned_at: NaiveDateTime,
}

/// What recording a scan did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// New EDIPI, new row
    Added,
    /// Front scan replaced an earlier back-only row
    Upgraded,
    /// Back scan of a card whose front is already recorded; timestamp refreshed
    Merged,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Duplicate EDIPI {edipi} ({format} already scanned)")]
    Duplicate { edipi: u64, format: BarcodeFormat },
}

#[derive(Debug, Default)]
pub struct ScanSession {
    rows: Vec<ScanRow>,
    by_edipi: HashMap<u64, usize>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decoded scan taken at `scanned_at`
    pub fn record(
        &mut self,
        barcode: Barcode,
        scanned_at: NaiveDateTime,
    ) -> Result<ScanOutcome, SessionError> {
        let edipi = barcode.edipi();

        let Some(index) = self.by_edipi.get(&edipi).copied() else {
            self.by_edipi.insert(edipi, self.rows.len());
            self.rows.push(ScanRow {
                barcode,
                scanned_at,
            });
            return Ok(ScanOutcome::Added);
        };

        let row = &mut self.rows[index];
        match (row.barcode.format(), barcode.format()) {
            (BarcodeFormat::Code39, BarcodeFormat::Pdf417) => {
                *row = ScanRow {
                    barcode,
                    scanned_at,
                };
                Ok(ScanOutcome::Upgraded)
            }
            (BarcodeFormat::Pdf417, BarcodeFormat::Code39) => {
                row.scanned_at = scanned_at;
                Ok(ScanOutcome::Merged)
            }
            (existing, _) => Err(SessionError::Duplicate {
                edipi,
                format: existing,
            }),
        }
    }

    pub fn get(&self, edipi: u64) -> Option<&ScanRow> {
        self.by_edipi.get(&edipi).map(|&i| &self.rows[i])
    }

    /// Rows in first-scan order
    pub fn rows(&self) -> &[ScanRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const FRONT: &str = "N00000011KP3Q7ALJOHN                QPUBLIC                   MAVCS00EAA04 1103000000000000000K4M2QZ";
    const BACK: &str = "M1ABCDEX0000001";
    const OTHER_BACK: &str = "M1ABCDEX0000002";

    fn at(second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, second)
            .unwrap()
    }

    fn scan(raw: &str) -> Barcode {
        cacscan::identify(raw).unwrap()
    }

    #[test]
    fn test_fixtures() {
        assert_eq!(scan(FRONT).format(), BarcodeFormat::Pdf417);
        assert_eq!(scan(BACK).format(), BarcodeFormat::Code39);
        assert_eq!(scan(FRONT).edipi(), scan(BACK).edipi());
    }

    #[test]
    fn test_add_distinct() {
        let mut session = ScanSession::new();
        assert_eq!(session.record(scan(BACK), at(0)), Ok(ScanOutcome::Added));
        assert_eq!(session.record(scan(OTHER_BACK), at(1)), Ok(ScanOutcome::Added));
        assert_eq!(session.len(), 2);
        assert!(session.get(2).is_some());
    }

    #[test]
    fn test_front_upgrades_back() {
        let mut session = ScanSession::new();
        session.record(scan(BACK), at(0)).unwrap();
        assert_eq!(session.record(scan(FRONT), at(5)), Ok(ScanOutcome::Upgraded));

        assert_eq!(session.len(), 1);
        let row = session.get(1).unwrap();
        assert_eq!(row.barcode.format(), BarcodeFormat::Pdf417);
        assert_eq!(row.scanned_at, at(5));
    }

    #[test]
    fn test_back_merges_into_front() {
        let mut session = ScanSession::new();
        session.record(scan(FRONT), at(0)).unwrap();
        assert_eq!(session.record(scan(BACK), at(7)), Ok(ScanOutcome::Merged));

        assert_eq!(session.len(), 1);
        let row = session.get(1).unwrap();
        assert_eq!(row.barcode.format(), BarcodeFormat::Pdf417);
        assert_eq!(row.scanned_at, at(7));
    }

    #[test]
    fn test_repeat_front_is_duplicate() {
        let mut session = ScanSession::new();
        session.record(scan(FRONT), at(0)).unwrap();
        assert_eq!(
            session.record(scan(FRONT), at(1)),
            Err(SessionError::Duplicate {
                edipi: 1,
                format: BarcodeFormat::Pdf417
            })
        );
        assert_eq!(session.rows()[0].scanned_at, at(0));
    }

    #[test]
    fn test_repeat_back_is_duplicate() {
        let mut session = ScanSession::new();
        session.record(scan(BACK), at(0)).unwrap();
        assert!(session.record(scan(BACK), at(1)).is_err());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_rows_keep_first_scan_order() {
        let mut session = ScanSession::new();
        session.record(scan(BACK), at(0)).unwrap();
        session.record(scan(OTHER_BACK), at(1)).unwrap();
        session.record(scan(FRONT), at(2)).unwrap();

        let edipis: Vec<u64> = session.rows().iter().map(|r| r.barcode.edipi()).collect();
        assert_eq!(edipis, vec![1, 2]);
    }
}
