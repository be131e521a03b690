//! Branch of service definitions

use super::NOT_APPLICABLE;

/// Branch of service information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub code: char,
    pub name: &'static str,
}

/// All branch codes (SDK Formats v7.5, pp. 50-53)
pub const BRANCHES: &[Branch] = &[
    Branch { code: 'A', name: "USA" },
    Branch { code: 'C', name: "USCG" },
    Branch { code: 'D', name: "DOD" },
    Branch { code: 'F', name: "USAF" },
    Branch { code: 'H', name: "USPHS" },
    Branch { code: 'M', name: "USMC" },
    Branch { code: 'N', name: "USN" },
    Branch { code: 'O', name: "NOAA" },
    Branch { code: '1', name: "Foreign Army" },
    Branch { code: '2', name: "Foreign Navy" },
    Branch { code: '3', name: "Foreign Marine Corps" },
    Branch { code: '4', name: "Foreign Air Force" },
    Branch { code: 'X', name: "Other" },
];

/// Get branch by code
pub fn branch_by_code(code: char) -> Option<&'static Branch> {
    BRANCHES.iter().find(|b| b.code == code)
}

/// Get branch label by code, or "N/A" if unmapped
pub fn branch_name(code: char) -> &'static str {
    branch_by_code(code).map_or(NOT_APPLICABLE, |b| b.name)
}
