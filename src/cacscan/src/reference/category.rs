//! Personnel category definitions

use super::NOT_APPLICABLE;

/// Personnel category information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub code: char,
    pub name: &'static str,
}

/// All personnel category codes
///
/// `G` and `N` both mean National Guard; older cards use `N`.
pub const CATEGORIES: &[Category] = &[
    Category { code: 'A', name: "Active Duty member" },
    Category { code: 'B', name: "Presidential Appointee" },
    Category { code: 'C', name: "DoD civil service employee" },
    Category { code: 'D', name: "100% disabled American veteran" },
    Category { code: 'E', name: "DoD contract employee" },
    Category { code: 'F', name: "Former member" },
    Category { code: 'N', name: "National Guard member" },
    Category { code: 'G', name: "National Guard member" },
    Category { code: 'H', name: "Medal of Honor recipient" },
    Category { code: 'I', name: "Non-DoD Civil Service Employee" },
    Category { code: 'J', name: "Academy student" },
    Category { code: 'K', name: "non-appropriated fund (NAF) DoD employee" },
    Category { code: 'L', name: "Lighthouse service" },
    Category { code: 'M', name: "Non-Government agency personnel" },
    Category { code: 'O', name: "Non-DoD contract employee" },
    Category { code: 'Q', name: "Reserve retiree not yet eligible for retired pay" },
    Category { code: 'R', name: "Retired Uniformed Service member eligible for retired pay" },
    Category { code: 'V', name: "Reserve member" },
    Category { code: 'S', name: "Reserve" },
    Category { code: 'T', name: "Foreign military member" },
    Category { code: 'U', name: "Foreign national employee" },
    Category { code: 'W', name: "DoD Beneficiary" },
    Category { code: 'Y', name: "Retired DoD Civil Service Employees" },
];

/// Get category by code
pub fn category_by_code(code: char) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.code == code)
}

/// Get category label by code, or "N/A" if unmapped
pub fn category_name(code: char) -> &'static str {
    category_by_code(code).map_or(NOT_APPLICABLE, |c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_name('A'), "Active Duty member");
        assert_eq!(category_name('K'), "non-appropriated fund (NAF) DoD employee");
        assert_eq!(category_name('N'), category_name('G'));
    }

    #[test]
    fn test_category_unmapped() {
        assert!(category_by_code('Z').is_none());
        assert_eq!(category_name('P'), "N/A");
        assert_eq!(category_name('X'), "N/A");
    }
}
