/// Human-readable names for the purchasing regions the shop prices in.
const REGION_NAMES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("EU", "EU + UK"),
    ("IN", "India"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("XX", "Rest of World"),
];

/// Display name for a region code, falling back to the raw code.
pub fn region_name(code: &str) -> &str {
    REGION_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions() {
        assert_eq!(region_name("US"), "United States");
        assert_eq!(region_name("EU"), "EU + UK");
        assert_eq!(region_name("XX"), "Rest of World");
    }

    #[test]
    fn test_unknown_region_falls_back_to_code() {
        assert_eq!(region_name("BR"), "BR");
        assert_eq!(region_name(""), "");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(region_name("us"), "us");
    }
}
