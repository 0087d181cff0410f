use crate::constants::MONTH_ABBREVIATIONS;

/// Resolves a month name (`"Jan"`, `"january"`, `"SEPT"`, ...) to its 1-based number
/// by looking up its lower-cased three-letter prefix.
pub fn lookup_month_number(month_name: &str) -> Option<u32> {
    let prefix: String = month_name.chars().take(3).collect::<String>().to_lowercase();

    MONTH_ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == prefix)
        .map(|(_, month_number)| *month_number)
}
