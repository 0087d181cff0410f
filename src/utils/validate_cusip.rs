/// Validates the check digit of a nine character CUSIP.
///
/// The first eight characters are weighted (digits at face value, `A`-`Z` as 10-35,
/// `*`, `@` and `#` as 36-38), every second character is doubled, and the digits of
/// each weighted value are summed. The ninth character must be the decimal digit that
/// brings the sum up to a multiple of ten.
///
/// Input is expected to be upper-cased already; lower-case letters are rejected.
pub fn validate_cusip(code: &str) -> bool {
    let bytes = code.as_bytes();

    if bytes.len() != 9 {
        return false;
    }

    let mut sum: u32 = 0;

    for (index, byte) in bytes[..8].iter().enumerate() {
        let mut value: u32 = match byte {
            b'0'..=b'9' => u32::from(byte - b'0'),
            b'A'..=b'Z' => u32::from(*byte) - 55,
            b'*' => 36,
            b'@' => 37,
            b'#' => 38,
            _ => return false,
        };

        if index % 2 == 1 {
            value *= 2;
        }

        sum += value / 10 + value % 10;
    }

    let check_digit = (10 - (sum % 10)) % 10;

    match bytes[8] {
        b'0'..=b'9' => u32::from(bytes[8] - b'0') == check_digit,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_check_digits() {
        assert!(validate_cusip("037833100")); // Apple
        assert!(validate_cusip("38259P508")); // Google (pre-Alphabet)
        assert!(validate_cusip("91282CJL6")); // US Treasury note
        assert!(validate_cusip("594918104")); // Microsoft
    }

    #[test]
    fn test_rejects_wrong_check_digit() {
        assert!(!validate_cusip("38259P509"));
        assert!(!validate_cusip("037833101"));
        assert!(!validate_cusip("912828XG8"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!validate_cusip(""));
        assert!(!validate_cusip("03783310"));
        assert!(!validate_cusip("0378331000"));
    }

    #[test]
    fn test_rejects_unsupported_characters() {
        assert!(!validate_cusip("38259p508"));
        assert!(!validate_cusip("3825-P508"));
        assert!(!validate_cusip("38259P50X"));
        assert!(!validate_cusip("é8259P50"));
    }

    #[test]
    fn test_special_characters_are_weighted() {
        // '*' = 36 at an even index contributes 3 + 6 = 9; zeros elsewhere.
        assert!(validate_cusip("*00000001"));
        // '@' = 37 at an odd index doubles to 74, contributing 7 + 4 = 11.
        assert!(validate_cusip("0@0000009"));
        // '#' = 38 at an even index contributes 3 + 8 = 11.
        assert!(validate_cusip("#00000009"));
    }
}
