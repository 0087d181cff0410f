use crate::constants::RARE_TICKER_LETTERS;

/// Determines whether an uppercase token looks like a ticker symbol rather than an
/// English word: it contains a rare letter, contains the same letter twice in a row,
/// or is at least `min_length` characters long.
pub fn is_ticker_shaped(token: &str, min_length: usize) -> bool {
    if token.chars().count() >= min_length {
        return true;
    }

    if token.chars().any(|c| RARE_TICKER_LETTERS.contains(&c)) {
        return true;
    }

    token
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == pair[1])
}
