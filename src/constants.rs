/// Number of assets the CLI keeps from a single extraction. Extraction itself is uncapped.
pub const DEFAULT_MAX_ASSETS: usize = 20;

/// Three-letter month prefixes, matched against the lower-cased start of a month name.
pub const MONTH_ABBREVIATIONS: [(&str, u32); 12] = [
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Month used when an option phrase carries a month name outside of `MONTH_ABBREVIATIONS`.
pub const FALLBACK_MONTH_NUMBER: u32 = 1;

/// Two-digit years above this value expand to `19xx`; the rest expand to `20xx`.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// Letters which rarely begin or appear in short English words, but do in ticker symbols.
pub const RARE_TICKER_LETTERS: &[char] = &['Q', 'X', 'Z', 'J', 'K'];
