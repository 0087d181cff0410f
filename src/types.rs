use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the lower-cased name of a company or brand as an owned `String`.
pub type CompanyName = String;

/// A nine character CUSIP, upper-cased.
pub type Cusip = String;

/// Canonical code of an economic indicator (e.g. `DXY`, `CASE-SHILLER`).
pub type IndicatorCode = String;

/// Company names paired with the ticker symbol they resolve to. Order is significant:
/// names are matched, and their assets emitted, in list order.
pub type CompanyNameList = Vec<(CompanyName, TickerSymbol)>;

/// Upper-case ticker symbols which are accepted verbatim when they appear as bare tokens.
pub type KnownTickerSet = HashSet<TickerSymbol>;

/// Upper-case words which are never treated as bare ticker symbols by the heuristic.
pub type WordBlocklist = HashSet<String>;
