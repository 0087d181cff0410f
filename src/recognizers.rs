pub mod cashtag_recognizer;
pub use cashtag_recognizer::CashtagRecognizer;

pub mod company_name_recognizer;
pub use company_name_recognizer::CompanyNameRecognizer;

pub mod contextual_ticker_recognizer;
pub use contextual_ticker_recognizer::ContextualTickerRecognizer;

pub mod cusip_recognizer;
pub use cusip_recognizer::CusipRecognizer;

pub mod economic_indicator_recognizer;
pub use economic_indicator_recognizer::EconomicIndicatorRecognizer;

pub mod heuristic_ticker_recognizer;
pub use heuristic_ticker_recognizer::HeuristicTickerRecognizer;

pub mod known_ticker_recognizer;
pub use known_ticker_recognizer::KnownTickerRecognizer;

pub mod option_phrase_recognizer;
pub use option_phrase_recognizer::OptionPhraseRecognizer;

pub mod option_shorthand_recognizer;
pub use option_shorthand_recognizer::OptionShorthandRecognizer;
