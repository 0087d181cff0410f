pub mod decompress_gzip;
pub use decompress_gzip::decompress_gzip_to_string;

pub mod is_ticker_shaped;
pub use is_ticker_shaped::is_ticker_shaped;

pub mod lookup_month_number;
pub use lookup_month_number::lookup_month_number;

pub mod read_csv_columns;
pub use read_csv_columns::read_csv_columns;

pub mod resolve_expiry;
pub use resolve_expiry::resolve_expiry;

pub mod validate_cusip;
pub use validate_cusip::validate_cusip;
