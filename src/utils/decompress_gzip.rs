use crate::Error;
use flate2::read::GzDecoder;
use std::io::Read;

/// Decompresses gzip bytes (as produced by the build script) into a UTF-8 string.
pub fn decompress_gzip_to_string(compressed_bytes: &[u8]) -> Result<String, Error> {
    let mut decoder = GzDecoder::new(compressed_bytes);
    let mut decompressed = String::new();

    decoder.read_to_string(&mut decompressed)?;

    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_decompresses_gzip_text() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"Symbol\nAAPL\n").unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(
            decompress_gzip_to_string(&compressed).unwrap(),
            "Symbol\nAAPL\n"
        );
    }

    #[test]
    fn test_rejects_non_gzip_bytes() {
        let result = decompress_gzip_to_string(b"not gzip");
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
