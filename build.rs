#[path = "shared/constants.rs"]
mod constants;
use constants::{COMPRESSED_FILE_EXTENSION, DATA_DIRECTORY, DICTIONARY_CSV_FILE_NAMES};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set the output directory for generated files
    let output_dir = PathBuf::from(env::var("OUT_DIR")?);

    for file_name in DICTIONARY_CSV_FILE_NAMES {
        let input_path = DATA_DIRECTORY.join(file_name);

        // Ensure that Cargo re-runs the build script if the input file changes
        println!("cargo:rerun-if-changed={}", input_path.display());

        // Open the input CSV file
        let mut input_file = File::open(&input_path)?;

        let output_path =
            output_dir.join(format!("{}.{}", file_name, COMPRESSED_FILE_EXTENSION));
        let output_file = File::create(&output_path)?;

        // Compress the data with GzEncoder
        let mut encoder = GzEncoder::new(output_file, Compression::best());
        io::copy(&mut input_file, &mut encoder)?;
        encoder.finish()?;
    }

    Ok(())
}
