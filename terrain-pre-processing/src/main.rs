/// Digital terrain model to heightmap converter main entry point
mod bounds;
mod converter;
mod dds_writer;
mod grid;
mod metadata;
mod pds;
mod preview;
mod raw;
mod samples;

use converter::DtmConverter;
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <input.img|input.raw> [output-stem]", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let file_name = Path::new(input_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let output_stem = match args.get(2) {
        Some(stem) => stem.as_str(),
        None => file_name
            .trim_end_matches(".IMG")
            .trim_end_matches(".img")
            .trim_end_matches(".raw")
            .trim_end_matches(".gray"),
    };

    let converter = DtmConverter::new(input_path, output_stem)?;
    converter.convert()?;

    Ok(())
}
