//! File encoding detection example.
//!
//! Run with:
//!     cargo run --example detect_file -- /path/to/file

use std::env;
use std::fs;

use sniffrs::detect;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Detecting encoding of: {}\n", path);

    let bytes = fs::read(&path)?;
    println!("File size: {} bytes", bytes.len());

    // Taste the first 64 KiB; the whole file is decoded either way.
    let detection = detect(&bytes, 64 * 1024)?;

    println!("Encoding:  {}", detection.encoding);
    println!("Decoded:   {} chars", detection.text.chars().count());

    let preview: String = detection.text.chars().take(60).collect();
    println!("Preview:   {:?}", preview);

    Ok(())
}
