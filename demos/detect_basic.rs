//! Basic encoding detection example.
//!
//! Run with:
//!     cargo run --example detect_basic

use sniffrs::detect;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let samples: Vec<(&str, Vec<u8>)> = vec![
        ("UTF-8 BOM", b"\xEF\xBB\xBFBonjour".to_vec()),
        ("UTF-16LE BOM", b"\xFF\xFEh\x00i\x00".to_vec()),
        (
            "dense UTF-8",
            "caf\u{e9} \u{a9} na\u{ef}ve".as_bytes().to_vec(),
        ),
        (
            "BOM-less UTF-16BE",
            "plain ascii text"
                .encode_utf16()
                .flat_map(u16::to_be_bytes)
                .collect(),
        ),
        (
            "charset marker",
            b"<meta charset=\"windows-1252\"> caf\xE9".to_vec(),
        ),
        ("plain ASCII", b"hello, world".to_vec()),
        ("binary garbage", vec![0x81, 0xFE, 0x92, 0xFD]),
    ];

    for (label, bytes) in &samples {
        // Taste depth 0 means: look at the whole buffer.
        match detect(bytes, 0) {
            Ok(detection) => println!(
                "{:<20} -> {:<12} {:?}",
                label, detection.encoding, detection.text
            ),
            Err(e) => println!("{:<20} -> {}", label, e),
        }
    }

    Ok(())
}
