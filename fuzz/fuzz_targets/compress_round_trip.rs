#![no_main]

use libfuzzer_sys::fuzz_target;
use sniffrs::compress::{compress_deflate, compress_gzip, decompress_deflate, decompress_gzip};

fuzz_target!(|data: &[u8]| {
    // Verify: compress then decompress restores the input exactly
    let deflated = compress_deflate(data).unwrap();
    let restored = decompress_deflate(&deflated).unwrap();
    assert_eq!(restored, data);

    let gzipped = compress_gzip(data).unwrap();
    let restored = decompress_gzip(&gzipped).unwrap();
    assert_eq!(restored, data);

    // Decompressing arbitrary bytes may fail, but must not panic.
    let _ = decompress_deflate(data);
    let _ = decompress_gzip(data);
});
