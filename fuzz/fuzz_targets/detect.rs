#![no_main]

use libfuzzer_sys::fuzz_target;
use sniffrs::detect;

fuzz_target!(|data: &[u8]| {
    // Detection either succeeds or reports an undetectable encoding;
    // it must never panic, whatever the bytes and the depth.
    for taste_depth in [0, 1, 4, 9, 16, data.len() / 2, data.len(), data.len() + 7] {
        let first = detect(data, taste_depth);

        // Verify: detection is deterministic
        let second = detect(data, taste_depth);
        match (&first, &second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => panic!("detect() must be deterministic"),
        }
    }

    // Verify: depth 0 behaves exactly like the full length
    let zero = detect(data, 0);
    let full = detect(data, data.len());
    match (zero, full) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(_), Err(_)) => {}
        _ => panic!("depth 0 must match the full length"),
    }
});
