#![no_main]

use byteform::Binary;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Binary, i64, Option<i64>)| {
    let (bin, start, end) = data;
    let len = bin.len();

    let sliced = bin.slice(start, end);
    assert_eq!(sliced.representation(), bin.representation());

    // Mirror of the documented bound resolution: wrap negatives, clamp into the value.
    let resolve = |bound: i64| -> usize {
        if bound < 0 {
            (len as i64).saturating_add(bound).max(0) as usize
        } else {
            (bound as u64).min(len as u64) as usize
        }
    };
    let resolved_start = resolve(start);
    let resolved_end = end.map_or(len, resolve).max(resolved_start);
    assert_eq!(sliced.len(), resolved_end - resolved_start);

    // Arbitrary for Binary only produces code units in 0..=255, so reading bytes never fails.
    let bytes = bin.as_byte_array().unwrap();
    assert_eq!(
        sliced.as_byte_array().unwrap(),
        bytes[resolved_start..resolved_end]
    );

    // The same bounds over the same payload give the same bytes in every representation.
    let from_bytes = Binary::from_byte_array(bytes).slice(start, end);
    assert_eq!(
        sliced.as_byte_array().unwrap(),
        from_bytes.as_byte_array().unwrap()
    );
});
