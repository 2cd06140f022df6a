#![no_main]

use bytes::Bytes;
use byteform::Binary;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let origins = [
        Binary::from_byte_array(data.to_vec()),
        Binary::from_block(Box::from(data)),
        Binary::from_buffer(Bytes::copy_from_slice(data)),
    ];

    for bin in &origins {
        assert_eq!(bin.len(), data.len());

        // Every byte-oriented target representation must reproduce the payload exactly.
        assert_eq!(bin.as_byte_array().unwrap(), data);
        assert_eq!(bin.as_block().unwrap().as_ref(), data);
        assert_eq!(bin.as_buffer().unwrap().as_ref(), data);

        // Through text and back: byte values and code units in 0..=255 are interchangeable.
        let text = bin.as_text();
        let back = Binary::from_text(text);
        assert_eq!(back.len(), data.len());
        assert_eq!(back.as_byte_array().unwrap(), data);
    }
});
