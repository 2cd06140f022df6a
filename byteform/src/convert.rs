//! The conversion matrix: one function per target representation, each matching exhaustively over the source payload.
//!
//! Byte value `b` and the code unit of scalar value `b` are interchangeable; this is a raw byte-as-code-unit mapping, not a text encoding. Conversions *from* text are the only fallible cells of the matrix, since a `String` may hold code units above 255.

use bytes::Bytes;

use crate::value::Payload;

/// An error arising from converting a text payload whose code units do not all fit into single bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeUnitOutOfRange {
    /// The code-unit index at which the offending code unit sits.
    pub index: usize,
    /// The scalar value of the offending code unit. Always greater than 255.
    pub value: u32,
}

impl core::fmt::Display for CodeUnitOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Code unit {} at index {} exceeds the maximum byte value of 255",
            self.value, self.index
        )
    }
}

impl std::error::Error for CodeUnitOutOfRange {}

/// Converts any payload into its textual representation. Total: every byte maps to the code unit of the same value.
pub(crate) fn to_text(payload: &Payload) -> String {
    match payload {
        Payload::Text(text) => text.clone(),
        Payload::ByteArray(bytes) => bytes_to_text(bytes),
        Payload::Block(block) => bytes_to_text(block),
        Payload::Buffer(buffer) => bytes_to_text(buffer),
    }
}

/// Converts any payload into a plain sequence of byte values.
pub(crate) fn to_byte_array(payload: &Payload) -> Result<Vec<u8>, CodeUnitOutOfRange> {
    match payload {
        Payload::Text(text) => text_to_bytes(text),
        Payload::ByteArray(bytes) => Ok(bytes.clone()),
        Payload::Block(block) => Ok(block.to_vec()),
        Payload::Buffer(buffer) => Ok(buffer.to_vec()),
    }
}

/// Converts any payload into an independently owned contiguous block.
pub(crate) fn to_block(payload: &Payload) -> Result<Box<[u8]>, CodeUnitOutOfRange> {
    match payload {
        Payload::Text(text) => Ok(text_to_bytes(text)?.into_boxed_slice()),
        Payload::ByteArray(bytes) => Ok(Box::from(bytes.as_slice())),
        Payload::Block(block) => Ok(block.clone()),
        Payload::Buffer(buffer) => Ok(Box::from(buffer.as_ref())),
    }
}

/// Converts any payload into a reference-counted buffer. The identity cell is a reference-count bump; all other cells copy.
pub(crate) fn to_buffer(payload: &Payload) -> Result<Bytes, CodeUnitOutOfRange> {
    match payload {
        Payload::Text(text) => Ok(Bytes::from(text_to_bytes(text)?)),
        Payload::ByteArray(bytes) => Ok(Bytes::copy_from_slice(bytes)),
        Payload::Block(block) => Ok(Bytes::copy_from_slice(block)),
        Payload::Buffer(buffer) => Ok(buffer.clone()),
    }
}

/// Maps each code unit of `text` to the byte of the same value, or reports the first code unit that does not fit.
fn text_to_bytes(text: &str) -> Result<Vec<u8>, CodeUnitOutOfRange> {
    // Capacity in UTF-8 bytes is an upper bound on the number of code units.
    let mut bytes = Vec::with_capacity(text.len());

    for (index, code_unit) in text.chars().enumerate() {
        let value = u32::from(code_unit);
        match u8::try_from(value) {
            Ok(byte) => bytes.push(byte),
            Err(_) => return Err(CodeUnitOutOfRange { index, value }),
        }
    }

    Ok(bytes)
}

/// Maps each byte to the code unit of the same value.
fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}
