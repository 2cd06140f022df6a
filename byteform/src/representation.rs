#[cfg(feature = "dev")]
use arbitrary::Arbitrary;

/// The concrete representations a [`Binary`](crate::Binary) value can hold its payload in.
///
/// This enum is closed on purpose: every conversion and slicing operation in this crate matches exhaustively over it, so adding a representation without supplying all of its conversion pairs fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "dev", derive(Arbitrary))]
pub enum Representation {
    /// A sequence of code units, stored as a `String`. Each `char` is one code unit; only code units in `0..=255` correspond to byte values.
    Text,
    /// A plain ordered sequence of byte values, stored as a `Vec<u8>`.
    ByteArray,
    /// A fixed-length contiguous block of raw bytes, stored as a `Box<[u8]>`.
    Block,
    /// A reference-counted byte buffer, stored as a [`Bytes`](bytes::Bytes). Cheap to clone and to slice.
    Buffer,
}

impl core::fmt::Display for Representation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Representation::Text => write!(f, "text"),
            Representation::ByteArray => write!(f, "byte array"),
            Representation::Block => write!(f, "block"),
            Representation::Buffer => write!(f, "buffer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representation_display() {
        assert_eq!(Representation::Text.to_string(), "text");
        assert_eq!(Representation::ByteArray.to_string(), "byte array");
        assert_eq!(Representation::Block.to_string(), "block");
        assert_eq!(Representation::Buffer.to_string(), "buffer");
    }
}
