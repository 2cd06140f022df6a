#[cfg(feature = "dev")]
use arbitrary::{Arbitrary, Unstructured};
use bytes::Bytes;

use crate::convert;
use crate::convert::CodeUnitOutOfRange;
use crate::slice;
use crate::Representation;

/// The concrete payload a [`Binary`] holds. One variant per [`Representation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload {
    Text(String),
    ByteArray(Vec<u8>),
    Block(Box<[u8]>),
    Buffer(Bytes),
}

/// An immutable chunk of binary data, held in one of four concrete [`Representation`]s.
///
/// A value's representation is fixed at construction: converting ([`as_text`](Self::as_text) and friends) reads the payload out in another representation without touching the original, and [`slice`](Self::slice) produces a new value of the *same* representation.
///
/// The three byte-oriented representations round-trip losslessly through one another for any payload. The textual representation round-trips with them exactly when every code unit is in `0..=255`; see the crate-level documentation.
///
/// ```
/// use byteform::{Binary, Representation};
///
/// let bin = Binary::from_text("abc");
/// assert_eq!(bin.representation(), Representation::Text);
/// assert_eq!(bin.len(), 3);
/// assert_eq!(bin.as_byte_array()?, vec![97, 98, 99]);
/// # Ok::<(), byteform::CodeUnitOutOfRange>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    payload: Payload,
}

impl Binary {
    /// Creates a [`Binary`] in the textual representation from a sequence of code units.
    ///
    /// Code units above 255 are accepted here but cannot be read out in a byte-oriented representation; see [`CodeUnitOutOfRange`].
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            payload: Payload::Text(text.into()),
        }
    }

    /// Creates a [`Binary`] in the byte-array representation from a plain sequence of byte values.
    ///
    /// ```
    /// use byteform::Binary;
    ///
    /// let bin = Binary::from_byte_array(vec![97, 98, 99]);
    /// assert_eq!(bin.as_text(), "abc");
    /// ```
    pub fn from_byte_array(bytes: Vec<u8>) -> Self {
        Self {
            payload: Payload::ByteArray(bytes),
        }
    }

    /// Creates a [`Binary`] in the block representation from a fixed-length contiguous block of raw bytes.
    pub fn from_block(block: Box<[u8]>) -> Self {
        Self {
            payload: Payload::Block(block),
        }
    }

    /// Creates a [`Binary`] in the buffer representation from a reference-counted [`Bytes`] buffer.
    ///
    /// The buffer is not copied; the value shares the underlying allocation with all other handles to it.
    pub fn from_buffer(buffer: Bytes) -> Self {
        Self {
            payload: Payload::Buffer(buffer),
        }
    }

    /// Returns which [`Representation`] this value holds its payload in.
    pub fn representation(&self) -> Representation {
        match &self.payload {
            Payload::Text(_) => Representation::Text,
            Payload::ByteArray(_) => Representation::ByteArray,
            Payload::Block(_) => Representation::Block,
            Payload::Buffer(_) => Representation::Buffer,
        }
    }

    /// Returns the number of elements of the held payload: code units for a textual value, bytes otherwise.
    ///
    /// Computed directly from the held payload, never by converting to another representation first.
    pub fn len(&self) -> usize {
        match &self.payload {
            Payload::Text(text) => text.chars().count(),
            Payload::ByteArray(bytes) => bytes.len(),
            Payload::Block(block) => block.len(),
            Payload::Buffer(buffer) => buffer.len(),
        }
    }

    /// Returns whether this value holds no data at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the payload out as a sequence of code units. Total: byte value `b` becomes the code unit of scalar value `b`.
    pub fn as_text(&self) -> String {
        convert::to_text(&self.payload)
    }

    /// Reads the payload out as a plain sequence of byte values.
    ///
    /// Errs if (and only if) this value is textual and holds a code unit above 255.
    pub fn as_byte_array(&self) -> Result<Vec<u8>, CodeUnitOutOfRange> {
        convert::to_byte_array(&self.payload)
    }

    /// Reads the payload out as an independently owned contiguous block of raw bytes.
    ///
    /// Errs if (and only if) this value is textual and holds a code unit above 255.
    pub fn as_block(&self) -> Result<Box<[u8]>, CodeUnitOutOfRange> {
        convert::to_block(&self.payload)
    }

    /// Reads the payload out as a reference-counted [`Bytes`] buffer.
    ///
    /// If this value already holds a buffer, this is a cheap reference-count bump sharing the allocation; otherwise the payload is copied. Errs if (and only if) this value is textual and holds a code unit above 255.
    pub fn as_buffer(&self) -> Result<Bytes, CodeUnitOutOfRange> {
        convert::to_buffer(&self.payload)
    }

    /// Returns the sub-range `start..end` of this value, as a new value of the same representation.
    ///
    /// A negative bound counts back from the end of the value; `end: None` slices to the end. Bounds are clamped into the value, an empty result standing in for any range that would fall outside it — slicing never fails.
    ///
    /// For a buffer value the result is a zero-copy view sharing the underlying reference-counted allocation; for every other representation the result is an independent copy of the requested range.
    ///
    /// ```
    /// use byteform::Binary;
    ///
    /// let bin = Binary::from_byte_array((0..10).collect());
    /// assert_eq!(bin.slice(-5, Some(-2)).as_byte_array()?, vec![5, 6, 7]);
    /// assert_eq!(bin.slice(1, Some(1)).len(), 0);
    /// assert_eq!(bin.slice(0, Some(100)).len(), 10);
    /// # Ok::<(), byteform::CodeUnitOutOfRange>(())
    /// ```
    pub fn slice(&self, start: i64, end: Option<i64>) -> Binary {
        let range = slice::normalize(self.len(), start, end);

        match &self.payload {
            Payload::Text(text) => slice::slice_text(text, range),
            Payload::ByteArray(bytes) => slice::slice_byte_array(bytes, range),
            Payload::Block(block) => slice::slice_block(block, range),
            Payload::Buffer(buffer) => slice::slice_buffer(buffer, range),
        }
    }
}

#[cfg(feature = "dev")]
impl<'a> Arbitrary<'a> for Binary {
    /// Produces a [`Binary`] of an arbitrary representation over an arbitrary byte payload.
    ///
    /// Textual values are built through the byte-as-code-unit mapping, so every produced value can be read out in every representation without error.
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let bytes: Vec<u8> = Arbitrary::arbitrary(u)?;

        Ok(match Representation::arbitrary(u)? {
            Representation::Text => {
                Binary::from_text(bytes.iter().map(|&byte| char::from(byte)).collect::<String>())
            }
            Representation::ByteArray => Binary::from_byte_array(bytes),
            Representation::Block => Binary::from_block(bytes.into_boxed_slice()),
            Representation::Buffer => Binary::from_buffer(Bytes::from(bytes)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_tag_their_representation() {
        assert_eq!(Binary::from_text("abc").representation(), Representation::Text);
        assert_eq!(
            Binary::from_byte_array(vec![1, 2, 3]).representation(),
            Representation::ByteArray
        );
        assert_eq!(
            Binary::from_block(Box::from([1u8, 2, 3].as_slice())).representation(),
            Representation::Block
        );
        assert_eq!(
            Binary::from_buffer(Bytes::from_static(&[1, 2, 3])).representation(),
            Representation::Buffer
        );
    }

    #[test]
    fn length_counts_elements_of_the_held_payload() {
        assert_eq!(Binary::from_text("").len(), 0);
        assert_eq!(Binary::from_text("hello").len(), 5);
        // Two-byte UTF-8 storage, but a single code unit.
        assert_eq!(Binary::from_text("\u{ff}").len(), 1);

        assert_eq!(Binary::from_byte_array(vec![]).len(), 0);
        assert_eq!(Binary::from_byte_array(vec![0; 7]).len(), 7);
        assert_eq!(Binary::from_block(vec![0; 7].into_boxed_slice()).len(), 7);
        assert_eq!(Binary::from_buffer(Bytes::from(vec![0; 7])).len(), 7);

        assert!(Binary::from_byte_array(vec![]).is_empty());
        assert!(!Binary::from_byte_array(vec![0]).is_empty());
    }

    #[test]
    fn conversions_do_not_change_the_source() {
        let bin = Binary::from_byte_array(vec![97, 98, 99]);
        let _ = bin.as_text();
        let _ = bin.as_block();
        let _ = bin.as_buffer();
        assert_eq!(bin.representation(), Representation::ByteArray);
        assert_eq!(bin.as_byte_array().unwrap(), vec![97, 98, 99]);
    }

    #[test]
    fn byte_representations_round_trip_pairwise() {
        let bytes: Vec<u8> = (0..=255).collect();

        let from_array = Binary::from_byte_array(bytes.clone());
        let from_block = Binary::from_block(bytes.clone().into_boxed_slice());
        let from_buffer = Binary::from_buffer(Bytes::from(bytes.clone()));

        for bin in [&from_array, &from_block, &from_buffer] {
            assert_eq!(bin.as_byte_array().unwrap(), bytes);
            assert_eq!(bin.as_block().unwrap().as_ref(), bytes.as_slice());
            assert_eq!(bin.as_buffer().unwrap().as_ref(), bytes.as_slice());
        }

        // And one more hop: out of one representation, into another, and back.
        let hop = Binary::from_block(from_buffer.as_block().unwrap());
        assert_eq!(hop.as_byte_array().unwrap(), bytes);
    }

    #[test]
    fn text_round_trips_when_code_units_fit_in_bytes() {
        let text: String = (0u8..=255).map(char::from).collect();

        let bin = Binary::from_text(text.clone());
        assert_eq!(bin.as_text(), text);

        let through_bytes = Binary::from_byte_array(bin.as_byte_array().unwrap());
        assert_eq!(through_bytes.as_text(), text);

        let through_buffer = Binary::from_buffer(bin.as_buffer().unwrap());
        assert_eq!(through_buffer.as_text(), text);
    }

    #[test]
    fn buffer_slices_share_their_allocation() {
        let bin = Binary::from_buffer(Bytes::from(vec![0, 1, 2, 3, 4]));
        let sliced = bin.slice(1, Some(4));

        assert_eq!(sliced.representation(), Representation::Buffer);
        assert_eq!(sliced.as_byte_array().unwrap(), vec![1, 2, 3]);

        // Dropping the source must leave the view intact (it holds its own strong reference).
        drop(bin);
        assert_eq!(sliced.as_byte_array().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn one_megabyte_buffer_round_trips_through_text() {
        let len = 1 << 20;
        let bin = Binary::from_buffer(Bytes::from(vec![0u8; len]));

        let text = bin.as_text();
        let back = Binary::from_text(text);
        let buffer = back.as_buffer().unwrap();

        assert_eq!(buffer.len(), len);
        assert!(buffer.iter().all(|&byte| byte == 0));
    }
}
