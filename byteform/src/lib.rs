//! # Byteform
//!
//! This crate provides [`Binary`], an immutable value holding a chunk of binary data in one of four concrete representations:
//!
//! - [`Representation::Text`] — a sequence of code units, stored as a `String`.
//! - [`Representation::ByteArray`] — a plain ordered sequence of byte values, stored as a `Vec<u8>`.
//! - [`Representation::Block`] — a fixed-length contiguous block of raw bytes, stored as a `Box<[u8]>`.
//! - [`Representation::Buffer`] — a reference-counted byte buffer, stored as a [`Bytes`].
//!
//! A [`Binary`] is constructed from a payload already in one of these representations, and can then be read out in any of them — every pairwise conversion is implemented — or sliced into a sub-range of the same representation, with negative indices counting back from the end of the data.
//!
//! ## Code units and bytes
//!
//! The textual representation is a sequence of *code units*, not encoding-aware text. Byte value `b` corresponds to the code unit (`char`) of scalar value `b`, so any byte payload round-trips through text losslessly. A `String` whose `char`s all lie in `'\u{0}'..='\u{ff}'` round-trips the other way, too. Code units above 255 can only enter through [`Binary::from_text`]; converting such a value to a byte representation fails with [`CodeUnitOutOfRange`] rather than silently truncating.
//!
//! ```
//! use byteform::Binary;
//!
//! let bin = Binary::from_byte_array(vec![97, 98, 99]);
//! assert_eq!(bin.as_text(), "abc");
//!
//! let tail = bin.slice(-2, None);
//! assert_eq!(tail.as_text(), "bc");
//! ```

mod convert;
pub use convert::CodeUnitOutOfRange;

mod representation;
pub use representation::Representation;

mod slice;

mod value;
pub use value::Binary;

pub use bytes::Bytes;
