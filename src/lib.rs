//! Generation, parsing, and formatting of UUID versions 4, 5, and 7
//!
//! ```rust
//! let id = uuidgen::uuid7();
//! println!("{}", id); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562.html).
//!
//! # Field and bit layout of version 7
//!
//! This implementation produces version 7 identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        counter        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        counter                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 42-bit `counter` field accommodates the sequence counter that ensures the
//!   monotonic order of IDs generated within the same millisecond. The counter is
//!   incremented by one for each new ID generated within the same timestamp and is
//!   randomly initialized whenever the `unix_ts_ms` changes.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 32 `rand` bits are filled with a cryptographically strong random
//!   number.
//!
//! Identifiers generated in non-decreasing time order sort in non-decreasing
//! lexicographic byte order; the process-wide [`uuid7`] entry point upholds this even
//! across threads. In the very rare circumstances where the 42-bit `counter` field
//! reaches the maximum value and can no more be incremented within the same timestamp,
//! this library increments the `unix_ts_ms`; therefore, the `unix_ts_ms` may have a
//! larger value than that of the real-time clock. If the system clock moves back by
//! ten seconds or more, this library resets the generator state and thus breaks the
//! monotonic order of generated identifiers.
//!
//! # Other versions
//!
//! The random (version 4) and name-based (version 5) algorithms are also supported:
//!
//! ```rust
//! use uuidgen::{uuid4, uuid5, Uuid};
//!
//! let random = uuid4();
//! println!("{}", random); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let derived = uuid5(Uuid::NAMESPACE_DNS, b"example.com");
//! assert_eq!(derived.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
//! ```
//!
//! # Parsing and formatting
//!
//! ```rust
//! use uuidgen::Uuid;
//!
//! let id = Uuid::parse("550e8400-e29b-41d4-a716-446655440000")?;
//! assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
//! assert_eq!(
//!     &id.encode_urn() as &str,
//!     "urn:uuid:550e8400-e29b-41d4-a716-446655440000"
//! );
//! assert_eq!(
//!     &id.encode_upper() as &str,
//!     "550E8400-E29B-41D4-A716-446655440000"
//! );
//! assert_eq!(&id.encode_simple() as &str, "550e8400e29b41d4a716446655440000");
//! # Ok::<(), uuidgen::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! - `serde`: serialization as the canonical string in human-readable formats and as
//!   the 16 bytes in binary formats.
//! - `uuid`: `From` conversions to and from the `uuid` crate's `Uuid` type.

mod id;
pub use id::{GenerateError, ParseError, ParseErrorKind, Uuid, Variant};

pub mod v7;
#[doc(inline)]
pub use v7::V7Generator;

mod v4;
pub use v4::{try_uuid4, uuid4};

mod v5;
pub use v5::uuid5;

mod global_gen;
pub use global_gen::{try_uuid7, uuid7};
