use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space ID for fully-qualified domain names
    /// (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for ISO object identifiers (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID byte array from UUIDv7 field values.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | (rand_b >> 56) as u8,
            (rand_b >> 48) as u8,
            (rand_b >> 40) as u8,
            (rand_b >> 32) as u8,
            (rand_b >> 24) as u8,
            (rand_b >> 16) as u8,
            (rand_b >> 8) as u8,
            rand_b as u8,
        ])
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID, or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Decodes the 8-4-4-4-12 hexadecimal string representation, with or without the
    /// `urn:uuid:` prefix, into a UUID.
    ///
    /// Hex digits are read case-insensitively. The version and variant fields are not
    /// inspected, so any syntactically valid pattern decodes, including ones reserved for
    /// future use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidgen::{ParseErrorKind, Uuid};
    ///
    /// let x = Uuid::parse("01809424-3e59-7c05-9219-566f82fff672")?;
    /// let y = Uuid::parse("urn:uuid:01809424-3e59-7c05-9219-566f82fff672")?;
    /// assert_eq!(x, y);
    ///
    /// let err = Uuid::parse("not-a-uuid").unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::InvalidLength);
    /// # Ok::<(), uuidgen::ParseError>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        let src = src.as_bytes();
        let src = match src.len() {
            36 => src,
            45 if src[..9].eq_ignore_ascii_case(b"urn:uuid:") => &src[9..],
            _ => return Err(ParseError::new(ParseErrorKind::InvalidLength)),
        };

        let mut dst = [0u8; 16];
        let mut nibbles = 0usize;
        for (i, &c) in src.iter().enumerate() {
            if matches!(i, 8 | 13 | 18 | 23) {
                if c != b'-' {
                    return Err(ParseError::new(ParseErrorKind::InvalidHyphenPlacement));
                }
            } else {
                let d = match (c as char).to_digit(16) {
                    Some(d) => d as u8,
                    None if c == b'-' => {
                        return Err(ParseError::new(ParseErrorKind::InvalidHyphenPlacement))
                    }
                    None => return Err(ParseError::new(ParseErrorKind::InvalidHexCharacter)),
                };
                dst[nibbles >> 1] = (dst[nibbles >> 1] << 4) | d;
                nibbles += 1;
            }
        }
        Ok(Self(dst))
    }

    /// Decodes like [`Uuid::parse`] but aborts the caller on failure.
    ///
    /// This entry point is meant for hard-coded representations that are known to be valid
    /// ahead of time, such as literals in tests. It must not be fed untrusted input, as any
    /// parse failure panics. Use [`Uuid::parse`] to handle failures gracefully.
    ///
    /// # Panics
    ///
    /// Panics if `src` is not a valid string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidgen::Uuid;
    ///
    /// let e = Uuid::must_parse("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11");
    /// assert_eq!(e.version(), Some(4));
    /// ```
    pub fn must_parse(src: &str) -> Self {
        match Self::parse(src) {
            Ok(e) => e,
            Err(err) => panic!("could not parse {:?}: {}", src, err),
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// Use the [`fmt::Display`] trait usually to get the canonical form; this method avoids a
    /// heap allocation where one is not wanted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidgen::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01809424-3e59-7c05-9219-566f82fff672");
    /// assert_eq!(format!("{}", y), "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), uuidgen::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        UuidStr(self.hyphenated())
    }

    /// Returns the string representation prefixed with `urn:uuid:`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidgen::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// assert_eq!(
    ///     &x.encode_urn() as &str,
    ///     "urn:uuid:01809424-3e59-7c05-9219-566f82fff672"
    /// );
    /// # Ok::<(), uuidgen::ParseError>(())
    /// ```
    pub fn encode_urn(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        let mut buffer = [0u8; 45];
        let (prefix, tail) = buffer.split_at_mut(9);
        prefix.copy_from_slice(b"urn:uuid:");
        tail.copy_from_slice(&self.hyphenated());
        UuidStr(buffer)
    }

    /// Returns the 8-4-4-4-12 string representation with uppercase hex digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidgen::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// assert_eq!(
    ///     &x.encode_upper() as &str,
    ///     "01809424-3E59-7C05-9219-566F82FFF672"
    /// );
    /// # Ok::<(), uuidgen::ParseError>(())
    /// ```
    pub fn encode_upper(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        let mut buffer = self.hyphenated();
        buffer.make_ascii_uppercase();
        UuidStr(buffer)
    }

    /// Returns the 32-digit hexadecimal string representation without hyphens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidgen::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// assert_eq!(&x.encode_simple() as &str, "018094243e597c059219566f82fff672");
    /// # Ok::<(), uuidgen::ParseError>(())
    /// ```
    pub fn encode_simple(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 32];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
        }
        UuidStr(buffer)
    }

    /// Writes the canonical lowercase hyphenated form into a fixed byte buffer.
    fn hyphenated(&self) -> [u8; 36] {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        buffer
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// The reserved variants of UUID field layouts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Reserved for NCS backward compatibility (`0b0xx`)
    Var0,

    /// The variant defined by RFC 9562 and used by this crate (`0b10x`)
    Var10,

    /// Reserved for Microsoft backward compatibility (`0b110`)
    Var110,

    /// Reserved for future definition (`0b111`)
    VarReserved,
}

/// Concrete return type of the `encode` method family containing a stack-allocated string
/// representation.
struct UuidStr<const N: usize>([u8; N]);

impl<const N: usize> ops::Deref for UuidStr<N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl<const N: usize> fmt::Display for UuidStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the specific syntax defect found in the input.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::InvalidLength => write!(f, "invalid length of string representation"),
            ParseErrorKind::InvalidHyphenPlacement => {
                write!(f, "hyphen at unexpected position in string representation")
            }
            ParseErrorKind::InvalidHexCharacter => {
                write!(f, "non-hexadecimal digit in string representation")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The specific syntax defects reported through [`ParseError::kind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorKind {
    /// The input is not 36 bytes long, or 45 bytes with the `urn:uuid:` prefix.
    InvalidLength,

    /// A group separator is missing or appears at an unexpected position.
    InvalidHyphenPlacement,

    /// A character other than a hex digit appears where a hex digit is expected.
    InvalidHexCharacter,
}

/// Error generating a UUID because the underlying secure random number source failed.
///
/// No safe identifier can be produced in this situation, so callers that do not tolerate the
/// failure should propagate it as a hard error rather than substitute a weaker source.
#[derive(Debug)]
pub struct GenerateError(rand::Error);

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not get secure random bytes: {}", self.0)
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<rand::Error> for GenerateError {
    fn from(src: rand::Error) -> Self {
        Self(src)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}
