//! UUIDv4-related functionality

use rand::{random, rngs::OsRng, RngCore};

use crate::{GenerateError, Uuid};

/// Generates a UUIDv4 object.
///
/// # Panics
///
/// Aborts if the cryptographically strong random number source of the calling thread fails;
/// the failure is never papered over with a weaker source. Use [`try_uuid4`] to handle the
/// failure gracefully.
///
/// # Examples
///
/// ```rust
/// use uuidgen::uuid4;
///
/// let uuid = uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid4() -> Uuid {
    let mut bytes: [u8; 16] = random();
    bytes[6] = 0x40 | (bytes[6] >> 4);
    bytes[8] = 0x80 | (bytes[8] >> 2);
    Uuid::from(bytes)
}

/// Generates a UUIDv4 object, reporting a failure of the random number source as an error.
///
/// This function reads the operating system entropy source directly, so an exhausted or
/// unavailable source surfaces as [`GenerateError`] instead of aborting.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::try_uuid4()?;
/// assert_eq!(uuid.version(), Some(4));
/// # Ok::<(), uuidgen::GenerateError>(())
/// ```
pub fn try_uuid4() -> Result<Uuid, GenerateError> {
    let mut bytes = [0u8; 16];
    OsRng.try_fill_bytes(&mut bytes)?;
    bytes[6] = 0x40 | (bytes[6] >> 4);
    bytes[8] = 0x80 | (bytes[8] >> 2);
    Ok(Uuid::from(bytes))
}
