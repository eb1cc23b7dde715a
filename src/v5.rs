//! UUIDv5-related functionality

use sha1::{Digest, Sha1};

use crate::Uuid;

/// Generates a name-based UUIDv5 object from a namespace UUID and a name.
///
/// The SHA-1 digest is computed over the namespace's raw 16 bytes followed by the name bytes;
/// the hyphenated form of the namespace plays no role. Generation is deterministic: identical
/// `(namespace, name)` pairs always yield an identical UUID, and there is no failure path as
/// hashing is defined for any byte input.
///
/// # Examples
///
/// ```rust
/// use uuidgen::{uuid5, Uuid};
///
/// let uuid = uuid5(Uuid::NAMESPACE_DNS, b"example.com");
/// assert_eq!(uuid.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
/// assert_eq!(uuid, uuid5(Uuid::NAMESPACE_DNS, b"example.com"));
/// ```
pub fn uuid5(namespace: Uuid, name: &[u8]) -> Uuid {
    let mut hasher = Sha1::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes[6] = 0x50 | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);
    Uuid::from(bytes)
}

#[cfg(test)]
mod tests {
    use super::uuid5;
    use crate::{Uuid, Variant};

    /// Reproduces well-known name-based identifiers
    #[test]
    fn reproduces_well_known_name_based_identifiers() {
        let cases: &[(Uuid, &[u8], &str)] = &[
            (
                Uuid::NAMESPACE_DNS,
                b"example.com",
                "cfbff0d1-9375-5685-968c-48ce8b15ae17",
            ),
            (
                Uuid::NAMESPACE_DNS,
                b"www.example.org",
                "74738ff5-5367-5958-9aee-98fffdcd1876",
            ),
            (
                Uuid::NAMESPACE_DNS,
                b"",
                "4ebd0208-8328-5d69-8c44-ec50939c0967",
            ),
            (
                Uuid::NAMESPACE_URL,
                b"https://example.com/",
                "dd2c1780-811a-5296-81c5-178a0ef488bc",
            ),
            (
                Uuid::NAMESPACE_OID,
                b"1.3.6.1",
                "1447fa61-5277-5fef-a9b3-fbc6e44f4af3",
            ),
            (
                Uuid::NAMESPACE_X500,
                b"cn=John Doe, o=Example",
                "8d1ebb49-6290-5929-bb0b-e7b317e56e2c",
            ),
        ];

        for &(namespace, name, text) in cases {
            assert_eq!(&uuid5(namespace, name).encode() as &str, text);
        }
    }

    /// Generates identical output for identical input pairs
    #[test]
    fn generates_identical_output_for_identical_input_pairs() {
        let names: [&[u8]; 4] = [b"alpha", b"bravo", b"\x00\xff\x80", b""];
        for name in names {
            assert_eq!(
                uuid5(Uuid::NAMESPACE_DNS, name),
                uuid5(Uuid::NAMESPACE_DNS, name)
            );
        }
    }

    /// Generates distinct output when name or namespace differs
    #[test]
    fn generates_distinct_output_when_name_or_namespace_differs() {
        assert_ne!(
            uuid5(Uuid::NAMESPACE_DNS, b"example.com"),
            uuid5(Uuid::NAMESPACE_DNS, b"example.org")
        );
        assert_ne!(
            uuid5(Uuid::NAMESPACE_DNS, b"example.com"),
            uuid5(Uuid::NAMESPACE_URL, b"example.com")
        );

        use std::collections::HashSet;
        let names: Vec<String> = (0..10_000).map(|i| format!("name-{}", i)).collect();
        let s: HashSet<Uuid> = names
            .iter()
            .map(|e| uuid5(Uuid::NAMESPACE_DNS, e.as_bytes()))
            .collect();
        assert_eq!(s.len(), names.len());
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for i in 0..1_000u32 {
            let e = uuid5(Uuid::NAMESPACE_OID, &i.to_be_bytes());
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(5));
        }
    }
}
