//! Hash-derived stable identifiers.

use uuid::Uuid;

/// Derives a stable 128-bit identifier from a string.
///
/// The result is the first 16 bytes of the BLAKE3 hash of the UTF-8
/// input, wrapped in a [`Uuid`]. It is not a version 1-5 UUID in the
/// technical sense; it is a stable, opaque identifier for places that
/// require the UUID shape, such as UNIQUEIDENTIFIER columns keyed on
/// once-user-specified data.
///
/// # Example
///
/// ```
/// use sniffrs::string::stable_uuid;
///
/// let a = stable_uuid("user:alice");
/// let b = stable_uuid("user:alice");
/// assert_eq!(a, b);
/// assert_ne!(a, stable_uuid("user:bob"));
/// ```
pub fn stable_uuid(input: &str) -> Uuid {
    let hash = blake3::hash(input.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash.as_bytes()[..16]);
    Uuid::from_bytes(bytes)
}
