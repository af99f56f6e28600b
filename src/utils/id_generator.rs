//! Product identifier generation and parsing.
//!
//! Identifiers follow the object-id layout: 4 bytes of big-endian Unix
//! seconds followed by 8 random bytes, rendered as 24 lowercase hex
//! characters. The timestamp prefix keeps identifiers roughly ordered by
//! creation time.

use chrono::Utc;

/// Number of raw bytes in an identifier.
const ID_LENGTH_BYTES: usize = 12;

/// Length of the hex-encoded identifier.
pub const ID_LENGTH_HEX: usize = ID_LENGTH_BYTES * 2;

/// Generates a new identifier.
///
/// # Examples
///
/// ```ignore
/// let id = generate_id();
/// assert_eq!(id.len(), 24);
/// assert!(normalize_id(&id).is_some());
/// ```
pub fn generate_id() -> String {
    let seconds = Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32;
    let random: [u8; 8] = rand::random();

    let mut buffer = [0u8; ID_LENGTH_BYTES];
    buffer[..4].copy_from_slice(&seconds.to_be_bytes());
    buffer[4..].copy_from_slice(&random);

    hex::encode(buffer)
}

/// Normalizes a client-supplied identifier.
///
/// Returns `None` when the input is not exactly 24 hex characters. Upper-case
/// digits are accepted and lowered.
pub fn normalize_id(raw: &str) -> Option<String> {
    if raw.len() != ID_LENGTH_HEX || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    Some(raw.to_ascii_lowercase())
}
