//! `guid` generator.

use super::GenerateError;
use crate::source::RandomSource;
use uuid::Uuid;

/// Random v4 UUID, lowercase hyphenated.
pub fn generate(rng: &mut dyn RandomSource) -> Result<String, GenerateError> {
    let mut bytes = [0u8; 16];
    rng.bytes(&mut bytes)?;

    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Ok(Uuid::from_bytes(bytes).hyphenated().to_string())
}
