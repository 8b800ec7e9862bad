//! `unicode` generator: random printable characters.

use super::{Case, GenerateError};
use crate::source::RandomSource;

/// Printable code point blocks characters are drawn from.
const BLOCKS: &[(u32, u32)] = &[
    (0x0021, 0x007E), // Basic Latin, no space
    (0x00A1, 0x00FF), // Latin-1 Supplement
    (0x0100, 0x017F), // Latin Extended-A
    (0x0391, 0x03A1), // Greek capitals before the unassigned U+03A2
    (0x03A3, 0x03C9), // Greek
    (0x0410, 0x044F), // Cyrillic
];

/// Largest `length` a template may request.
pub const MAX_UNICODE_LENGTH: usize = 65_536;

/// Exactly `length` code points. Candidates that are not printable, or whose
/// case mapping is not a single code point of the requested case, are redrawn.
pub fn generate(
    rng: &mut dyn RandomSource,
    length: usize,
    case: Case,
) -> Result<String, GenerateError> {
    let mut out = String::with_capacity(length);
    let mut produced = 0;
    while produced < length {
        let candidate = draw(rng)?;
        if let Some(c) = apply_case(candidate, case) {
            out.push(c);
            produced += 1;
        }
    }
    Ok(out)
}

fn draw(rng: &mut dyn RandomSource) -> Result<Option<char>, GenerateError> {
    let total: u32 = BLOCKS.iter().map(|(lo, hi)| hi - lo + 1).sum();
    let mut offset = rng.int(0, i64::from(total) - 1)? as u32;
    for (lo, hi) in BLOCKS {
        let size = hi - lo + 1;
        if offset < size {
            return Ok(char::from_u32(lo + offset).filter(|c| is_printable(*c)));
        }
        offset -= size;
    }
    Ok(None)
}

fn is_printable(c: char) -> bool {
    !c.is_control() && !c.is_whitespace() && c != '\u{00AD}'
}

fn apply_case(candidate: Option<char>, case: Case) -> Option<char> {
    let c = candidate?;
    let mapped = match case {
        Case::AsIs => return Some(c),
        Case::Up => single(c.to_uppercase())?,
        Case::Down => single(c.to_lowercase())?,
    };
    match case {
        Case::Up if mapped.is_lowercase() => None,
        Case::Down if mapped.is_uppercase() => None,
        _ => Some(mapped),
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RngSource;

    #[test]
    fn test_exact_length() {
        let mut rng = RngSource::seeded(42);
        for length in [1, 2, 7, 64] {
            let s = generate(&mut rng, length, Case::AsIs).unwrap();
            assert_eq!(s.chars().count(), length);
        }
    }

    #[test]
    fn test_upper_case() {
        let mut rng = RngSource::seeded(42);
        for _ in 0..200 {
            let s = generate(&mut rng, 2, Case::Up).unwrap();
            assert_eq!(s.chars().count(), 2);
            assert!(s.chars().all(|c| !c.is_lowercase()), "lowercase in {}", s);
        }
    }

    #[test]
    fn test_lower_case() {
        let mut rng = RngSource::seeded(7);
        for _ in 0..200 {
            let s = generate(&mut rng, 3, Case::Down).unwrap();
            assert_eq!(s.chars().count(), 3);
            assert!(s.chars().all(|c| !c.is_uppercase()), "uppercase in {}", s);
        }
    }

    #[test]
    fn test_printable_only() {
        let mut rng = RngSource::seeded(3);
        let s = generate(&mut rng, 500, Case::AsIs).unwrap();
        assert!(s.chars().all(is_printable));
    }

    #[test]
    fn test_multi_char_mappings_are_rejected() {
        // ß upper-cases to "SS"
        assert_eq!(apply_case(Some('ß'), Case::Up), None);
        // ŉ upper-cases to "ʼN"
        assert_eq!(apply_case(Some('ŉ'), Case::Up), None);
        assert_eq!(apply_case(Some('a'), Case::Up), Some('A'));
        assert_eq!(apply_case(Some('Ω'), Case::Down), Some('ω'));
    }
}
