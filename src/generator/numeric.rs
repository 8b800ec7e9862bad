//! `int` and `float` generators.

use super::GenerateError;
use crate::source::RandomSource;

pub fn int(rng: &mut dyn RandomSource, min: i64, max: i64) -> Result<String, GenerateError> {
    Ok(rng.int(min, max)?.to_string())
}

/// Shortest decimal text that round-trips, never in exponent notation.
pub fn float(rng: &mut dyn RandomSource, min: f64, max: f64) -> Result<String, GenerateError> {
    Ok(rng.float(min, max)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RngSource;

    #[test]
    fn test_negative_int_range() {
        let mut rng = RngSource::seeded(42);
        for _ in 0..100 {
            let v: i64 = int(&mut rng, -2000, 0).unwrap().parse().unwrap();
            assert!((-2000..=0).contains(&v));
        }
    }

    #[test]
    fn test_float_is_plain_decimal() {
        let mut rng = RngSource::seeded(42);
        for _ in 0..100 {
            let text = float(&mut rng, -1000.0, -540.0).unwrap();
            assert!(!text.contains('e'), "unexpected exponent in {}", text);
            let v: f64 = text.parse().unwrap();
            assert!((-1000.0..=-540.0).contains(&v));
        }
    }
}
