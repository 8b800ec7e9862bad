//! Country names for the `country` generator.

use crate::generator::Case;
use crate::source::{CountryProvider, RandomSource, SourceError};
use fake::faker::address::en::CountryName;
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Country names from the `fake` crate's English locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeCountries;

impl CountryProvider for FakeCountries {
    fn next_country(&self, case: Case, rng: &mut dyn RandomSource) -> Result<String, SourceError> {
        // fake drives its own rng; seed it from the injected source
        let mut seed = [0u8; 32];
        rng.bytes(&mut seed)?;
        let mut fake_rng = StdRng::from_seed(seed);

        let name: String = CountryName().fake_with_rng(&mut fake_rng);
        Ok(case.apply(&name))
    }
}
