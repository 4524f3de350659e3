use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::City;

/// Random city picker that avoids repeats until every city has been served.
///
/// Cities are told apart by name only, so two cities sharing a name in
/// different countries count as one for exclusion purposes.
#[derive(Debug, Clone)]
pub struct CityRotator {
    cities: Vec<City>,
    used: Vec<City>,
}

impl CityRotator {
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            used: Vec::new(),
        }
    }

    /// Cities served so far in the current cycle.
    pub fn used(&self) -> &[City] {
        &self.used
    }

    /// Pick the next city using the thread-local RNG.
    pub fn pick(&mut self) -> Option<City> {
        self.pick_with(&mut rand::rng())
    }

    /// Pick the next city. Returns `None` only if the city list is empty.
    pub fn pick_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<City> {
        if self.used.len() >= self.cities.len() {
            self.used.clear();
        }

        let mut available: Vec<&City> = self
            .cities
            .iter()
            .filter(|city| !self.used.iter().any(|used| used.name == city.name))
            .collect();

        if available.is_empty() {
            self.used.clear();
            available = self.cities.iter().collect();
        }

        let city = (*available.choose(rng)?).clone();
        log::debug!(
            "picked {} ({} of {} used this cycle)",
            city.name,
            self.used.len() + 1,
            self.cities.len()
        );
        self.used.push(city.clone());
        Some(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn city(name: &str, country: &str) -> City {
        City {
            name: name.to_string(),
            country: country.to_string(),
            country_code: country[..2].to_uppercase(),
            lat: 0.0,
            lon: 0.0,
        }
    }

    fn sample_cities() -> Vec<City> {
        vec![
            city("Moscow", "Russia"),
            city("Paris", "France"),
            city("Tokyo", "Japan"),
            city("Cairo", "Egypt"),
            city("Lima", "Peru"),
        ]
    }

    #[test]
    fn full_cycle_has_no_repeats() {
        let cities = sample_cities();
        let mut rotator = CityRotator::new(cities.clone());
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = HashSet::new();
        for _ in 0..cities.len() {
            let picked = rotator.pick_with(&mut rng).expect("non-empty list");
            assert!(seen.insert(picked.name.clone()), "{} repeated", picked.name);
        }
        assert_eq!(seen.len(), cities.len());
        assert_eq!(rotator.used().len(), cities.len());
    }

    #[test]
    fn next_pick_after_cycle_starts_over() {
        let cities = sample_cities();
        let mut rotator = CityRotator::new(cities.clone());
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..cities.len() {
            rotator.pick_with(&mut rng);
        }
        let picked = rotator.pick_with(&mut rng).expect("non-empty list");
        assert!(cities.contains(&picked));
        assert_eq!(rotator.used(), std::slice::from_ref(&picked));
    }

    #[test]
    fn picks_stay_within_the_list() {
        let cities = sample_cities();
        let mut rotator = CityRotator::new(cities.clone());
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let picked = rotator.pick_with(&mut rng).expect("non-empty list");
            assert!(cities.contains(&picked));
            assert!(rotator.used().len() <= cities.len());
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        let mut rotator = CityRotator::new(Vec::new());
        assert_eq!(rotator.pick(), None);
    }

    #[test]
    fn single_city_repeats_every_pick() {
        let mut rotator = CityRotator::new(vec![city("Oslo", "Norway")]);
        for _ in 0..3 {
            assert_eq!(rotator.pick().map(|c| c.name), Some("Oslo".to_string()));
        }
    }

    #[test]
    fn same_name_cities_are_excluded_together() {
        let mut rotator =
            CityRotator::new(vec![city("Paris", "France"), city("Paris", "USA")]);
        let mut rng = StdRng::seed_from_u64(3);

        rotator.pick_with(&mut rng);
        // Both "Paris" entries are now excluded, so the list is reset.
        let second = rotator.pick_with(&mut rng).expect("non-empty list");
        assert_eq!(second.name, "Paris");
        assert_eq!(rotator.used().len(), 1);
    }
}
