//! Canonical city ordering shared by the dashboard, server list, and charts.

use indexmap::IndexMap;

/// Immutable display order over city names.
///
/// Cities absent from the canonical list sort after all known cities and
/// keep their relative input order.
#[derive(Clone, Debug)]
pub struct CityOrder {
    cities: Vec<String>,
}

impl CityOrder {
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { cities: cities.into_iter().map(Into::into).collect() }
    }

    /// The canonical sequence of known cities.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    fn rank(&self, city: &str) -> usize {
        self.cities.iter().position(|c| c == city).unwrap_or(usize::MAX)
    }

    /// Stable sort of `keys` by canonical position; unknown keys trail.
    pub fn sort_keys<I, S>(&self, keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        keys.sort_by_key(|k| self.rank(k));
        keys
    }

    /// Reorder a city-keyed map into canonical display order.
    pub fn sort_map<V>(&self, mut map: IndexMap<String, V>) -> IndexMap<String, V> {
        map.sort_by(|a, _, b, _| self.rank(a).cmp(&self.rank(b)));
        map
    }
}

impl Default for CityOrder {
    fn default() -> Self {
        Self::new(["Toronto", "Montreal", "Ottawa", "Calgary", "Halifax"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cities_sort_canonically() {
        let order = CityOrder::default();
        let sorted = order.sort_keys(["Halifax", "Calgary", "Toronto"]);
        assert_eq!(sorted, vec!["Toronto", "Calgary", "Halifax"]);
    }

    #[test]
    fn unknown_cities_trail_in_input_order() {
        let order = CityOrder::default();
        let sorted = order.sort_keys(["Halifax", "Unknown1", "Toronto", "Unknown2"]);
        assert_eq!(sorted, vec!["Toronto", "Halifax", "Unknown1", "Unknown2"]);
    }

    #[test]
    fn all_unknown_input_is_returned_complete_and_stable() {
        let order = CityOrder::new(Vec::<String>::new());
        let sorted = order.sort_keys(["Zig", "Alpha", "Mid"]);
        assert_eq!(sorted, vec!["Zig", "Alpha", "Mid"]);
    }

    #[test]
    fn empty_input_is_valid() {
        let order = CityOrder::default();
        assert!(order.sort_keys(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn sort_map_keeps_key_value_pairs() {
        let order = CityOrder::default();
        let mut map = IndexMap::new();
        map.insert("Halifax".to_string(), 3);
        map.insert("Springfield".to_string(), 9);
        map.insert("Toronto".to_string(), 1);
        let sorted = order.sort_map(map);
        let keys: Vec<_> = sorted.keys().cloned().collect();
        assert_eq!(keys, vec!["Toronto", "Halifax", "Springfield"]);
        assert_eq!(sorted["Toronto"], 1);
        assert_eq!(sorted["Halifax"], 3);
        assert_eq!(sorted["Springfield"], 9);
    }
}
