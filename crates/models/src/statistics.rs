//! Derived fleet health statistics. Recomputed on demand, never persisted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-city health counts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CityStatistics {
    pub city: String,
    pub total_count: usize,
    pub online_count: usize,
    pub offline_count: usize,
}

impl CityStatistics {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into(), ..Default::default() }
    }
}

/// Aggregate fleet statistics. Both maps iterate and serialize in canonical
/// city order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerStatistics {
    pub total_count: usize,
    pub online_count: usize,
    pub offline_count: usize,
    /// Online share in percent, 0.0..=100.0.
    pub online_percentage: f64,
    pub city_counts: IndexMap<String, usize>,
    pub cities: IndexMap<String, CityStatistics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_city_maps_in_insertion_order() {
        let mut cities = IndexMap::new();
        cities.insert("Toronto".to_string(), CityStatistics::new("Toronto"));
        cities.insert("Halifax".to_string(), CityStatistics::new("Halifax"));
        let stats = ServerStatistics {
            total_count: 0,
            online_count: 0,
            offline_count: 0,
            online_percentage: 0.0,
            city_counts: cities.keys().map(|k| (k.clone(), 0)).collect(),
            cities,
        };
        let json = serde_json::to_string(&stats).expect("serialize");
        let toronto = json.find("Toronto").expect("toronto in json");
        let halifax = json.find("Halifax").expect("halifax in json");
        assert!(toronto < halifax);
    }
}
