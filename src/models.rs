//! GeoJSON output document structures.
//!
//! Hand-rolled rather than a generic GeoJSON builder because the property
//! key order is part of the output contract: consumers expect
//! {team, league, stadium, capacity, icon}, with league before capacity.
//! Serde serializes struct fields in declaration order, which pins it.

use serde::{Deserialize, Serialize};

/// Top-level feature collection, written once at the end of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            collection_type: "FeatureCollection".to_string(),
            features,
        }
    }
}

/// One stadium as a GeoJSON Point feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: PointGeometry,
    pub properties: StadiumProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// (longitude, latitude), GeoJSON axis order.
    pub coordinates: (f64, f64),
}

/// Field declaration order here is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StadiumProperties {
    pub team: String,
    pub league: String,
    pub stadium: String,
    pub capacity: u32,
    pub icon: String,
}

impl Feature {
    /// Build a stadium feature from a resolved coordinate and capacity.
    pub fn stadium(
        team: &str,
        league: &str,
        stadium: &str,
        capacity: u32,
        coordinates: (f64, f64),
    ) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            geometry: PointGeometry {
                geometry_type: "Point".to_string(),
                coordinates,
            },
            properties: StadiumProperties {
                team: team.to_string(),
                league: league.to_string(),
                stadium: stadium.to_string(),
                capacity,
                icon: icon_path(team),
            },
        }
    }
}

/// Map icon path derived from the team name: lowercased, spaces to
/// underscores. Purely nominal; nothing checks the file exists.
pub fn icon_path(team: &str) -> String {
    format!("icons/{}.png", team.to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_path() {
        assert_eq!(icon_path("Arsenal"), "icons/arsenal.png");
        assert_eq!(
            icon_path("Sheffield Wednesday"),
            "icons/sheffield_wednesday.png"
        );
    }

    #[test]
    fn test_property_key_order() {
        let feature = Feature::stadium(
            "Arsenal",
            "Premier League",
            "Emirates Stadium",
            60704,
            (-0.108611, 51.554886),
        );
        let encoded = serde_json::to_string(&feature).unwrap();

        let positions: Vec<usize> = ["\"team\"", "\"league\"", "\"stadium\"", "\"capacity\"", "\"icon\""]
            .iter()
            .map(|key| encoded.find(key).unwrap())
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "property keys out of order in {encoded}"
        );
    }

    #[test]
    fn test_round_trip_preserves_coordinates() {
        let collection = FeatureCollection::new(vec![Feature::stadium(
            "Arsenal",
            "Premier League",
            "Emirates Stadium",
            60704,
            (-0.10861113865491384, 51.55488624531908),
        )]);
        let encoded = serde_json::to_string_pretty(&collection).unwrap();
        let decoded: FeatureCollection = serde_json::from_str(&encoded).unwrap();
        assert_eq!(
            decoded.features[0].geometry.coordinates,
            (-0.10861113865491384, 51.55488624531908)
        );
    }
}
