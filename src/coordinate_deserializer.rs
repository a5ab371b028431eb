use crate::domain::Coordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.latitude >= -90.0 && inner.latitude <= 90.0) {
            return Err(Error::custom(format!("invalid latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !(inner.longitude >= -180.0 && inner.longitude <= 180.0) {
            return Err(Error::custom(format!("invalid longitude: {}, must be between -180 and 180", inner.longitude)));
        }

        Ok(Coordinate::new(inner.latitude, inner.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_coordinate() -> Result<(), serde_json::Error> {
        let coordinate: Coordinate = serde_json::from_value(json!({ "latitude": 49.2, "longitude": -122.9 }))?;

        assert_eq!(coordinate, Coordinate::new(49.2, -122.9));
        Ok(())
    }

    #[rstest]
    #[case(json!({ "latitude": 95.0, "longitude": 0.0 }), "invalid latitude: 95, must be between -90 and 90")]
    #[case(json!({ "latitude": 0.0, "longitude": -181.0 }), "invalid longitude: -181, must be between -180 and 180")]
    fn rejects_out_of_range_values(#[case] value: serde_json::Value, #[case] message: &str) {
        let result = serde_json::from_value::<Coordinate>(value);

        assert_eq!(result.map_err(|e| e.to_string()), Err(message.to_string()));
    }

    #[test]
    fn rejects_a_missing_longitude() {
        assert!(serde_json::from_value::<Coordinate>(json!({ "latitude": 1.0 })).is_err());
    }
}
