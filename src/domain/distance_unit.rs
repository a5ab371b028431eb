use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "nmi")]
    NauticalMiles,
}

impl DistanceUnit {
    /// Mean Earth radius expressed in this unit.
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 6371.0,
            DistanceUnit::Miles => 3958.8,
            DistanceUnit::Meters => 6_371_000.0,
            DistanceUnit::NauticalMiles => 3440.065,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Meters => "m",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\"km\"", DistanceUnit::Kilometers)]
    #[case("\"mi\"", DistanceUnit::Miles)]
    #[case("\"m\"", DistanceUnit::Meters)]
    #[case("\"nmi\"", DistanceUnit::NauticalMiles)]
    fn deserializes_from_its_symbol(#[case] json: &str, #[case] expected: DistanceUnit) -> Result<(), serde_json::Error> {
        let unit: DistanceUnit = serde_json::from_str(json)?;

        assert_eq!(unit, expected);
        assert_eq!(format!("\"{}\"", unit), json);
        Ok(())
    }

    #[test]
    fn rejects_unknown_units() {
        assert!(serde_json::from_str::<DistanceUnit>("\"furlong\"").is_err());
    }
}
