use crate::domain::{Coordinate, DistanceUnit, InvalidCoordinateRange};
use thiserror::Error;

/// Great-circle distance between two points using the haversine formula.
///
/// Both points must be within range, an invalid point yields an error instead of a meaningless distance.
pub fn distance(from: &Coordinate, to: &Coordinate, unit: DistanceUnit) -> Result<f64, GeoDistanceError> {
    from.validate()?;
    to.validate()?;

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    // Rounding can push `a` just past 1 for antipodal points
    let a = ((delta_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2)).clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(unit.earth_radius() * c)
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeoDistanceError {
    #[error(transparent)]
    InvalidCoordinateRange(#[from] InvalidCoordinateRange),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KPU_SURREY_LIBRARY;
    use rstest::rstest;
    use std::f64::consts::PI;

    fn assert_relative_eq(left: f64, right: f64, tolerance: f64) {
        let scale = left.abs().max(right.abs()).max(f64::MIN_POSITIVE);
        assert!((left - right).abs() / scale <= tolerance, "{} != {} (tolerance {})", left, right, tolerance);
    }

    #[test]
    fn one_degree_of_longitude_on_the_equator() -> Result<(), GeoDistanceError> {
        let result = distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0), DistanceUnit::Kilometers)?;

        assert!((result - 111.19).abs() < 0.5, "unexpected distance {}", result);
        Ok(())
    }

    #[rstest]
    #[case(DistanceUnit::Kilometers)]
    #[case(DistanceUnit::Miles)]
    #[case(DistanceUnit::Meters)]
    #[case(DistanceUnit::NauticalMiles)]
    fn the_distance_to_the_library_from_itself_is_zero(#[case] unit: DistanceUnit) -> Result<(), GeoDistanceError> {
        assert_eq!(distance(&KPU_SURREY_LIBRARY, &KPU_SURREY_LIBRARY, unit)?, 0.0);
        Ok(())
    }

    #[rstest]
    #[case(Coordinate::new(0.0, 0.0))]
    #[case(Coordinate::new(90.0, 180.0))]
    #[case(Coordinate::new(-33.8688, 151.2093))]
    #[case(Coordinate::new(49.2, -122.9))]
    fn the_distance_from_a_point_to_itself_is_zero(#[case] point: Coordinate) -> Result<(), GeoDistanceError> {
        assert_eq!(distance(&point, &point, DistanceUnit::Kilometers)?, 0.0);
        Ok(())
    }

    #[rstest]
    #[case(Coordinate::new(49.2, -122.9), KPU_SURREY_LIBRARY)]
    #[case(Coordinate::new(51.5074, -0.1278), Coordinate::new(40.7128, -74.0060))]
    #[case(Coordinate::new(-33.8688, 151.2093), Coordinate::new(35.6762, 139.6503))]
    #[case(Coordinate::new(0.0, 179.5), Coordinate::new(0.0, -179.5))]
    #[case(Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0))]
    fn is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) -> Result<(), GeoDistanceError> {
        for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles] {
            assert_relative_eq(distance(&a, &b, unit)?, distance(&b, &a, unit)?, 1e-9);
        }
        Ok(())
    }

    #[rstest]
    #[case(Coordinate::new(49.2, -122.9), KPU_SURREY_LIBRARY)]
    #[case(Coordinate::new(51.5074, -0.1278), Coordinate::new(40.7128, -74.0060))]
    #[case(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0))]
    fn miles_are_consistent_with_kilometers(#[case] a: Coordinate, #[case] b: Coordinate) -> Result<(), GeoDistanceError> {
        let km = distance(&a, &b, DistanceUnit::Kilometers)?;
        let miles = distance(&a, &b, DistanceUnit::Miles)?;

        assert_relative_eq(miles, km * 0.621371, 1e-3);
        Ok(())
    }

    #[rstest]
    #[case(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0))]
    #[case(Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0))]
    #[case(Coordinate::new(-87.843, -179.0), Coordinate::new(87.843, 1.0))]
    #[case(Coordinate::new(45.0, 10.0), Coordinate::new(-45.0, -170.0))]
    #[case(Coordinate::new(-12.5, 179.0), Coordinate::new(12.5, -1.0))]
    #[case(KPU_SURREY_LIBRARY, Coordinate::new(-49.13196, 57.12877))]
    fn antipodal_points_are_half_a_circumference_apart(#[case] a: Coordinate, #[case] b: Coordinate) -> Result<(), GeoDistanceError> {
        let result = distance(&a, &b, DistanceUnit::Kilometers)?;

        assert!(!result.is_nan());
        assert!((result - PI * 6371.0).abs() < 1e-3, "unexpected distance {}", result);
        Ok(())
    }

    #[test]
    fn no_antipodal_pair_yields_nan() -> Result<(), GeoDistanceError> {
        for lat in -89..=89 {
            for lon in (-180..180).step_by(10) {
                let a = Coordinate::new(lat as f64 + 0.843, lon as f64);
                let b = Coordinate::new(-a.latitude, if lon < 0 { lon as f64 + 180.0 } else { lon as f64 - 180.0 });
                let result = distance(&a, &b, DistanceUnit::Kilometers)?;

                assert!(!result.is_nan(), "NaN distance between {:?} and {:?}", a, b);
            }
        }
        Ok(())
    }

    #[test]
    fn crosses_the_antimeridian_the_short_way() -> Result<(), GeoDistanceError> {
        let result = distance(&Coordinate::new(0.0, 179.5), &Coordinate::new(0.0, -179.5), DistanceUnit::Kilometers)?;

        assert!((result - 111.19).abs() < 0.5, "unexpected distance {}", result);
        Ok(())
    }

    #[test]
    fn fails_for_an_out_of_range_latitude() {
        let result = distance(&Coordinate::new(95.0, 0.0), &KPU_SURREY_LIBRARY, DistanceUnit::Kilometers);

        assert_eq!(
            result,
            Err(GeoDistanceError::InvalidCoordinateRange(InvalidCoordinateRange {
                latitude: 95.0,
                longitude: 0.0
            }))
        );
    }

    #[test]
    fn fails_for_an_out_of_range_longitude_on_the_destination() {
        let result = distance(&KPU_SURREY_LIBRARY, &Coordinate::new(0.0, 181.0), DistanceUnit::Miles);

        assert!(matches!(result, Err(GeoDistanceError::InvalidCoordinateRange(_))));
    }
}
