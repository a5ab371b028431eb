mod coordinate;
mod distance_unit;
mod position;

pub use coordinate::{Coordinate, InvalidCoordinateRange, KPU_SURREY_LIBRARY, KPU_SURREY_LIBRARY_NAME};
pub use distance_unit::DistanceUnit;
pub use position::Position;
