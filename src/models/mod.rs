pub mod directions;
pub mod envelope;
pub mod params;
pub mod place;
pub mod records;
