pub mod containment;
pub mod dates;
pub mod generator;
