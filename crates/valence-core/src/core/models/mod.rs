pub mod coordinate;
pub mod term;
