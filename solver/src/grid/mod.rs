mod bounded;
mod cell;
mod parse;
mod position;
mod weights;

pub use bounded::Grid;
pub use cell::Cell;
pub use parse::ParsedMap;
pub use position::{Coordinate, Direction};
pub use weights::{WEIGHT_RANGE, WeightGrid};
