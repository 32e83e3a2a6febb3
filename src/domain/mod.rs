pub mod field;

pub use field::{DEFAULT_COLOR, FieldPolygon};
