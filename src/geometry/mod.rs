pub mod area;
pub mod centroid;
pub mod format;
pub mod ring;
pub mod simplify;

pub use area::ring_area_m2;
pub use centroid::ring_centroid;
pub use format::{UnitLabels, UnitSystem, format_area};
pub use ring::{is_closed, normalize_ring};
pub use simplify::{epsilon_from_meters, simplify_ring};
