pub mod fields;

pub use fields::{StoredField, fetch_fields};
