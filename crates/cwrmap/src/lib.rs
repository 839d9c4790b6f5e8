pub mod loader;
pub mod model;
pub mod output;
pub mod scan;

pub use model::FieldRecord;
pub use scan::extract_fields;
