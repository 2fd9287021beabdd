//! PR classification and changelog rendering.

pub mod document;
pub mod section;
pub mod select;
pub mod table;

pub use document::render_document;
pub use section::{Section, classify};
pub use select::{ClassifiedPr, Selection, select_in_range};
pub use table::render_table;
