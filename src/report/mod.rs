/// Report generation: date-range filters and the text export format

pub mod filter;
pub mod text;

// Re-export the report types
pub use filter::*;
pub use text::*;
