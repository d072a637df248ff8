/// User-facing diary operations
///
/// This module contains the operations the presentation layer invokes:
/// saving a day's entry, editing an existing one, running a filtered
/// report and exporting it to a text file.

pub mod edit;
pub mod export;
pub mod log;
pub mod report;

// Re-export operation functions for easy access
pub use edit::*;
pub use export::*;
pub use log::*;
pub use report::*;
