//! North star module - the document the canvas produces.
//!
//! The document is the shared data every other component reads: the stage
//! gate derives completion from it, the session layer persists it and the
//! suggestion matcher consults its values.

mod core_value;
mod document;
mod progress;

pub use core_value::CoreValue;
pub use document::NorthStarDocument;
pub use progress::StageProgress;
