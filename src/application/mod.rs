//! Application layer - Session orchestration.
//!
//! - `SessionContinuity` - load-at-start and save-on-mutation for the document
//! - `CanvasService` - the session handle wiring canvas, persistence,
//!   suggestions and completion handoff together

mod canvas_service;
mod session_continuity;

pub use canvas_service::{AdoptedGuideline, CanvasService};
pub use session_continuity::{SaveOutcome, SessionContinuity};
