//! Canvas module - the gated three-stage progression.
//!
//! The `Canvas` aggregate pairs the north-star document with the stage gate
//! and records an event for every successful change so the session layer
//! knows when to persist.

mod aggregate;
mod events;
pub mod gate;
mod stage;
mod view;

pub use aggregate::Canvas;
pub use events::CanvasEvent;
pub use gate::{CanvasState, GateOutcome, GateTrigger, TransitionKind};
pub use stage::CanvasStage;
pub use view::{CanvasView, StageStatus, StageView};
