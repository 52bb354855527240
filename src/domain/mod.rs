//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `north_star` - The north-star document and its derived stage progress
//! - `canvas` - Stage gate state machine and the canvas aggregate
//! - `catalog` - Read-only reference data (predefined values, scenarios)
//! - `suggestion` - Scenario suggestion matching

pub mod canvas;
pub mod catalog;
pub mod foundation;
pub mod north_star;
pub mod suggestion;
