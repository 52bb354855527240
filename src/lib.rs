//! North Star Canvas - Guided definition of a project's north star
//!
//! This crate implements a three-stage canvas (vision & mission, core values,
//! behavioural guidelines) with a gated stage progression, scenario-based
//! guideline suggestions and session continuity across restarts.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
