//! Application services — use-case implementations.
//!
//! Each service accepts port trait implementations through constructor
//! injection, keeping this layer decoupled from concrete adapters.

pub mod building_controller;
