//! # smartbuilding-domain
//!
//! Pure domain model for the smartbuilding controller.
//!
//! ## Responsibilities
//! - Foundational types: the case-insensitive [`BuildingId`](id::BuildingId)
//!   and the error conventions shared across the workspace
//! - Define the **operating states** (`closed`, `out of hours`, `open`,
//!   `fire drill`, `fire alarm`) and their normal/emergency partition
//! - Define the **controller record** and enforce its invariants (the last
//!   normal state is never an emergency state)
//! - Derive **fault summaries** from collaborator status strings
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Collaborators are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod fault;
pub mod id;
pub mod record;
pub mod state;
