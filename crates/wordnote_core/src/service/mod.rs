//! Event wiring between the view, the store and the query pipeline.
//!
//! # Responsibility
//! - Turn user actions into store mutations followed by a re-render.
//! - Keep front ends decoupled from storage and query details.

pub mod note_service;
pub mod view;
