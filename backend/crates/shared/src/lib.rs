//! Shared Kernel - Portal-wide minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the portal:
//! - The user-facing error type and its classification
//! - Typed identifier wrappers
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the client and admin portals.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;
