//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the portal:
//! - Client-local key-value storage (in-memory and file-backed)
//! - Timer abstraction for simulated latency
//! - Environment configuration helpers

pub mod config;
pub mod storage;
pub mod timer;
