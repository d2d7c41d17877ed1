//! Adapters for external crates

pub mod config;
pub mod email;
pub mod templates;
