//! Utilities shared by every crate in the workspace

pub mod types;
