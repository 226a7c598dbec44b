//! Contains some types used for domain specific entities

use std::result;


/// The `Result` used across the workspace: errors are boxed and carry a descriptive message,
/// built with `format!()` at the point where the context is known
pub type Result<T> = result::Result<T, Box<dyn std::error::Error>>;
