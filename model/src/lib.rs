//! Business entities shared by the layers of the application:
//!   - [log_lines]: what the Data Access Layer feeds in;
//!   - [raw_game] & [roster]: the intermediate per-game state the Business Logic Layer works on;
//!   - [report]: what the Business Logic Layer hands out for presentation.

pub mod log_lines;
pub mod raw_game;
pub mod roster;
pub mod report;
