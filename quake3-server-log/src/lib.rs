//! Library for understanding Quake 3 server log lines -- independent of any business rules:
//!   1) [classifier] tells which kind of event a line carries;
//!   2) [deserializer] extracts the data of the events we know how to parse;
//!   3) [means_of_death] names the reasons a player may die.

pub mod types;
pub mod classifier;
pub mod deserializer;
pub mod means_of_death;
