//! Data Access Layer: implementations of [dal_api::Quake3LogLines] & the [factory] to pick one of them

pub mod factory;
pub mod sync_file_reader;
pub mod sync_reader;
pub mod stdin_reader;
