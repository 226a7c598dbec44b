//! Business Logic Layer: splits the log in games & computes their statistics

pub mod aggregation;
pub mod segmenter;
pub mod summary;

pub use bll_api::{Config, GamesSummarizerApi};
pub use summary::GamesSummarizer;
