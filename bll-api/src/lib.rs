//! Business Logic Layer API: how the games statistics are obtained out of a log lines feed

mod config;
pub use config::*;

use common::types::Result;
use dal_api::Quake3LogLines;
use model::report::GamesSummary;
use std::sync::Arc;


pub trait GamesSummarizerApi {

    /// Creates a new instance
    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self;

    /// Builds the statistics of every game in the log, yielding each game's as soon as it is finished
    fn summarize_games(&self, log_dao: Box<dyn Quake3LogLines>) -> Result<GamesSummary>;

}
