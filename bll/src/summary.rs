//! Builds the games summary: log lines go in, [GameResult]s come out as each game is finished

use crate::segmenter::GameSegmenter;
use bll_api::{Config, GamesSummarizerApi};
use common::types::Result;
use dal_api::Quake3LogLines;
use model::report::{GameResult, GamesSummary};
use std::future;
use std::sync::Arc;
use futures::{stream, StreamExt};
use log::warn;


/// [GamesSummarizerApi] implementation backed by [GameSegmenter]
pub struct GamesSummarizer {
    config: Arc<Config>,
}

impl GamesSummarizerApi for GamesSummarizer {

    fn new<IntoArcConfig: Into<Arc<Config>>>(config: IntoArcConfig) -> Self {
        Self {
            config: config.into(),
        }
    }

    fn summarize_games(&self, log_dao: Box<dyn Quake3LogLines>) -> Result<GamesSummary> {
        summarize_games(self.config.clone(), log_dao)
    }

}

/// Consumes the lines given by `log_dao`, one at a time, yielding `(game_index, result)` for each finished game.\
/// Lines that couldn't be read are skipped -- unless [Config::stop_on_feed_errors] is set, in which case
/// the error is yielded for the consumer to stop.
pub fn summarize_games(config: Arc<Config>, log_dao: Box<dyn Quake3LogLines>) -> Result<GamesSummary> {

    let stream = log_dao.lines_stream()
        .map_err(|err| format!("summarize_games(): failed at fetching the log lines `Stream`: {err}"))?;

    let mut segmenter = GameSegmenter::new(config.clone());

    let stream = stream
        .map(Some)
        // end of input notification
        .chain(stream::once(future::ready(None)))
        .flat_map(move |line_option| {
            let finished_games: Vec<Result<(u32, GameResult)>> = match line_option {
                Some(Ok(log_line)) => {
                    if segmenter.feed(&log_line.text).is_some() {
                        segmenter.drain_results().map(Ok).collect()
                    } else {
                        vec![]
                    }
                },
                Some(Err(feed_err)) => {
                    if config.stop_on_feed_errors {
                        vec![Err(Box::from(format!("Feed error in game #{}: {feed_err}", segmenter.current_game_index())))]
                    } else {
                        if config.log_issues {
                            warn!("Skipping log line: {feed_err}");
                        }
                        vec![]
                    }
                },
                None => {
                    segmenter.end_of_input();
                    vec![]
                },
            };
            stream::iter(finished_games)
        });
    Ok(Box::pin(stream))
}
