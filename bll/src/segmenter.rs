//! Resting place for [GameSegmenter]

use crate::aggregation::aggregate;
use bll_api::Config;
use model::{
    raw_game::RawGameBuffer,
    report::GameResult,
};
use quake3_server_log::{
    classifier::classify,
    types::LineKind,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use log::{debug, warn};


/// Splits a sequence of log lines into games, buffering only the lines needed for the statistics
/// and computing each game's [GameResult] when its boundary is found:
///   - `ShutdownGame` always finishes the current game -- even if nothing was buffered for it;
///   - `InitGame` finishes the current game only if something was buffered, covering logs where a
///     `ShutdownGame` is missing without producing empty games for the regular starts.
///
/// A game still open when the input ends is not finished: see [Self::end_of_input()].
pub struct GameSegmenter {
    config: Arc<Config>,
    current_buffer: RawGameBuffer,
    current_game_index: u32,
    results: BTreeMap<u32, GameResult>,
}

impl GameSegmenter {

    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            current_buffer: RawGameBuffer::default(),
            current_game_index: 1,
            results: BTreeMap::new(),
        }
    }

    /// Processes the next log line, returning the index of the game it finished, if any
    pub fn feed(&mut self, log_line: &str) -> Option<u32> {
        match classify(log_line) {
            LineKind::GameEnd => Some(self.finish_current_game()),
            LineKind::GameStart => (!self.current_buffer.is_empty()).then(|| self.finish_current_game()),
            LineKind::PlayerInfoChanged => {
                self.current_buffer.info_lines.push(log_line.to_owned());
                None
            },
            LineKind::Kill => {
                self.current_buffer.kill_lines.push(log_line.to_owned());
                None
            },
            LineKind::Other => None,
        }
    }

    /// Informs no more lines will come: the game in progress, if any, is discarded --
    /// only `InitGame` & `ShutdownGame` lines finish games
    pub fn end_of_input(&mut self) {
        if self.current_buffer.is_empty() {
            return
        }
        let buffer = std::mem::take(&mut self.current_buffer);
        let msg = format!("Game #{}: the log ended before the game was over -- discarding its {} `Kill` and {} `ClientUserinfoChanged` lines",
                          self.current_game_index, buffer.kill_lines.len(), buffer.info_lines.len());
        if self.config.log_issues {
            warn!("{msg}");
        } else {
            debug!("{msg}");
        }
    }

    /// The index the game in progress will have when finished
    pub fn current_game_index(&self) -> u32 {
        self.current_game_index
    }

    /// The games finished so far, by their indexes
    pub fn results(&self) -> &BTreeMap<u32, GameResult> {
        &self.results
    }

    /// Hands over the games finished so far, leaving none in [Self::results()]
    pub fn drain_results(&mut self) -> impl Iterator<Item=(u32, GameResult)> {
        std::mem::take(&mut self.results).into_iter()
    }

    /// Ends the input & returns all the finished games
    pub fn finish(mut self) -> BTreeMap<u32, GameResult> {
        self.end_of_input();
        self.results
    }

    fn finish_current_game(&mut self) -> u32 {
        let game_index = self.current_game_index;
        let buffer = std::mem::take(&mut self.current_buffer);
        let game_result = aggregate(&self.config, game_index, &buffer);
        debug!("Game #{game_index} finished: {} players, {} kills", game_result.players.len(), game_result.total_kills);
        self.results.insert(game_index, game_result);
        self.current_game_index += 1;
        game_index
    }

}
