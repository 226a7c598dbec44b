//! Contains the per-game results used to build reports

use common::types::Result;
use std::collections::BTreeMap;
use std::pin::Pin;
use futures::Stream;


/// The `Stream` of finished games, as produced by the Business Logic Layer:
/// each item is `(game_index, result)`, with `game_index` starting at 1
pub type GamesSummary = Pin<Box<dyn Stream<Item=Result<(u32, GameResult)>>>>;

/// The statistics of a finished game match
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameResult {
    /// The distinct names known for the players, in the order they were first seen
    pub players: Vec<String>,
    /// The frag score for the players involved in kills. Self & world kills subtract from the victim,
    /// so scores may be negative
    pub kills: BTreeMap<String, i32>,
    /// How many `Kill` events happened in the game -- regardless of who was involved
    pub total_kills: usize,
    /// Kills count by the means of death's name
    pub kills_by_means: BTreeMap<String, usize>,
    /// Textual ranking: a header followed by one `"<name> | <kills> | <deaths>"` line per player
    pub scoreboard: Vec<String>,
}

/// The key identifying the game of the given index in reports
pub fn game_key(game_index: u32) -> String {
    format!("game_{game_index}")
}
