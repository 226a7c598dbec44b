//! Computes the statistics of a finished game out of its buffered log lines -- see [aggregate()]

use bll_api::Config;
use model::{
    raw_game::RawGameBuffer,
    report::GameResult,
    roster::PlayerRoster,
};
use quake3_server_log::{
    deserializer::{deserialize_kill, deserialize_userinfo},
    means_of_death::{try_mean_of_death_name, UNKNOWN_MEAN_OF_DEATH},
};
use std::collections::{BTreeMap, HashMap};
use log::{trace, warn};


/// The first line of every scoreboard
pub const SCOREBOARD_HEADER: &str = "Nickname | Kills | Deaths";

/// Name given to client ids absent from the roster -- `<world>` (id 1022) included
pub const UNKNOWN_PLAYER: &str = "unknown";

/// A scoreboard line, before formatting
#[derive(Debug, PartialEq)]
struct PlayerStats<'a> {
    nickname: &'a str,
    kills: i32,
    deaths: u32,
}

/// Builds the [GameResult] for the game of `game_index`, whose relevant lines are in `buffer`:
///   1) names are resolved from the `ClientUserinfoChanged` lines only -- the last name for an id wins;
///   2) each `Kill` gives a frag to the killer; if the killer is unknown (`<world>`) or the victim itself,
///      the victim loses a frag instead. Either way, the victim gets a death;
///   3) lines that can't be parsed are skipped, but all `Kill` lines count for [GameResult::total_kills].
pub fn aggregate(config: &Config, game_index: u32, buffer: &RawGameBuffer) -> GameResult {

    let roster = build_roster(config, game_index, &buffer.info_lines);

    let mut kills = BTreeMap::<String, i32>::new();
    let mut deaths = HashMap::<String, u32>::new();
    let mut kills_by_means = BTreeMap::<String, usize>::new();

    for kill_line in &buffer.kill_lines {
        let kill = match deserialize_kill(kill_line) {
            Ok(kill) => kill,
            Err(parsing_err) => {
                report_issue(config, format!("Game #{game_index}: skipping unparseable `Kill` line '{kill_line}': {parsing_err:?}"));
                continue
            },
        };
        let killer = kill.killer_id.and_then(|client_id| roster.name_of(client_id)).unwrap_or(UNKNOWN_PLAYER);
        let victim = kill.victim_id.and_then(|client_id| roster.name_of(client_id)).unwrap_or(UNKNOWN_PLAYER);
        tally_kill(&mut kills, &mut deaths, killer, victim);

        let mean_of_death = kill.reason_id.and_then(try_mean_of_death_name)
            .unwrap_or_else(|| {
                report_issue(config, format!("Game #{game_index}: unknown mean of death in `Kill` line '{kill_line}'"));
                UNKNOWN_MEAN_OF_DEATH
            });
        kills_by_means.entry(mean_of_death.to_owned())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    let players = roster.distinct_names();
    let mut scoreboard = players.iter()
        .map(|&nickname| PlayerStats {
            nickname,
            kills: kills.get(nickname).copied().unwrap_or(0),
            deaths: deaths.get(nickname).copied().unwrap_or(0),
        })
        .collect::<Vec<_>>();
    // stable: ties keep the roster order
    scoreboard.sort_by(|a, b| b.kills.cmp(&a.kills));

    GameResult {
        players: players.into_iter().map(str::to_owned).collect(),
        kills,
        total_kills: buffer.kill_lines.len(),
        kills_by_means,
        scoreboard: format_scoreboard(&scoreboard),
    }
}

/// Resolves client ids into nick names, out of `ClientUserinfoChanged` lines
pub fn build_roster(config: &Config, game_index: u32, info_lines: &[String]) -> PlayerRoster {
    let mut roster = PlayerRoster::default();
    for info_line in info_lines {
        match deserialize_userinfo(info_line) {
            Ok(userinfo) => roster.set_name(userinfo.client_id, userinfo.name),
            Err(parsing_err) => report_issue(config, format!("Game #{game_index}: skipping unparseable `ClientUserinfoChanged` line '{info_line}': {parsing_err:?}")),
        }
    }
    roster
}

/// Self kills & kills by `<world>` are penalties for the victim: its frags go down
fn tally_kill(kills: &mut BTreeMap<String, i32>, deaths: &mut HashMap<String, u32>, killer: &str, victim: &str) {
    if killer == UNKNOWN_PLAYER || killer == victim {
        kills.entry(victim.to_owned())
            .and_modify(|frags| *frags -= 1)
            .or_insert(-1);
    } else {
        kills.entry(killer.to_owned())
            .and_modify(|frags| *frags += 1)
            .or_insert(1);
    }
    deaths.entry(victim.to_owned())
        .and_modify(|count| *count += 1)
        .or_insert(1);
}

fn format_scoreboard(scoreboard: &[PlayerStats]) -> Vec<String> {
    std::iter::once(SCOREBOARD_HEADER.to_owned())
        .chain(scoreboard.iter()
            .map(|PlayerStats { nickname, kills, deaths }| format!("{nickname} | {kills} | {deaths}")))
        .collect()
}

fn report_issue(config: &Config, msg: String) {
    if config.log_issues {
        warn!("{msg}");
    } else {
        trace!("{msg}");
    }
}
