//! Small crate to be a central point for presentation requisites.
//!
//! Simply shows the `Stream` of game results as a Json

mod config;
pub use config::Config;

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Write;
use log::warn;
use model::report::{game_key, GamesSummary};

/// Writes `{"game_1": {...}, "game_2": {...}, ...}` as the games in `games_summary_stream` are finished.\
/// `kills` & `kills_by_means` keys come sorted by name -- not in the order they were first tallied.\
/// IMPLEMENTATION NOTE: here we use our hand-crafted json instead of the one provided by the serde-json crate so we can
///                      control the order of the fields & the formatting of the output
pub fn to_json(config: &Config, games_summary_stream: GamesSummary, mut writer: impl Write) -> Result<(), Box<dyn std::error::Error>> {

    let mut write = |text: &str|
        writer.write_all(text.as_bytes())
            .map_err(|err| format!("presentation: to_json(): Error writing `GameResult` to the given `writer`: {err}"));

    let mut games_written = 0;
    let games_summary_stream = futures::executor::block_on_stream(games_summary_stream);
    write("{")?;
    for summary_result in games_summary_stream {
        match summary_result {
            Ok((game_index, game)) => {
                if games_written > 0 {
                    write(",")?;
                }
                write(&format!("\n  {}: {{\n", escape(&game_key(game_index))))?;
                write(&format!("    \"players\": {},\n", serialize_vec(&game.players)))?;
                write(&format!("    \"kills\": {},\n", serialize_map("    ", &game.kills)))?;
                write(&format!("    \"total_kills\": {},\n", game.total_kills))?;
                write(&format!("    \"kills_by_means\": {},\n", serialize_map("    ", &game.kills_by_means)))?;
                write(&format!("    \"scoreboard\": {}\n", serialize_vec(&game.scoreboard)))?;
                write("  }")?;
                games_written += 1;
            },

            Err(summary_err) => {
                let msg = format!("presentation: to_json(): Error in `games_summary_stream` after {games_written} games were written: {summary_err}");
                if config.log_errors {
                    warn!("{msg}");
                }
                if config.stop_on_errors {
                    return Err(Box::from(msg))
                }
            }
        }
    }
    write(if games_written > 0 { "\n}\n" } else { "}\n" })?;
    writer.flush()
        .map_err(|err| format!("presentation: to_json(): Error flushing the given `writer`: {err}"))?;
    Ok(())
}

/// Quotes `text` as a Json string
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('"');
    for character in text.chars() {
        match character {
            '"'  => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            control if control.is_control() => escaped.push_str(&format!("\\u{:04x}", control as u32)),
            _ => escaped.push(character),
        }
    }
    escaped.push('"');
    escaped
}

fn serialize_vec(vec: &[String]) -> String {
    let mut string = vec.iter()
        .fold(String::from("["), |mut acc, element| {
            if acc.len() != 1 {
                acc.push_str(", ");
            }
            acc.push_str(&escape(element));
            acc
        });
    string.push(']');
    string
}

fn serialize_map<T: Display>(pre_ident: &str, map: &BTreeMap<String, T>) -> String {
    if map.is_empty() {
        return String::from("{}")
    }
    let mut string = map.iter()
        .fold(String::from("{"), |mut acc, (key, value)| {
            if acc.len() != 1 {
                acc.push(',');
            }
            acc.push_str("\n  ");
            acc.push_str(pre_ident);
            acc.push_str(&format!("{}: {value}", escape(key)));
            acc
        });
    string.push('\n');
    string.push_str(pre_ident);
    string.push('}');
    string
}
