//! Tells the kind of event a log line carries, by looking for the event markers anywhere in the line

use crate::types::LineKind;


pub const GAME_START_MARKER: &str = "InitGame";
pub const GAME_END_MARKER: &str = "ShutdownGame";
pub const PLAYER_INFO_MARKER: &str = "ClientUserinfoChanged";
pub const KILL_MARKER: &str = "Kill";

/// Classifies `log_line` by substring search -- so timestamps or any other prefixes & suffixes are irrelevant.\
/// If more than one marker is present, the precedence is:
/// [LineKind::GameEnd] > [LineKind::GameStart] > [LineKind::PlayerInfoChanged] > [LineKind::Kill]
pub fn classify(log_line: &str) -> LineKind {
    if log_line.contains(GAME_END_MARKER) {
        LineKind::GameEnd
    } else if log_line.contains(GAME_START_MARKER) {
        LineKind::GameStart
    } else if log_line.contains(PLAYER_INFO_MARKER) {
        LineKind::PlayerInfoChanged
    } else if log_line.contains(KILL_MARKER) {
        LineKind::Kill
    } else {
        LineKind::Other
    }
}


/// Unit tests for the [classifier](super) module
#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn game_boundaries() {
        assert_classification(r#"  0:00 InitGame: \sv_floodProtect\1\sv_maxPing\0\sv_minPing\0\sv_maxRate\10000\sv_minRate\0\sv_hostname\Code Miner Server\g_gametype\0"#, LineKind::GameStart);
        assert_classification(r#" 20:37 ShutdownGame:"#, LineKind::GameEnd);
    }

    #[test]
    fn scoring_events() {
        assert_classification(r#" 20:34 ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\xian/default\hmodel\xian/default\g_redteam\\g_blueteam\\c1\4\c2\5\hc\100\w\0\l\0\tt\0\tl\0"#, LineKind::PlayerInfoChanged);
        assert_classification(r#" 20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT"#, LineKind::Kill);
    }

    #[test]
    fn ignored_events() {
        assert_classification(r#"  0:00 ------------------------------------------------------------"#, LineKind::Other);
        assert_classification(r#" 20:34 ClientConnect: 2"#, LineKind::Other);
        assert_classification(r#" 20:37 ClientBegin: 2"#, LineKind::Other);
        assert_classification(r#" 20:40 Item: 2 weapon_rocketlauncher"#, LineKind::Other);
        assert_classification(r#" 11:57 Exit: Fraglimit hit."#, LineKind::Other);
        assert_classification(r#""#, LineKind::Other);
    }

    /// Markers are not anchored: they may be found anywhere, with any surroundings
    #[test]
    fn unanchored_markers() {
        assert_classification(r#"InitGame"#, LineKind::GameStart);
        assert_classification(r#"[2023-10-19 12:00:00] server: ShutdownGame (operator request)"#, LineKind::GameEnd);
        assert_classification(r#"981:26 say: Isgalamido: Kill them all"#, LineKind::Kill);
    }

    /// Lines matching more than one marker follow the documented precedence
    #[test]
    fn marker_precedence() {
        assert_classification(r#" 1:47 ShutdownGame: InitGame"#, LineKind::GameEnd);
        assert_classification(r#" 1:47 InitGame: \sv_hostname\ClientUserinfoChanged Kill server"#, LineKind::GameStart);
        assert_classification(r#" 1:47 ClientUserinfoChanged: 5 n\Killer Queen\t\0"#, LineKind::PlayerInfoChanged);
        assert_classification(r#" 1:47 Kill: 5 2 10: Killer Queen killed ShutdownGame by MOD_RAILGUN"#, LineKind::GameEnd);
    }


    fn assert_classification(log_line: &str, expected_kind: LineKind) {
        assert_eq!(classify(log_line), expected_kind, "Log line '{log_line}' wasn't correctly classified");
    }

}
