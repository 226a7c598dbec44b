//! Extracts the data of the Quake 3 log events we care about.
//!
//! No regular expressions are used here: the data formats are so simple that `std::str` scanning is
//! both simpler & a lot faster -- see `benches/parsing_strategies.rs` for the numbers.
//!
//! Like the classifier, the parsers are unanchored: the event prefix is searched anywhere in the line
//! and the first occurrence followed by well-formed data wins.

use crate::types::{KillRecord, UserinfoRecord};


const KILL_PREFIX: &str = "Kill: ";
const USERINFO_PREFIX: &str = "ClientUserinfoChanged: ";
/// Between the client id and the name, in `ClientUserinfoChanged` data
const NAME_KEY: &str = " n\\";

#[derive(Debug, PartialEq)]
pub enum LineParsingError {
    /// The line doesn't contain the event prefix at all
    MissingPrefix { prefix: &'static str },
    /// A numeric field has digits, but they don't fit the expected type
    UnparseableNumber { key_name: &'static str, observed_data: String },
    /// The event prefix is there, but what follows it isn't in the expected form
    UnknownDataFormat { description: String },
}

/// Parses lines in the form `... Kill: <KILLER_ID> <VICTIM_ID> <REASON_ID>...`.\
/// Ids too big for a `u32` are given as `None` rather than failing the line.\
/// Anything after the reason id digits -- usually `: <KILLER_NAME> killed <VICTIM_NAME> by <REASON_NAME>` -- is ignored.
pub fn deserialize_kill(log_line: &str) -> Result<KillRecord, LineParsingError> {
    first_match(log_line, KILL_PREFIX, kill_from_data)
}

/// Parses lines in the form `... ClientUserinfoChanged: <CLIENT_ID> n\<NAME>\key2\val2...`,
/// where `<NAME>` goes up to the next `\` or tab.
pub fn deserialize_userinfo(log_line: &str) -> Result<UserinfoRecord<'_>, LineParsingError> {
    first_match(log_line, USERINFO_PREFIX, userinfo_from_data)
}

/// Applies `parse_data` after each occurrence of `prefix`, returning the first success or the last error
fn first_match<'a, T>(log_line: &'a str,
                      prefix: &'static str,
                      parse_data: impl Fn(&'a str) -> Result<T, LineParsingError>)
                     -> Result<T, LineParsingError> {
    let mut last_err = LineParsingError::MissingPrefix { prefix };
    for (position, _) in log_line.match_indices(prefix) {
        match parse_data(&log_line[position + prefix.len()..]) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => last_err = err,
        }
    }
    Err(last_err)
}

fn kill_from_data(data: &str) -> Result<KillRecord, LineParsingError> {
    let data_format_error = || LineParsingError::UnknownDataFormat { description: format!("`Kill` data doesn't appear to be in the form '<KILLER_ID> <VICTIM_ID> <REASON_ID>': data is '{data}'") };
    let (killer_digits, remainder) = leading_digits(data, "killer id")?;
    let remainder = remainder.strip_prefix(' ').ok_or_else(data_format_error)?;
    let (victim_digits, remainder) = leading_digits(remainder, "victim id")?;
    let remainder = remainder.strip_prefix(' ').ok_or_else(data_format_error)?;
    let (reason_digits, _) = leading_digits(remainder, "reason id")?;
    Ok(KillRecord {
        killer_id: killer_digits.parse().ok(),
        victim_id: victim_digits.parse().ok(),
        reason_id: reason_digits.parse().ok(),
    })
}

fn userinfo_from_data(data: &str) -> Result<UserinfoRecord<'_>, LineParsingError> {
    let (client_id, remainder) = leading_number(data, "client id")?;
    let textual = remainder.strip_prefix(NAME_KEY)
        .ok_or_else(|| LineParsingError::UnknownDataFormat { description: format!("event data doesn't appear to be in the form <CLIENT_ID> n\\<NAME>\\key2\\val2\\...: log data: '{data}'") })?;
    let name_len = textual.find(['\\', '\t'])
        .unwrap_or(textual.len());
    if name_len == 0 {
        return Err(LineParsingError::UnknownDataFormat { description: format!("empty player name in `ClientUserinfoChanged` data: '{data}'") })
    }
    Ok(UserinfoRecord { client_id, name: &textual[..name_len] })
}

/// Splits the leading ASCII digits off `text`, returning them along with whatever follows
fn leading_digits<'a>(text: &'a str, key_name: &'static str) -> Result<(&'a str, &'a str), LineParsingError> {
    let digits_len = text.bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err(LineParsingError::UnknownDataFormat { description: format!("expected digits for the {key_name}, found '{text}'") })
    }
    Ok(text.split_at(digits_len))
}

/// Like [leading_digits()], but the digits must fit in a `u32`
fn leading_number<'a>(text: &'a str, key_name: &'static str) -> Result<(u32, &'a str), LineParsingError> {
    let (digits, remainder) = leading_digits(text, key_name)?;
    digits.parse::<u32>()
        .map(|number| (number, remainder))
        .map_err(|_| LineParsingError::UnparseableNumber { key_name, observed_data: digits.to_string() })
}


/// Unit tests for the [deserializer](super) module
#[cfg(test)]
mod tests {
    use super::*;


    // valid messages use cases
    ///////////////////////////
    // the tests bellow checks valid log messages, to assure the implementation
    // is able to parse the events correctly

    #[test]
    fn kill_event() {
        assert_kill(r#"20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT"#,
                    KillRecord { killer_id: Some(1022), victim_id: Some(2), reason_id: Some(22) });
        assert_kill(r#" 2:22 Kill: 3 2 10: Isgalamido killed Dono da Bola by MOD_RAILGUN"#,
                    KillRecord { killer_id: Some(3), victim_id: Some(2), reason_id: Some(10) });
    }

    /// The reason id doesn't need to be followed by anything
    #[test]
    fn bare_kill_event() {
        assert_kill(r#"Kill: 3 2 10"#, KillRecord { killer_id: Some(3), victim_id: Some(2), reason_id: Some(10) });
    }

    /// If the first `Kill: ` occurrence isn't followed by good data, the next ones are tried
    #[test]
    fn kill_after_noise() {
        assert_kill(r#"981:26 say: Kill: me Kill: 4 5 6: Zeh killed Mal by MOD_ROCKET"#,
                    KillRecord { killer_id: Some(4), victim_id: Some(5), reason_id: Some(6) });
    }

    #[test]
    fn client_info() {
        assert_userinfo(r#"2:33 ClientUserinfoChanged: 2 n\Isgalamido\t\1\model\uriel/zael\hmodel\uriel/zael\g_redteam\\g_blueteam\\c1\5\c2\5\hc\100\w\0\l\0\tt\0\tl\0"#,
                        UserinfoRecord { client_id: 2, name: "Isgalamido" });
        assert_userinfo(r#" 1:47 ClientUserinfoChanged: 2 n\Dono da Bola\t\0\model\sarge\hmodel\sarge\g_redteam\\g_blueteam\\c1\4\c2\5\hc\95\w\0\l\0\tt\0\tl\0"#,
                        UserinfoRecord { client_id: 2, name: "Dono da Bola" });
    }

    /// Names end at tabs as well as at backslashes -- or at the end of the line
    #[test]
    fn client_info_name_terminators() {
        assert_userinfo("1:47 ClientUserinfoChanged: 7 n\\Zeh\tt\\0", UserinfoRecord { client_id: 7, name: "Zeh" });
        assert_userinfo(r#"1:47 ClientUserinfoChanged: 7 n\Assasinu Credi"#, UserinfoRecord { client_id: 7, name: "Assasinu Credi" });
    }


    fn assert_kill(log_line: &str, expected_kill: KillRecord) {
        let deserialization_result = deserialize_kill(log_line);
        assert!(deserialization_result.is_ok(), "Log line '{log_line}' couldn't be deserialized: LineParsingError::{:?}", deserialization_result.unwrap_err());
        assert_eq!(deserialization_result.unwrap(), expected_kill, "Log line '{log_line}' wasn't correctly deserialized");
    }

    fn assert_userinfo(log_line: &str, expected_userinfo: UserinfoRecord) {
        let deserialization_result = deserialize_userinfo(log_line);
        assert!(deserialization_result.is_ok(), "Log line '{log_line}' couldn't be deserialized: LineParsingError::{:?}", deserialization_result.unwrap_err());
        assert_eq!(deserialization_result.unwrap(), expected_userinfo, "Log line '{log_line}' wasn't correctly deserialized");
    }


    // malformed messages use cases
    ///////////////////////////////
    // the tests bellow present invalid log lines, to assure the implementation
    // won't break and is able to present meaningful error messages

    #[test]
    fn missing_prefix() {
        assert_eq!(deserialize_kill(r#" 20:34 ClientConnect: 2"#), Err(LineParsingError::MissingPrefix { prefix: "Kill: " }));
        assert_eq!(deserialize_userinfo(r#""#), Err(LineParsingError::MissingPrefix { prefix: "ClientUserinfoChanged: " }));
    }

    #[test]
    fn bad_kill() {
        // missing the reason
        assert_eq!(deserialize_kill(r#"20:54 Kill: 1022 2: <world> killed Isgalamido by MOD_TRIGGER_HURT"#),
                   Err(LineParsingError::UnknownDataFormat { description: String::from("`Kill` data doesn't appear to be in the form '<KILLER_ID> <VICTIM_ID> <REASON_ID>': data is '1022 2: <world> killed Isgalamido by MOD_TRIGGER_HURT'") }));
        // text in id
        assert_eq!(deserialize_kill(r#"20:54 Kill: a 2 22"#),
                   Err(LineParsingError::UnknownDataFormat { description: String::from("expected digits for the killer id, found 'a 2 22'") }));
        // double spaces
        assert!(deserialize_kill(r#"20:54 Kill: 3  2 22"#).is_err());
        // negative numbers
        assert!(deserialize_kill(r#"20:54 Kill: 3 -2 22"#).is_err());
    }

    /// Numbers not fitting a `u32` don't spoil the other `Kill` fields
    #[test]
    fn kill_overflow() {
        assert_kill(r#"20:54 Kill: 99999999999 2 22"#, KillRecord { killer_id: None, victim_id: Some(2), reason_id: Some(22) });
        assert_kill(r#"20:54 Kill: 3 4294967296 22"#, KillRecord { killer_id: Some(3), victim_id: None, reason_id: Some(22) });
        assert_kill(r#"20:54 Kill: 3 2 4294967296: Isgalamido killed Dono da Bola by MOD_WHATEVER"#,
                    KillRecord { killer_id: Some(3), victim_id: Some(2), reason_id: None });
    }

    /// Unlike `Kill`s, a client id that doesn't fit is useless for a `ClientUserinfoChanged`
    #[test]
    fn client_info_overflow() {
        assert_eq!(deserialize_userinfo(r#"1:47 ClientUserinfoChanged: 4294967296 n\Isgalamido\t\0"#),
                   Err(LineParsingError::UnparseableNumber { key_name: "client id", observed_data: String::from("4294967296") }));
    }

    #[test]
    fn bad_client_info() {
        // no name -- no `n` key
        assert_eq!(deserialize_userinfo(r#"2:33 ClientUserinfoChanged: 2 not_n\Isgalamido\t\1"#),
                   Err(LineParsingError::UnknownDataFormat { description: String::from(r#"event data doesn't appear to be in the form <CLIENT_ID> n\<NAME>\key2\val2\...: log data: '2 not_n\Isgalamido\t\1'"#) }));
        // no client id
        assert_eq!(deserialize_userinfo(r#"2:33 ClientUserinfoChanged: n\Isgalamido\t\1"#),
                   Err(LineParsingError::UnknownDataFormat { description: String::from(r#"expected digits for the client id, found 'n\Isgalamido\t\1'"#) }));
        // empty name
        assert_eq!(deserialize_userinfo(r#"2:33 ClientUserinfoChanged: 2 n\\t\1"#),
                   Err(LineParsingError::UnknownDataFormat { description: String::from(r#"empty player name in `ClientUserinfoChanged` data: '2 n\\t\1'"#) }));
    }

}
