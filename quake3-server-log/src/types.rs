//! Resting place for [LineKind] & friends


/// The kinds of Quake 3 server log lines we are able to tell apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `InitGame`: a new game match has started
    GameStart,
    /// `ShutdownGame`: the game match is over
    GameEnd,
    /// `ClientUserinfoChanged`: a player's info (including the nick name) is available or has changed
    PlayerInfoChanged,
    /// `Kill`: someone -- or something -- has killed a player
    Kill,
    /// Anything else: `ClientConnect`, `Item`, `say`, comments, garbage, ...
    Other,
}

/// The data of a `Kill` event.\
/// Numbers too big for a `u32` are `None`: no client nor means of death may have them
#[derive(Debug, PartialEq)]
pub struct KillRecord {
    /// The client id of the killer -- `1022` is used by the game for `<world>`
    pub killer_id: Option<u32>,
    pub victim_id: Option<u32>,
    /// The means of death code -- see [crate::means_of_death]
    pub reason_id: Option<u32>,
}

/// The data we care about from a `ClientUserinfoChanged` event
#[derive(Debug, PartialEq)]
pub struct UserinfoRecord<'a> {
    pub client_id: u32,
    pub name: &'a str,
}
