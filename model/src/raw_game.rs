//! Resting place for [RawGameBuffer]


/// Accumulates the log lines of the game currently in progress that are relevant for scoring.\
/// A new, empty, buffer is used for each game: the old one is consumed when the game is finalized.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawGameBuffer {
    /// Lines classified as `Kill` events, in log order
    pub kill_lines: Vec<String>,
    /// Lines classified as `ClientUserinfoChanged` events, in log order
    pub info_lines: Vec<String>,
}

impl RawGameBuffer {

    /// Returns true if no lines were buffered at all
    pub fn is_empty(&self) -> bool {
        self.kill_lines.is_empty() && self.info_lines.is_empty()
    }

}
