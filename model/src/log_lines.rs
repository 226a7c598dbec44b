//! Resting place for [LogLine]


/// A single, raw, line of a Quake 3 server log, as given by the Data Access Layer
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    /// 1-based position of this line in its source -- useful for reporting issues
    pub line_number: usize,
    /// The line contents, without the line terminator
    pub text: String,
}
