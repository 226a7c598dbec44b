//! Resting place for DAL's [Config] & friends

/// Configuration for the DAL crate
pub struct Config {

    /// If true, every line yielded by the DAO is `log::trace!`ed
    pub debug: bool,

    /// The implementation to use when getting a Data Access Object (DAO) instance
    pub log_lines_implementation: Quake3LogLinesImplementations,

}

/// The available sources of Quake 3 server log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quake3LogLinesImplementations {
    /// Reads the log file at the given location
    SyncLogFileReader,
    /// Reads the log from the standard input -- allowing the application to be fed through a pipe
    StdinReader,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_lines_implementation: Quake3LogLinesImplementations::SyncLogFileReader,
        }
    }
}
