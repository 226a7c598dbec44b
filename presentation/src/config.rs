//! Resting place for Presentation's [Config]

/// Configuration for the Presentation crate
#[derive(Debug)]
pub struct Config {

    /// If true, an error item in the games summary aborts the report; otherwise the report goes on with the next games
    pub stop_on_errors: bool,

    /// If true, error items in the games summary are `log::warn!`ed
    pub log_errors: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_on_errors: false,
            log_errors: true,
        }
    }
}
