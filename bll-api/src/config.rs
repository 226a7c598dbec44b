//! Resting place for BLL's [Config]


/// Configuration to dictate the tunable behaviors of the Business Logic Layer
#[derive(Debug, Default)]
pub struct Config {

    /// Log::warn! of any issues found during log processing: unreadable lines, `Kill` or `ClientUserinfoChanged`
    /// lines with unparseable data, unknown means of death and games left open at the end of the log.\
    /// When false, those are still reported, but through `log::trace!` & `log::debug!`.
    pub log_issues: bool,

    /// If false, ignore any log lines feed errors -- such as IO errors.\
    /// If true, causes the error to be yielded, so the consumer may stop.
    pub stop_on_feed_errors: bool,

}
