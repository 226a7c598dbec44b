//! Data Access Layer API: how log lines are handed to the Business Logic Layer

mod config;
pub use config::*;

use common::types::Result;
use model::log_lines::LogLine;
use std::borrow::Cow;
use std::pin::Pin;
use futures::Stream;


/// Feed for the lines of a Quake 3 server log
pub trait Quake3LogLines {

    /// Consumes this object, returning a `Stream` which yields the log lines, in order, until the source is exhausted.\
    /// Errors opening the source are returned right away; errors reading individual lines are yielded
    /// by the `Stream`, which continues with the next lines.
    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<LogLine>>>>>;
}

/// Parameters for the file based DAOs
pub struct FileReaderInfo<'a> {
    pub log_file_path: Cow<'a, str>,
}
