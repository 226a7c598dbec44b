//! Resting place for [Quake3LogSyncReader]


use common::types::Result;
use model::log_lines::LogLine;
use dal_api::{Config, Quake3LogLines};
use std::{
    io::BufRead,
    pin::Pin,
    sync::Arc,
    task::Poll,
};
use futures::{Stream, stream, StreamExt};
use log::trace;


/// [Quake3LogLines] implementation for reading Quake 3 Server log lines from any [BufRead]
pub struct Quake3LogSyncReader<Reader: BufRead> {
    config: Arc<Config>,
    source_name: String,
    reader: Reader,
}

impl<Reader: BufRead> Quake3LogSyncReader<Reader> {

    /// `source_name` is only used for the error messages
    pub fn new(config: Arc<Config>, source_name: &str, reader: Reader) -> Box<Self> {
        Box::new(Self {
            config,
            source_name: source_name.into(),
            reader,
        })
    }

}

impl<Reader: BufRead + 'static> Quake3LogLines for Quake3LogSyncReader<Reader> {

    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<LogLine>>>>> {
        let mut lines_iter = self.reader.lines().enumerate();
        let source_name = self.source_name;

        let stream = stream::poll_fn(move |_| Poll::Ready(
            lines_iter.next()
                .map(|(line_index, line_result)| line_result
                    .map(|text| LogLine { line_number: line_index+1, text })
                    .map_err(|read_err| -> Box<dyn std::error::Error> { Box::from(format!("IO read error when processing log file '{source_name}' at line {}: {read_err}", line_index+1)) }))
        ));
        let stream: Pin<Box<dyn Stream<Item=Result<LogLine>>>> = if self.config.debug {
            Box::pin(stream
                .inspect(|yielded_line| trace!("{yielded_line:?}")))
        } else {
            Box::pin(stream)
        };
        Ok(stream)
    }

}

// for unit tests, see sync_file_reader.rs
// (the tests were delegated there as it is easier to test from files)
