//! Resting place for [Quake3LogStdinReader]


use crate::sync_reader::Quake3LogSyncReader;
use common::types::Result;
use model::log_lines::LogLine;
use dal_api::{Config, Quake3LogLines};
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;

/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;

/// [Quake3LogLines] implementation for reading Quake 3 Server log lines from the standard input
pub struct Quake3LogStdinReader {
    config: Arc<Config>,
}

impl Quake3LogStdinReader {

    pub fn new(config: Arc<Config>) -> Box<Self> {
        Box::new(Self {
            config,
        })
    }

}

impl Quake3LogLines for Quake3LogStdinReader {

    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<LogLine>>>>> {
        let reader = BufReader::with_capacity(BUFFER_SIZE, std::io::stdin());
        Quake3LogSyncReader::new(self.config, "<stdin>", reader)
            .lines_stream()
    }

}
