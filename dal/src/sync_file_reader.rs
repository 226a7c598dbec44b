//! Resting place for [Quake3LogFileSyncReader]


use crate::sync_reader::Quake3LogSyncReader;
use common::types::Result;
use model::log_lines::LogLine;
use dal_api::{Config, FileReaderInfo, Quake3LogLines};
use std::fs::File;
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;


/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;


/// [Quake3LogLines] implementation for reading Quake 3 Server log lines from a log file
pub struct Quake3LogFileSyncReader<'a> {
    config: Arc<Config>,
    params: FileReaderInfo<'a>,
}

impl<'a> Quake3LogFileSyncReader<'a> {

    pub fn new(config: Arc<Config>, params: FileReaderInfo<'a>) -> Box<Self> {
        Box::new(Self {
            config,
            params,
        })
    }

}

impl Quake3LogLines for Quake3LogFileSyncReader<'static> {

    fn lines_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<LogLine>>>>> {
        let file = File::open(self.params.log_file_path.as_ref())
            .map_err(|err| format!("Couldn't open Quake3 Server log file '{}' for reading: {err}", self.params.log_file_path))?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);
        Quake3LogSyncReader::new(self.config, &self.params.log_file_path, reader)
            .lines_stream()
    }

}
