//! Factory for obtaining one of the implementations of our DAO objects

use dal_api::{Config, FileReaderInfo, Quake3LogLines, Quake3LogLinesImplementations};
use std::borrow::Cow;
use std::sync::Arc;
use crate::{
    stdin_reader::Quake3LogStdinReader,
    sync_file_reader::Quake3LogFileSyncReader,
};


/// Instantiates a Data Access Object (dao) able to read the lines of a Quake3 server log,
/// according to `config`. `log_locator` points to the log file, for the implementations that need one.
pub fn instantiate_log_dao(config: Arc<Config>, log_locator: &str) -> Box<dyn Quake3LogLines> {
    match config.log_lines_implementation {
        Quake3LogLinesImplementations::SyncLogFileReader => Quake3LogFileSyncReader::new(config.clone(), FileReaderInfo { log_file_path: Cow::Owned(log_locator.to_string()) }),
        Quake3LogLinesImplementations::StdinReader => Quake3LogStdinReader::new(config.clone()),
    }
}
