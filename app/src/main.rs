//! Summarizes the games of a Quake3 Server log, writing them to stdout as Json:
//!
//! ================================================================
//! Summarizes the games found in Quake3 Server log files as Json.
//! By default, reads from the file at './qgames.log'
//! ================================================================
//!
//! USAGE:
//!     app [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help        Prints help information
//!         --pedantic    Considers all errors as fatal -- even the ones that might be ignored (such as an unreadable log line)
//!     -V, --version     Prints version information
//!         --verbose     Outputs any non-fatal errors or inconsistencies in the log to stderr, tracing every line read
//!
//! OPTIONS:
//!         --log-file <log-file>    Input file with Quake3 Server log messages [default: ./qgames.log]
//!         --source <source>        Where to read the log lines from [default: file]  [possible values: file, stdin]
//!
//!
//! Explore some execution options:
//!  - ./target/release/app --help
//!  - ./target/release/app --log-file '<path_to_quake3_log_file>'             # summarizes the given log file
//!  - cat '<path_to_quake3_log_file>' | ./target/release/app --source stdin  # summarizes the piped log
//!  - ./target/release/app --verbose --log-file '<path_to_quake3_log_file>'   # tells, on stderr, which lines were skipped & why
//!  - ./target/release/app --pedantic --log-file '<path_to_quake3_log_file>'  # stops on the first unreadable line

mod command_line;

use command_line::InputSource;
use bll_api::GamesSummarizerApi;
use std::io::BufWriter;
use std::sync::Arc;
use log::LevelFilter;

/// Buffer to allow efficient output operations
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    let command_line_options = command_line::parse_from_args();

    // start the logger
    simple_logger::SimpleLogger::new()
        .with_utc_timestamps()
        .with_level(if command_line_options.verbose { LevelFilter::Trace } else { LevelFilter::Warn })
        .init()
        .unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    let dal_config = dal_api::Config {
        debug: command_line_options.verbose,
        log_lines_implementation: match command_line_options.source {
            InputSource::File  => dal_api::Quake3LogLinesImplementations::SyncLogFileReader,
            InputSource::Stdin => dal_api::Quake3LogLinesImplementations::StdinReader,
        },
    };
    let logic_config = bll_api::Config {
        log_issues: command_line_options.verbose,
        stop_on_feed_errors: command_line_options.pedantic,
    };
    let presentation_config = presentation::Config {
        log_errors: true,
        stop_on_errors: command_line_options.pedantic,
    };
    let presentation_writer = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, std::io::stdout());

    let log_dao = dal::factory::instantiate_log_dao(Arc::new(dal_config), &command_line_options.log_file);
    let summarizer = bll::GamesSummarizer::new(logic_config);
    let summaries_stream = summarizer.summarize_games(log_dao)?;
    presentation::to_json(&presentation_config, summaries_stream, presentation_writer)?;

    Ok(())
}
