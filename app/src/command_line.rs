//! Configs that are gathered from the command line -- see [CommandLineOptions]

use structopt::StructOpt;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};


/// Where the log lines come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumVariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum InputSource {
    /// The file given by `--log-file`
    File,
    /// The standard input, allowing logs to be piped in
    Stdin,
}

/// Command-line options
#[derive(Debug,StructOpt)]
#[structopt(about = "
================================================================
Summarizes the games found in Quake3 Server log files as Json.
By default, reads from the file at './qgames.log'
================================================================
")]
pub struct CommandLineOptions {

    // FLAGS
    ////////

    /// Outputs any non-fatal errors or inconsistencies in the log to stderr, tracing every line read
    #[structopt(long)]
    pub verbose: bool,

    /// Considers all errors as fatal -- even the ones that might be ignored (such as an unreadable log line)
    #[structopt(long)]
    pub pedantic: bool,


    // OPTIONS
    //////////

    /// Input file with Quake3 Server log messages
    #[structopt(long, default_value = "./qgames.log")]
    pub log_file: String,

    /// Where to read the log lines from
    #[structopt(long, default_value = "file", possible_values = InputSource::VARIANTS)]
    pub source: InputSource,

}

pub fn parse_from_args() -> CommandLineOptions {
    CommandLineOptions::from_args()
}
