use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

/// The program version together with the git hash it was built from.
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Workaround for parsing the different log level
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// CLI for replacing `$revision$` in a template with the revision of a Subversion working copy.
#[derive(Parser, Debug, Clone)]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Options {
    /// The log level
    #[arg(short, value_enum, long, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// The program used for querying the revision
    #[arg(long, default_value = rev_stamp::revision::DEFAULT_PROGRAM)]
    pub svnversion: String,

    /// The local working copy directory
    pub working_copy: PathBuf,

    /// The template file containing the `$revision$` placeholders
    pub template_file: PathBuf,

    /// The output file, overwritten if it exists
    pub output_file: PathBuf,
}

impl Options {
    /// Dumps the options to the log.
    pub fn dump_to_log(&self) {
        info!("log_level: {:?}", self.log_level);
        info!("svnversion: {}", self.svnversion);
        info!("working_copy: {:?}", self.working_copy);
        info!("template_file: {:?}", self.template_file);
        info!("output_file: {:?}", self.output_file);
    }
}
