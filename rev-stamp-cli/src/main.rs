mod options;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn, LevelFilter};
use options::Options;
use rev_stamp::SvnVersion;

/// Parses the program arguments.
fn parse_args() -> Result<Options> {
    let options = Options::parse();
    Ok(options)
}

/// Initializes the program logging
///
/// # Arguments
/// * `filter` - The log level filter, i.e., the minimum log level to be logged.
fn initialize_logging(filter: LevelFilter) {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(filter)
        .init();
}

/// Runs the program.
fn run_program() -> Result<()> {
    let options = parse_args()?;
    initialize_logging(LevelFilter::from(options.log_level));

    info!("Options:");
    options.dump_to_log();
    info!("-------");

    let query = SvnVersion::with_program(&options.svnversion);
    let revision = rev_stamp::stamp(
        &query,
        &options.working_copy,
        &options.template_file,
        &options.output_file,
    )?;

    if revision.is_fallback() {
        warn!(
            "Stamped {:?} with fallback revision {}",
            options.output_file, revision
        );
    }

    Ok(())
}

fn main() {
    match run_program() {
        Ok(()) => {
            info!("SUCCESS");
        }
        Err(err) => {
            error!("Error: {:#}", err);
            error!("FAILED");

            std::process::exit(-1);
        }
    }
}
