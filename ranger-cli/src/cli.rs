//! Contains structures and functionality for the binary
use std::{path::PathBuf, str::FromStr};

use ranger::datatypes::NumericKind;

/// Default type of range bounds.
const DEFAULT_KIND: &str = "Integer";

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `RNG_LOG` environment variable value
    ///  * `Warn` otherwise
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env("RNG_LOG");
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                3 => log::LevelFilter::Trace,
                _ => log::LevelFilter::Warn,
            });
        }
        builder.init();
    }
}

/// Cli arguments related to testing values against a range
#[derive(clap::Args, Debug)]
pub(crate) struct ValueArgs {
    /// Type of the range bounds and values, e.g., "Integer", "Double" or "i8"
    #[arg(short = 't', long = "type", default_value = DEFAULT_KIND, value_parser = NumericKind::from_str)]
    pub(crate) kind: NumericKind,
    /// Compare fixed-width integers as unsigned values
    #[arg(short, long)]
    pub(crate) unsigned: bool,
    /// Values to test for containment
    #[arg(allow_negative_numbers = true)]
    pub(crate) values: Vec<String>,
}

/// Subcommands of the binary
#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Test values against a range given in its text form, e.g., "[2..4)"
    Check {
        /// The range, e.g., "[2..4)", "(*..4]" or "[120..*)"
        #[arg(allow_hyphen_values = true)]
        range: String,
        /// Arguments related to the tested values
        #[command(flatten)]
        values: ValueArgs,
    },
    /// Test values against a range configured in a sensor properties file
    Config {
        /// Properties file containing the range
        file: PathBuf,
        /// Label of the range, e.g., "tempThreshold"
        #[arg(short, long)]
        label: String,
        /// Id of the sensor the range is configured for
        #[arg(short, long)]
        sensor: Option<String>,
        /// Arguments related to the tested values
        #[command(flatten)]
        values: ValueArgs,
    },
}

/// Ranger CLI
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
pub struct CliApp {
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
    /// Action to perform
    #[command(subcommand)]
    pub(crate) command: Command,
}
