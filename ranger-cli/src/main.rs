/*!
  Binary for the CLI of ranger: rng
*/

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod cli;
pub mod error;

use clap::Parser;
use cli::{CliApp, Command, ValueArgs};
use colored::Colorize;
use error::CliError;
use ranger::{
    datatypes::{unsigned_cmp, NumericValueT},
    properties::Properties,
    range::Range,
};

/// Test each of the given values against `range` and print the results.
fn check_values(range: &Range<NumericValueT>, args: &ValueArgs) -> Result<(), CliError> {
    let kind = args.kind;

    if args.unsigned && !kind.is_fixed_width_integer() {
        return Err(CliError::UnsignedNotSupported { kind });
    }

    println!("{range}");

    for text in &args.values {
        let value = NumericValueT::parse(text, kind)?;

        let contained = if args.unsigned {
            range.contains_with(&value, unsigned_cmp)
        } else {
            range.contains(&value)?
        };

        if contained {
            println!("{value} in {range}");
        } else {
            println!("{value} not in {range}");
        }
    }

    Ok(())
}

fn run(cli: CliApp) -> Result<(), CliError> {
    match cli.command {
        Command::Check { range, values } => {
            let range = Range::<NumericValueT>::from_text_as(&range, values.kind)?;
            log::info!("Checking {} values against {range}", values.values.len());

            check_values(&range, &values)
        }
        Command::Config {
            file,
            label,
            sensor,
            values,
        } => {
            let properties = Properties::load(&file)?;
            let range = properties.range_as(sensor.as_deref(), &label, values.kind)?;
            log::info!("Range {label} configured as {range}");

            check_values(&range, &values)
        }
    }
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Command: {:?}", cli.command);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
