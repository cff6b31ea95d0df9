/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::Parser;
use serde::Serialize;

use quantities::parser::{parse_scalar_info, parse_unit_info};
use quantities::{Quantity, QuantityError, UnitInfo};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// SmartM Scalar Parser
///
/// Parses physical quantities and outputs a JSON representation.
struct Args {
    /// Increase verbosity. Log messages are written to stderr.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(long, short)]
    /// List the units of the quantity instead of parsing.
    list: bool,
    #[clap(long)]
    /// Convert the parsed values into this unit.
    to: Option<String>,
    /// The quantity, eg. "speed" or "absolute-temperature".
    quantity: Quantity,
    /// The values to parse, eg. "100 km/h".
    text: Vec<String>,
}

#[derive(Serialize)]
struct Parsed<'a> {
    quantity: Quantity,
    value: f64,
    unit: &'a str,
    si: f64,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            3.. => simplelog::LevelFilter::Trace,
        },
        simplelog::ConfigBuilder::new().build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    quantities::initialize();

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1)
    }
}

fn run(args: &Args) -> Result<(), QuantityError> {
    if args.list {
        let units = args.quantity.units().ok_or_else(|| {
            QuantityError::InvalidArgument(format!(
                "no units registered for {}",
                args.quantity
            ))
        })?;
        for unit in units.units() {
            println!(
                "{}",
                serde_json::to_string(unit).expect("serialization failed!?")
            );
        }
        return Ok(());
    }

    let target = args
        .to
        .as_deref()
        .map(|abbr| parse_unit_info(args.quantity, abbr))
        .transpose()?;

    for text in &args.text {
        let (value, unit) = parse_scalar_info(args.quantity, text)?;
        let si = unit.to_si(value);
        let unit: &UnitInfo = target.unwrap_or(unit);
        let parsed = Parsed {
            quantity: args.quantity,
            value: unit.from_si(si),
            unit: unit.abbreviation(),
            si,
        };
        println!(
            "{}",
            serde_json::to_string(&parsed).expect("serialization failed!?")
        );
    }

    Ok(())
}
