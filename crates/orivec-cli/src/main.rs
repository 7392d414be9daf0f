use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

use orivec::{Column, Orientation, OrientedVec, Row};
use orivec_cli::config::{load_demo_config, DemoConfig};
use orivec_cli::demo::{render, run_demo};
use orivec_cli::inspect::{filter_values, parse_values, summarize, Bounds};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ORIVEC_LOG", "error,orivec=info"))
        .init();

    let precision_arg = Arg::new("precision")
        .short('p')
        .long("precision")
        .help("Decimals printed per element. Overrides the configuration file.")
        .value_parser(clap::value_parser!(usize));

    let matches = Command::new("orivec-cli")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Row/column vector playground")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the arithmetic, dot product and masking demo")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON demo configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(precision_arg.clone())
                .arg(
                    Arg::new("print_config")
                        .long("print-config")
                        .help("Print the effective configuration as JSON and exit.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("filter")
                .about("Keep the elements inside an open interval")
                .arg(
                    Arg::new("values")
                        .help("Vector literal, e.g. \"[0, 1, 2, 3, 4]\"")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("gt")
                        .long("gt")
                        .help("Keep elements strictly greater than this value")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("lt")
                        .long("lt")
                        .help("Keep elements strictly less than this value")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("column")
                        .long("column")
                        .help("Treat the input as a column vector")
                        .action(ArgAction::SetTrue),
                )
                .arg(precision_arg),
        )
        .subcommand(
            Command::new("stats")
                .about("Print length, min, max, sum and mean of a vector")
                .arg(
                    Arg::new("values")
                        .help("Vector literal, e.g. \"[0, 1, 2, 3, 4]\"")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                ),
        )
        .get_matches();

    let (name, outcome) = match matches.subcommand() {
        Some(("demo", sub_m)) => ("Demo", handle_demo(sub_m)),
        Some(("filter", sub_m)) => ("Filter", handle_filter(sub_m)),
        Some(("stats", sub_m)) => ("Stats", handle_stats(sub_m)),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    if let Err(e) = outcome {
        log::error!("{} failed: {:#}", name, e);
        std::process::exit(1)
    }
    Ok(())
}

fn handle_demo(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[orivec::demo] Using config: {:?}", config_path);
        load_demo_config(config_path)?
    } else {
        log::info!("[orivec::demo] No config provided; using defaults.");
        DemoConfig::default()
    };

    if let Some(&precision) = matches.get_one::<usize>("precision") {
        config.precision = Some(precision);
    }

    if matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn handle_filter(matches: &ArgMatches) -> Result<()> {
    let text: &String = matches
        .get_one("values")
        .expect("values is a required argument");
    let bounds = Bounds {
        greater_than: matches.get_one::<f64>("gt").copied(),
        less_than: matches.get_one::<f64>("lt").copied(),
    };
    let precision = matches.get_one::<usize>("precision").copied();

    if matches.get_flag("column") {
        print_filtered::<Column>(text, bounds, precision)
    } else {
        print_filtered::<Row>(text, bounds, precision)
    }
}

fn print_filtered<O: Orientation>(text: &str, bounds: Bounds, precision: Option<usize>) -> Result<()> {
    let values: OrientedVec<O, f64> = parse_values(text)?;
    let kept = filter_values(&values, bounds);
    println!("{}", render(&kept, precision));
    Ok(())
}

fn handle_stats(matches: &ArgMatches) -> Result<()> {
    let text: &String = matches
        .get_one("values")
        .expect("values is a required argument");
    let values: OrientedVec<Row, f64> = parse_values(text)?;
    println!("{}", summarize(&values));
    Ok(())
}
