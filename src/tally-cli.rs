//! A simple CLI tool for replaying elections described in scenario files.
//! Each scenario is run through a fresh `ElectionSession`, exactly as a
//! library caller would drive one.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, LevelFilter};

use civic_tally::{logging, Config, Error, ResultsOrder, Scenario, ScenarioReport};

const PROGRAM_NAME: &str = "tally-cli";

const ABOUT_TEXT: &str = "Replay an election scenario and report the results.

CONFIGURATION:
    Tally.toml in the working directory, overridden by TALLY_LOG_CONFIG
    and TALLY_ORDER environment variables.

EXIT CODES:
     0: Scenario replayed.
     1: Error.";

const SCENARIO_PATH: &str = "SCENARIO_PATH";
const ORDER: &str = "ORDER";
const QUIET: &str = "QUIET";

const SCENARIO_PATH_HELP: &str = "The path to a JSON scenario file listing candidates,\n\
voters, ballots and optionally regions and eligibility rules";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .arg(
            Arg::new(SCENARIO_PATH)
                .help(SCENARIO_PATH_HELP)
                .action(ArgAction::Set)
                .required(true),
        )
        .arg(
            Arg::new(ORDER)
                .long("order")
                .help("How to order the results; overrides TALLY_ORDER")
                .action(ArgAction::Set)
                .value_parser(["votes", "name"]),
        )
        .arg(
            Arg::new(QUIET)
                .short('q')
                .long("quiet")
                .help("Silence library logging; errors from this tool are still shown")
                .action(ArgAction::SetTrue),
        )
}

/// Pick the results ordering: command line first, then config.
fn results_order(args: &ArgMatches, config: &Config) -> ResultsOrder {
    match args.get_one::<String>(ORDER).map(String::as_str) {
        Some("name") => ResultsOrder::Name,
        Some(_) => ResultsOrder::Votes,
        None => config.order(),
    }
}

/// Print a replay report in human-readable form.
fn print_report(report: &ScenarioReport) {
    if !report.name.is_empty() {
        println!("{}", report.name);
    }
    println!(
        "{} voter{} registered, {} refused.",
        report.registered,
        if report.registered != 1 { "s" } else { "" },
        report.refused
    );
    println!(
        "{} ballot{} accepted, {} rejected.",
        report.accepted.len(),
        if report.accepted.len() != 1 { "s" } else { "" },
        report.rejected.len()
    );
    for rejected in report.rejected.iter() {
        println!(
            "  {} -> {}: {}",
            rejected.ballot.voter_id, rejected.ballot.candidate_id, rejected.reason
        );
    }
    println!("Results:");
    for result in report.results.iter() {
        println!("  {}", result);
    }
    match &report.winner {
        Some(winner) => println!("Winner: {} ({})", winner.name, winner.party),
        None => println!("No winner: no votes were cast."),
    }
    if let Some(votes) = report.regional_votes {
        println!("Regional votes: {}", votes);
    }
}

/// Replay the scenario, report the result, and return the exit code.
fn run(args: &ArgMatches, config: &Config) -> u8 {
    let path: &String = args.get_one(SCENARIO_PATH).unwrap(); // Required argument is guaranteed to be present.
    match Scenario::from_path(path) {
        Ok(scenario) => {
            print_report(&scenario.run(results_order(args, config)));
            0
        }
        Err(Error::Io(err)) => {
            println!("IO error: {}", err);
            1
        }
        Err(Error::Json(err)) => {
            println!("Invalid JSON: {}", err);
            1
        }
        Err(err) => {
            println!("{}", err);
            1
        }
    }
}

fn main() {
    let args = cli().get_matches();
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            std::process::exit(1)
        }
    };

    // Logging is best-effort; the report goes to stdout regardless.
    if let Err(err) = logging::init_from_file(config.log_config()) {
        eprintln!("{err}, continuing without logging");
    } else if args.get_flag(QUIET) {
        logging::set_library_level(LevelFilter::Off);
    }

    let exit_code = run(&args, &config);
    if exit_code != 0 {
        error!("Replay failed with exit code {exit_code}");
    }
    std::process::exit(exit_code.into())
}
