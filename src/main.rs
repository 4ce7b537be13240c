use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use ftl::formatting::{self, Identity, Terminal};
use ftl::parsing::{self, Context, Mode};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("ftl")
        .version(VERSION)
        .propagate_version(true)
        .about("Parse, check and format FTL localization files.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic logging to stderr."),
        )
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given localization file")
                .arg(
                    Arg::new("partial")
                        .long("partial")
                        .action(ArgAction::SetTrue)
                        .help("Skip over comments and sections rather than checking them."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the messages you want to check, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Write the given localization file out in canonical form")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the messages you want to format, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the syntax tree of the given localization file as JSON")
                .arg(
                    Arg::new("partial")
                        .long("partial")
                        .action(ArgAction::SetTrue)
                        .help("Leave comments and sections out of the tree."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the messages you want to parse, or '-' for standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let mode = mode_from(submatches.get_flag("partial"));
            let filename = filename_from(submatches);
            debug!(?filename, ?mode);

            let (content, _) = load_and_parse(filename, Context::new(mode));

            info!("Check of {:?} passed", filename);
            println!(
                "{}: {} ({} bytes)",
                "ok".bright_green(),
                filename.display(),
                content.len()
            );
        }
        Some(("format", submatches)) => {
            let raw_output = submatches.get_flag("raw-control-chars");
            let filename = filename_from(submatches);
            debug!(?filename, raw_output);

            let (_, body) = load_and_parse(filename, Context::full());

            let result = if raw_output
                || std::io::stdout().is_terminal()
            {
                formatting::render(&Terminal, &body)
            } else {
                formatting::render(&Identity, &body)
            };

            match result {
                Ok(text) => print!("{}", text),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(("parse", submatches)) => {
            let mode = mode_from(submatches.get_flag("partial"));
            let filename = filename_from(submatches);
            debug!(?filename, ?mode);

            let (_, body) = load_and_parse(filename, Context::new(mode));

            match serde_json::to_string_pretty(&body) {
                Ok(json) => println!("{}", json),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: ftl [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn mode_from(partial: bool) -> Mode {
    if partial {
        Mode::Partial
    } else {
        Mode::Full
    }
}

fn filename_from(submatches: &clap::ArgMatches) -> &Path {
    // required(true) means clap has already insisted on it
    submatches
        .get_one::<String>("filename")
        .map(Path::new)
        .unwrap_or(Path::new("-"))
}

/// Load the file and parse it, or report why that failed and exit.
fn load_and_parse(filename: &Path, context: Context) -> (String, ftl::language::Body) {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    match parsing::parse(filename, &content, context) {
        Ok(body) => (content, body),
        Err(error) => {
            // people get the full explanation, tools get one line apiece
            let message = if std::io::stderr().is_terminal() {
                problem::full_parsing_error(&error, filename, &content, &Terminal)
            } else {
                problem::concise_parsing_error(&error, filename, &Identity)
            };
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}
