//! Command-line interface for gramdoc
//! This binary typesets a grammar notation file for inclusion in the language reference.
//!
//! Usage:
//!   gramdoc `<mode>` [--input `<path>`] [--format `<format>`] [--config `<file>`]
//!   gramdoc --preamble          - Print the LaTeX macro definitions
//!   gramdoc --list-formats      - List available output formats
//!
//! Modes: collected, ordered, keywords. Set `RUST_LOG=debug` to trace the
//! rules and token streams as they are processed.

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use gramdoc::syntax::config::{GramdocConfig, Loader};
use gramdoc::syntax::formats::{FormatError, LatexFormatter};
use gramdoc::syntax::modes::Mode;
use gramdoc::syntax::processor::{ProcessingError, Processor};
use std::process;

/// Picked up from the working directory when present
const LOCAL_CONFIG: &str = "gramdoc.toml";

fn main() {
    env_logger::init();

    let matches = Command::new("gramdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Typesets a grammar notation file into reference-manual syntax listings")
        .arg_required_else_help(true)
        .arg(
            Arg::new("mode")
                .help("Presentation mode: 'collected', 'ordered' or 'keywords'")
                .long_help(mode_help())
                .required_unless_present_any(["preamble", "list-formats"])
                .index(1),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Grammar source file (default: syntax.ebnf)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: latex)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("keyword-columns")
                .long("keyword-columns")
                .help("Columns of the LaTeX keyword index")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("preamble")
                .long("preamble")
                .help("Print the LaTeX macro definitions used by the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("preamble") {
        print!("{}", LatexFormatter::preamble());
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    let processor = Processor::from_config(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&processor);
        return;
    }

    let mode = matches
        .get_one::<String>("mode")
        .expect("mode is required unless printing the preamble or listing formats");
    handle_render_command(&processor, &config, mode);
}

/// One line per mode for `--help`
fn mode_help() -> String {
    let mut help = String::from("Presentation mode:");
    for mode in Mode::ALL {
        help.push_str(&format!("\n  {:<10} {}", mode.name(), mode.description()));
    }
    help
}

/// Defaults, then `gramdoc.toml`, then `--config`, then individual flags
fn load_config(matches: &ArgMatches) -> Result<GramdocConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(input) = matches.get_one::<String>("input") {
        loader = loader.set_override("input.path", input.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(columns) = matches.get_one::<u32>("keyword-columns") {
        loader = loader.set_override("output.latex.keyword_columns", i64::from(*columns))?;
    }
    loader.build()
}

/// Handle the default command: typeset the grammar in the given mode
fn handle_render_command(processor: &Processor, config: &GramdocConfig, mode: &str) {
    let mode: Mode = mode.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let output = processor
        .process_file(&config.input.path, mode, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            if let ProcessingError::Format(FormatError::FormatNotFound(_)) = e {
                eprintln!("\nAvailable formats:");
                for name in processor.registry().names() {
                    eprintln!("  {}", name);
                }
            }
            process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command(processor: &Processor) {
    println!("Available output formats:\n");

    for formatter in processor.registry().formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
        println!();
    }
}
