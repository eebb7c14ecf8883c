//! Command-line interface for convex
//! Converts a byte sequence between hex string, C, Coq, Rust and JSON
//! representations, auto-detecting the input format unless one is forced.
//!
//! Usage:
//!   convex `<input>` [-r] [--from-<fmt>] [--to-<fmt>]

use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use convex::Format;

const FORMAT_EXAMPLES: &str = "\
Formats:
  String: 89ab...                  (default output)
  C:      0x89ab23cdu, ...
  Coq:    137%Z; 171%Z; ...
  Rust:   0x89, 0xab, ...
  JSON:   137, 171, ...";

fn main() {
    let matches = Command::new("convex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between different representations of a byte sequence")
        .after_help(FORMAT_EXAMPLES)
        .arg(
            Arg::new("input")
                .help("Input string to convert")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse")
                .short('r')
                .help("Reverse byte order before encoding")
                .action(ArgAction::SetTrue),
        )
        .arg(format_flag("from-c", "Read C"))
        .arg(format_flag("from-coq", "Read Coq"))
        .arg(format_flag("from-rust", "Read Rust"))
        .arg(format_flag("from-json", "Read JSON"))
        .arg(format_flag("to-c", "Write C"))
        .arg(format_flag("to-coq", "Write Coq"))
        .arg(format_flag("to-rust", "Write Rust"))
        .arg(format_flag("to-json", "Write JSON"))
        .group(ArgGroup::new("source").args(["from-c", "from-coq", "from-rust", "from-json"]))
        .group(ArgGroup::new("target").args(["to-c", "to-coq", "to-rust", "to-json"]))
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = selected_format(&matches, "from");
    let target = selected_format(&matches, "to");
    let reverse = matches.get_flag("reverse");

    match convex::convert(input, source, target, reverse) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Build one boolean format-selection flag
fn format_flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}

/// Map the set flag of a `from`/`to` group to its format, if any
fn selected_format(matches: &ArgMatches, direction: &str) -> Option<Format> {
    [
        ("c", Format::C),
        ("coq", Format::Coq),
        ("rust", Format::Rust),
        ("json", Format::Json),
    ]
    .into_iter()
    .find(|(name, _)| matches.get_flag(&format!("{}-{}", direction, name)))
    .map(|(_, format)| format)
}
