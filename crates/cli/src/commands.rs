//! clap definitions for the process flags and the shell commands.

use clap::{value_parser, Arg, ArgAction, Command};

/// Process-level CLI: flags plus an optional path for one-shot mode.
pub fn build_cli() -> Command {
    Command::new("vendorbook")
        .about("Browse vendors, parts and purchase orders over a simulated mock API")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("fixtures")
                .long("fixtures")
                .value_name("DIR")
                .help("Directory holding the fixture JSON files"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Seed for simulated latency and failures"),
        )
        .arg(
            Arg::new("failure-rate")
                .long("failure-rate")
                .value_name("RATE")
                .value_parser(value_parser!(f64))
                .help("Override the simulated failure probability (0.0 - 1.0)"),
        )
        .arg(
            Arg::new("latency")
                .long("latency")
                .value_name("MIN..MAX")
                .help("Override simulated latency bounds in milliseconds"),
        )
        .arg(
            Arg::new("debounce-ms")
                .long("debounce-ms")
                .value_name("MS")
                .value_parser(value_parser!(u64))
                .help("Search debounce in milliseconds"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("More logging (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Print the page at PATH and exit (e.g. /vendors/V1)"),
        )
}

/// Commands accepted by the interactive shell and pipe mode.
pub fn build_shell_cli() -> Command {
    Command::new("vendorbook")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("go")
                .about("Navigate to a path")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(
            Command::new("search")
                .about("Set the list search text (empty clears it)")
                .arg(
                    Arg::new("text")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(Command::new("refresh").about("Reload the vendor list"))
        .subcommand(Command::new("retry").about("Retry a failed load"))
        .subcommand(Command::new("back").about("Return from a vendor to the list"))
        .subcommand(Command::new("show").about("Print the current page"))
}
