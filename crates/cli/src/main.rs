//! Vendorbook CLI: browse the vendor pages from a terminal.
//!
//! Three modes:
//! - **One-shot mode**: `vendorbook [flags] PATH`: print one page, exit
//! - **Shell mode**: `vendorbook [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "go /vendors/V1" | vendorbook`: line-by-line from stdin

mod commands;
mod parse;
mod repl;

use std::io::IsTerminal;
use std::process;

use tokio::runtime::Runtime;
use tracing::Level;
use vendorbook::{AppConfig, Vendorbook};

use commands::build_cli;
use parse::flags_to_config;

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            process::exit(1);
        }
    };
    // pages spawn their loads onto this runtime
    let _guard = rt.enter();

    let mut app = match open_app(&matches) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Some(path) = matches.get_one::<String>("path") {
        let exit_code = run_one_shot(&mut app, &rt, path);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut app, &rt);
    } else {
        let exit_code = repl::run_pipe(&mut app, &rt);
        process::exit(exit_code);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_app(matches: &clap::ArgMatches) -> Result<Vendorbook, String> {
    let file = match matches.get_one::<String>("config") {
        Some(path) => AppConfig::load(path).map_err(|e| e.to_string())?,
        None => AppConfig::default(),
    };
    let config = file.merge(flags_to_config(matches)?);
    Vendorbook::builder()
        .config(config)
        .open()
        .map_err(|e| format!("Failed to open vendorbook: {}", e))
}

fn run_one_shot(app: &mut Vendorbook, rt: &Runtime, path: &str) -> i32 {
    app.navigate(path);
    rt.block_on(app.settle());
    print!("{}", app.render());
    if app.page_error().is_some() {
        1
    } else {
        0
    }
}
