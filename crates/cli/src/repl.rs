//! Interactive shell and pipe mode.
//!
//! Both read one command per line. Commands that start a load wait for the
//! page to settle, then print it.

use std::io::BufRead;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::runtime::Runtime;
use tracing::debug;
use vendorbook::Vendorbook;

use crate::parse::{parse_line, AppCommand, CliAction, MetaCommand};

const PROMPT: &str = "vendorbook> ";

const HELP: &str = "\
Commands:
  go <path>        navigate (/vendors, /vendors/<id>)
  search [text]    set the list search text
  refresh          reload the vendor list
  retry            retry a failed load
  back             return from a vendor to the list
  show             print the current page
  help             this text
  quit, exit       leave";

/// What the loop should do after a line.
enum Flow {
    Continue,
    Stop,
}

/// Run the interactive shell until `quit` or EOF.
pub fn run_repl(app: &mut Vendorbook, rt: &Runtime) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    println!("{}", HELP);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                match handle_line(app, rt, &line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Stop) => break,
                    Err(e) => eprintln!("(error) {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }
}

/// Run commands from stdin, one per line. Returns the exit code.
pub fn run_pipe(app: &mut Vendorbook, rt: &Runtime) -> i32 {
    let mut exit_code = 0;
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match handle_line(app, rt, trimmed) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                exit_code = 1;
            }
        }
    }
    exit_code
}

fn handle_line(app: &mut Vendorbook, rt: &Runtime, line: &str) -> Result<Flow, String> {
    match parse_line(line)? {
        CliAction::Meta(MetaCommand::Quit) => Ok(Flow::Stop),
        CliAction::Meta(MetaCommand::Help) => {
            println!("{}", HELP);
            Ok(Flow::Continue)
        }
        CliAction::Execute(cmd) => {
            execute(app, rt, cmd)?;
            Ok(Flow::Continue)
        }
    }
}

/// Run one page command and print the resulting page.
pub fn execute(app: &mut Vendorbook, rt: &Runtime, cmd: AppCommand) -> Result<(), String> {
    debug!(command = ?cmd, "Executing");
    let waits = cmd.waits_for_page();
    match cmd {
        AppCommand::Go { path } => {
            app.navigate(&path);
        }
        AppCommand::Search { text } => {
            if !app.search(&text) {
                return Err("search is only available on /vendors".into());
            }
        }
        AppCommand::Refresh => {
            if !app.refresh() {
                return Err("nothing to refresh".into());
            }
        }
        AppCommand::Retry => {
            if !app.retry() {
                return Err("nothing to retry".into());
            }
        }
        AppCommand::Back => {
            if !app.back() {
                return Err("already at the list".into());
            }
        }
        AppCommand::Show => {}
    }
    if waits {
        rt.block_on(app.settle());
    }
    print!("{}", app.render());
    Ok(())
}
