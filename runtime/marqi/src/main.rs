//! Marq runtime CLI.
//!
//! Evaluates markup programs from files or an interactive session.

use std::sync::Once;

use marq_eval::Runtime;

mod repl;

static TRACING_INIT: Once = Once::new();

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        repl::start();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: marq run <file.html>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: marq parse <file.html>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "repl" => {
            repl::start();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Marq runtime {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Evaluate a source file in a fresh session.
fn run_file(path: &str) {
    let source = read_file(path);
    let mut runtime = Runtime::new();
    if let Err(e) = runtime.eval(&source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Parse a source file and print the instruction tree as canonical markup.
fn parse_file(path: &str) {
    let source = read_file(path);
    match marq_parse::parse(&source) {
        Ok(program) => println!("{program}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=marq_parse=debug`
/// or `RUST_LOG=marq_eval=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn print_usage() {
    println!("Marq runtime");
    println!();
    println!("Usage: marq <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.html>      Evaluate a Marq program");
    println!("  parse <file.html>    Parse and print the instruction tree");
    println!("  repl                 Start an interactive session");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("With no arguments, `marq` starts an interactive session.");
    println!("A bare `.html`/`.htm` path is treated as `marq run <path>`.");
    println!();
    println!("Examples:");
    println!("  marq run program.html");
    println!("  marq program.html");
    println!("  marq parse program.html");
}
