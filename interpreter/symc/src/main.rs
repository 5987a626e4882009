//! Sym CLI.
//!
//! Read-tokenize front end for the Sym interpreter.

use std::io::IsTerminal;

use sym_liner::{FileLiner, LineSource, PromptLiner, StdinLiner};
use symc::commands::{lex_file, run_loop};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        run_interactive();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sym lex <file.sym>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "repl" => {
            run_interactive();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Sym {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, read it through the file
            // source the same way the interactive loop reads the terminal
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("sym"))
            {
                let mut liner = FileLiner::new(command);
                exit_if_nonzero(run_loop(&mut liner));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Run the read-tokenize loop against the terminal prompt, or plain stdin
/// when input is piped.
fn run_interactive() {
    let mut liner: Box<dyn LineSource> = if std::io::stdin().is_terminal() {
        Box::new(PromptLiner::new())
    } else {
        Box::new(StdinLiner::new())
    };
    exit_if_nonzero(run_loop(liner.as_mut()));
}

fn exit_if_nonzero(code: i32) {
    if code != 0 {
        std::process::exit(code);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Sym interpreter front end");
    println!();
    println!("Usage: sym [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)           Interactive session (or tokenize piped stdin)");
    println!("  <file.sym>       Read a file through the line source and tokenize it");
    println!("  lex <file.sym>   Batch-tokenize a file and dump the stream");
    println!("  repl             Interactive session, explicitly");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Examples:");
    println!("  sym                      # prompt, one token stream per line");
    println!("  echo 'hi \"there\"' | sym  # piped stdin");
    println!("  sym lex script.sym       # numbered dump of a whole file");
    println!();
    println!("Set RUST_LOG=debug for tracing output on stderr.");
}
