//! Command handlers for the Sym CLI.
//!
//! Each submodule implements one command. Shared helpers (`read_source`,
//! token rendering) live here in the module root.

use sym_lexer_core::{Token, TokenKind};

mod lex;
mod repl;

pub use lex::lex_file;
pub use repl::run_loop;

/// Read a source file as raw bytes, exiting with a readable message on
/// failure. Sym sources are byte streams; non-UTF-8 content is legal and
/// scans as symbol runs.
pub(crate) fn read_source(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// One line of the token dump: kind, position, and the (lossily decoded)
/// text.
pub(crate) fn render_token(tok: &Token<'_>) -> String {
    let text = String::from_utf8_lossy(tok.text);
    format!("{} @ {}:{} {:?}", tok.kind, tok.line, tok.col, text)
}

/// Stderr diagnostic for one contiguous region of bad bytes.
pub(crate) fn report_bad_region(origin: &str, tok: &Token<'_>) {
    debug_assert_eq!(tok.kind, TokenKind::Bad);
    eprintln!(
        "{origin}:{}:{}: invalid control bytes outside a quoted span ({} bytes)",
        tok.line,
        tok.col,
        tok.len()
    );
}
