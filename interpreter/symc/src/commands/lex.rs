//! `lex`: batch-tokenize a file and dump the stream.

use sym_lexer_core::{TokenKind, Tokenizer};

use super::{read_source, render_token, report_bad_region};

/// Tokenize a whole file with a single tokenizer and print the stream.
///
/// The file is read into memory and split into lines; one tokenizer scans
/// all of them, so line numbers come from the scanner itself. Bad-byte
/// regions are reported to stderr, one diagnostic per region.
pub fn lex_file(path: &str) {
    let content = read_source(path);
    let lines = split_lines(&content);

    let mut tokenizer = Tokenizer::new();
    let mut total = 0usize;
    let mut bad_regions = 0usize;

    println!("Tokens for '{path}':");
    for line in &lines {
        let accepted = tokenizer.set_line(line);
        debug_assert!(accepted, "previous line not drained");
        for tok in &mut tokenizer {
            println!("  {}", render_token(&tok));
            total += 1;
            if tok.kind == TokenKind::Bad {
                report_bad_region(path, &tok);
                bad_regions += 1;
            }
        }
    }

    println!("{total} tokens across {} lines", lines.len());
    if bad_regions > 0 {
        eprintln!("{bad_regions} bad byte region(s)");
    }
    tracing::debug!(path, total, "lex complete");
}

/// Split a whole buffer into terminator-stripped lines: LF separates, a
/// preceding CR is stripped, and a final terminator does not produce a
/// phantom empty line.
pub(crate) fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
    if content.ends_with(b"\n") {
        lines.pop();
    }
    for line in &mut lines {
        if line.ends_with(b"\r") {
            *line = &line[..line.len() - 1];
        }
    }
    lines
}
