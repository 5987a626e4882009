//! The read-tokenize loop.

use sym_lexer_core::{TokenKind, Tokenizer};
use sym_liner::LineSource;

use super::{render_token, report_bad_region};

/// Drive a line source until end of input, tokenizing and printing each
/// line's stream. Returns the process exit code: 0 on clean end of input,
/// 1 when the source fails (the failure is fatal to the loop).
///
/// Each line buffer lives only for its own scan, so the loop scopes a
/// tokenizer per line and keeps the numbering continuous with
/// [`Tokenizer::starting_at`].
pub fn run_loop(liner: &mut dyn LineSource) -> i32 {
    if let Err(e) = liner.open() {
        eprintln!("error: {e}");
        return 1;
    }

    let mut line_no: u64 = 0;
    let code = loop {
        match liner.next_line() {
            Ok(None) => break 0,
            Ok(Some(line)) => {
                line_no += 1;
                tokenize_one(line_no, &line);
            }
            Err(e) => {
                eprintln!("error: {e}");
                break 1;
            }
        }
    };

    match liner.close() {
        Ok(()) => code,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

/// Tokenize a single line and print its stream, with one stderr diagnostic
/// per bad-byte region.
fn tokenize_one(line_no: u64, line: &[u8]) {
    let mut tokenizer = Tokenizer::starting_at(line_no);
    let accepted = tokenizer.set_line(line);
    debug_assert!(accepted, "fresh tokenizer refused a line");
    for tok in &mut tokenizer {
        println!("{}", render_token(&tok));
        if tok.kind == TokenKind::Bad {
            report_bad_region("input", &tok);
        }
    }
    tracing::trace!(line = line_no, "line tokenized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use sym_liner::LinerError;

    /// Scripted source: hands out a fixed set of lines, then end of input.
    struct ScriptedLiner {
        lines: VecDeque<Vec<u8>>,
        opened: bool,
        closed: bool,
    }

    impl ScriptedLiner {
        fn new(lines: &[&[u8]]) -> Self {
            ScriptedLiner {
                lines: lines.iter().map(|l| l.to_vec()).collect(),
                opened: false,
                closed: false,
            }
        }
    }

    impl LineSource for ScriptedLiner {
        fn open(&mut self) -> Result<(), LinerError> {
            self.opened = true;
            Ok(())
        }

        fn next_line(&mut self) -> Result<Option<Vec<u8>>, LinerError> {
            Ok(self.lines.pop_front())
        }

        fn close(&mut self) -> Result<(), LinerError> {
            self.closed = true;
            Ok(())
        }
    }

    /// Source that fails on the first read.
    struct FailingLiner;

    impl LineSource for FailingLiner {
        fn open(&mut self) -> Result<(), LinerError> {
            Ok(())
        }

        fn next_line(&mut self) -> Result<Option<Vec<u8>>, LinerError> {
            Err(LinerError::Io(std::io::Error::other("pipe burst")))
        }

        fn close(&mut self) -> Result<(), LinerError> {
            Ok(())
        }
    }

    #[test]
    fn clean_end_of_input_exits_zero() {
        let mut liner = ScriptedLiner::new(&[&b"greet \"hi\""[..], &b""[..], &b"  bye"[..]]);
        assert_eq!(run_loop(&mut liner), 0);
        assert!(liner.opened);
        assert!(liner.closed);
        assert!(liner.lines.is_empty());
    }

    #[test]
    fn source_failure_is_fatal_and_nonzero() {
        let mut liner = FailingLiner;
        assert_eq!(run_loop(&mut liner), 1);
    }

    #[test]
    fn bad_bytes_do_not_abort_the_loop() {
        // Bad tokens are diagnostics, not failures: the loop keeps going.
        let mut liner = ScriptedLiner::new(&[&b"a\x01b"[..], &b"after"[..]]);
        assert_eq!(run_loop(&mut liner), 0);
        assert!(liner.lines.is_empty());
    }
}
