//! Per-line scanning state machine.
//!
//! The tokenizer is fed one line at a time (terminator already stripped)
//! and drained token by token. Every line produces a fixed envelope: one
//! [`TokenKind::LeadingSpace`] first, zero or more content tokens covering
//! the rest of the line in byte order, and one [`TokenKind::Eol`] last.
//! The scanner never backtracks and never re-emits.
//!
//! # Design
//!
//! A small closed state machine drives the scan. `Begin` emits the
//! leading-space run and nothing else. `Mid` classifies the byte at the
//! cursor and dispatches to a focused sub-scanner that consumes a maximal
//! run (or a quoted span) and returns one token. `End` is terminal for the
//! line and is the only state in which [`Tokenizer::set_line`] accepts a
//! new buffer; feeding a line while a previous one is mid-scan is a
//! refused no-op, reported by the `bool` return. `Error` is reserved:
//! nothing transitions into it today, but the slot stays defined for
//! future error-reporting extensions.

use crate::classify::{classify, ByteClass};
use crate::token::{Token, TokenKind};

/// Scan state for one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// A line has been accepted and its leading-space token is still owed.
    Begin,
    /// Scanning the body of the line.
    Mid,
    /// The line is drained (or no line was ever fed). `set_line` accepts.
    End,
    /// Reserved. No current operation transitions here.
    Error,
}

/// Line-at-a-time tokenizer.
///
/// ```
/// use sym_lexer_core::{TokenKind, Tokenizer};
///
/// let mut tok = Tokenizer::new();
/// assert!(tok.set_line(b"say \"hi\""));
/// let kinds: Vec<TokenKind> = (&mut tok).map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::LeadingSpace,
///         TokenKind::Symbol,
///         TokenKind::Space,
///         TokenKind::Quoted,
///         TokenKind::Eol,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Tokenizer<'a> {
    state: ScanState,
    /// The current line buffer. Borrowed; the caller keeps ownership.
    line: &'a [u8],
    /// 1-based number of the current line, counted by accepted lines.
    line_number: u64,
    /// Byte offset of the next unscanned byte. Always <= `line.len()`.
    cursor: usize,
    /// Cursor value before the most recent token was consumed.
    prev_cursor: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer with no line loaded. The first accepted line is
    /// numbered 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a tokenizer whose first accepted line will be numbered
    /// `first_line`.
    ///
    /// Interactive callers feed lines whose buffers do not share a
    /// lifetime; they scope a tokenizer per line and use this to keep the
    /// numbering continuous.
    pub fn starting_at(first_line: u64) -> Self {
        Tokenizer {
            state: ScanState::End,
            line: &[],
            line_number: first_line.saturating_sub(1),
            cursor: 0,
            prev_cursor: 0,
        }
    }

    /// Current scan state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Number of the current line (0 before any line is accepted).
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// 1-based column where the most recently emitted token started
    /// (1 when nothing has been emitted on the current line yet).
    pub fn last_col(&self) -> u64 {
        self.prev_cursor as u64 + 1
    }

    /// Feed the next line. Accepted only when the previous line is fully
    /// drained; otherwise nothing changes and `false` is returned.
    ///
    /// The buffer must not include the line terminator -- stripping it is
    /// the line source's job.
    pub fn set_line(&mut self, line: &'a [u8]) -> bool {
        if self.state != ScanState::End {
            return false;
        }
        self.state = ScanState::Begin;
        self.line = line;
        self.line_number += 1;
        self.cursor = 0;
        self.prev_cursor = 0;
        true
    }

    /// Produce the next token of the current line, or `None` when the line
    /// is exhausted (and before any line has been fed).
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        match self.state {
            ScanState::Begin => Some(self.lead_space()),
            ScanState::Mid => Some(self.scan()),
            ScanState::End | ScanState::Error => None,
        }
    }

    // ─── Begin ──────────────────────────────────────────────────────────

    /// Emit the leading-space token: the maximal run of space bytes at the
    /// start of the line, possibly empty, always at column 1.
    ///
    /// Matches the literal space byte rather than [`ByteClass::Space`]; the
    /// two agree today, but lead-space detection is positional by contract.
    fn lead_space(&mut self) -> Token<'a> {
        let len = self.line.iter().take_while(|&&b| b == b' ').count();
        self.prev_cursor = 0;
        self.cursor = len;
        self.state = ScanState::Mid;
        Token {
            kind: TokenKind::LeadingSpace,
            line: self.line_number,
            col: 1,
            text: &self.line[..len],
        }
    }

    // ─── Mid ────────────────────────────────────────────────────────────

    /// Classify the byte at the cursor and dispatch to a sub-scanner.
    fn scan(&mut self) -> Token<'a> {
        let start = self.cursor;
        self.prev_cursor = start;

        if start == self.line.len() {
            return self.end_of_line(start);
        }

        match classify(self.line[start]) {
            ByteClass::Symbol => self.run(start, ByteClass::Symbol, TokenKind::Symbol),
            ByteClass::Space => self.run(start, ByteClass::Space, TokenKind::Space),
            ByteClass::Bad => self.run(start, ByteClass::Bad, TokenKind::Bad),
            ByteClass::Quote => self.quoted(start),
            // A stray line-end byte (DEL, or an embedded LF the caller
            // failed to strip) terminates the scan the same way the end of
            // the buffer does.
            ByteClass::LineEnd => self.end_of_line(start),
        }
    }

    /// Emit the zero-length end-of-line sentinel and finish the line.
    fn end_of_line(&mut self, start: usize) -> Token<'a> {
        self.state = ScanState::End;
        Token {
            kind: TokenKind::Eol,
            line: self.line_number,
            col: start as u64 + 1,
            text: &self.line[start..start],
        }
    }

    /// Maximal run of bytes sharing `class`, starting at `start`.
    /// The byte at `start` has already been classified; length >= 1.
    fn run(&mut self, start: usize, class: ByteClass, kind: TokenKind) -> Token<'a> {
        let rest = &self.line[start..];
        let mut len = 1;
        while len < rest.len() && classify(rest[len]) == class {
            len += 1;
        }
        self.cursor = start + len;
        Token {
            kind,
            line: self.line_number,
            col: start as u64 + 1,
            text: &rest[..len],
        }
    }

    /// Quoted span starting at the opening delimiter at `start`.
    ///
    /// The opening delimiter is skipped, then the span runs to the first
    /// delimiter byte not immediately preceded by a backslash (which is
    /// consumed but excluded), or to the end of the line if none closes
    /// it. Content is returned byte-for-byte; escapes are not rewritten.
    fn quoted(&mut self, start: usize) -> Token<'a> {
        let content = &self.line[start + 1..];
        let mut len = 0;
        let mut closed = false;
        while let Some(offset) = memchr::memchr(b'"', &content[len..]) {
            let at = len + offset;
            if at == 0 || content[at - 1] != b'\\' {
                len = at;
                closed = true;
                break;
            }
            // Escaped delimiter stays in the span; resume after it.
            len = at + 1;
        }
        if !closed {
            len = content.len();
        }
        self.cursor = start + 1 + len + usize::from(closed);
        Token {
            kind: TokenKind::Quoted,
            line: self.line_number,
            col: start as u64 + 1,
            text: &content[..len],
        }
    }
}

impl Default for Tokenizer<'_> {
    fn default() -> Self {
        Tokenizer::new()
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    /// Drains the current line; `None` means the line is exhausted, not
    /// that the stream ended. Feed the next line and iterate again.
    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token()
    }
}

/// Convenience: tokenize a single line and collect the whole sequence,
/// `LeadingSpace` through `Eol` inclusive.
///
/// For incremental or multi-line scanning, drive a [`Tokenizer`] directly.
pub fn tokenize_line(line: &[u8]) -> Vec<Token<'_>> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_line(line);
    tokenizer.collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
