//! Token kinds and the borrowed token value.

use std::fmt;

/// The kind of a produced token.
///
/// Closed set; discriminants are pinned (see the kind tests) so that
/// downstream tables indexed by kind stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    /// Identifier/operator-like atom: a maximal run of symbol bytes.
    Symbol = 0,
    /// Quoted-span content, delimiters excluded, escapes left in place.
    Quoted = 1,
    /// The run of spaces at the start of a line. Always emitted exactly
    /// once per line, possibly zero length, before anything else.
    LeadingSpace = 2,
    /// A mid-line run of spaces.
    Space = 3,
    /// End-of-line sentinel, zero length, last token of every line.
    Eol = 4,
    /// A contiguous run of control bytes that are invalid outside quoted
    /// spans. One token per run so diagnostics report one per region.
    Bad = 5,
}

impl TokenKind {
    /// Readable name for diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Symbol => "symbol",
            TokenKind::Quoted => "quoted",
            TokenKind::LeadingSpace => "lead-space",
            TokenKind::Space => "space",
            TokenKind::Eol => "end-of-line",
            TokenKind::Bad => "bad",
        }
    }

    /// Whether this kind carries no content (separators and the sentinel).
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::LeadingSpace | TokenKind::Space | TokenKind::Eol
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified span of a line buffer plus its position.
///
/// `text` borrows from the line the tokenizer was fed; a token cannot
/// outlive that buffer. For [`TokenKind::Quoted`] the text is the span
/// content only -- the delimiters are consumed but never included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What was scanned.
    pub kind: TokenKind,
    /// 1-based line number, as counted by accepted `set_line` calls.
    pub line: u64,
    /// 1-based column of the token's first byte. For quoted spans this is
    /// the column of the opening delimiter.
    pub col: u64,
    /// The token's bytes, borrowed from the line buffer.
    pub text: &'a [u8],
}

impl Token<'_> {
    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty (lead-space runs and the
    /// end-of-line sentinel commonly are).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
