//! Line-oriented tokenizer core for the Sym interpreter.
//!
//! This crate turns one line of input at a time into a sequence of
//! position-annotated [`Token`]s. It is standalone by design: no `sym_*`
//! dependencies, no I/O, no allocation on the scanning path. Line buffers
//! come from the caller (normally a `sym_liner` source) and tokens borrow
//! from them.
//!
//! # Layers
//!
//! - [`classify`]: a 256-entry byte classification table.
//! - [`token`]: token kinds and the borrowed [`Token`] value.
//! - [`tokenizer`]: the per-line scanning state machine.

pub mod classify;
pub mod token;
pub mod tokenizer;

pub use classify::{classify, ByteClass};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize_line, ScanState, Tokenizer};
