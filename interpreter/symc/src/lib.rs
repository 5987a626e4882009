//! Library surface of the Sym CLI.
//!
//! The binary (`sym`) is a thin dispatcher over [`commands`]; the command
//! implementations live here so they can be exercised by tests.

pub mod commands;
