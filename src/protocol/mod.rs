//! Interactive session protocol.
//!
//! Line-oriented commands consumed by the `hexfray` binary: one command per
//! line on stdin, responses on stdout.

pub mod parser;

pub use parser::{parse_command, Command};
