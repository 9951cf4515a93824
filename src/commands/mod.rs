//! Command implementations behind the `initpack` binary
//!
//! Each command is a thin handler: it parses nothing itself, drives the
//! library types, and writes its human-readable outcome through the
//! injected writer.

pub mod gen_tree;
pub mod pack;
pub mod sort_symbols;
