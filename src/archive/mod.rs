//! Initramfs archive assembly
//!
//! The archive is a single gzip stream whose decompressed payload is the
//! strict concatenation of `(relative path bytes ++ file content bytes)`
//! per regular file, in walker order. There is no length prefix, separator
//! or index between records: the boot-side unpacker splits records by its
//! own fixed convention, so the encoder must never insert bytes of its own
//! and path strings must never contain the unpacker's delimiter byte.
//!
//! - `walker`: deterministic traversal of the source tree
//! - `encoder`: record encoding, compression and atomic placement

pub mod encoder;
pub mod error;
pub mod walker;
