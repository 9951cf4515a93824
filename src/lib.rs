pub mod archive;
pub mod commands;
pub mod symbols;
pub mod treegen;
