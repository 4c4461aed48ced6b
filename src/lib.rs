//! wordloc - extract and re-insert game message strings
//!
//! wordloc is a CLI tool and library for localizing nested game message
//! files (`labelDataArray` / `wordDataArray` / `str`). It flattens every
//! translatable string into a CSV catalog or per-file flat JSON, and merges
//! filled-in translations back without touching any other field.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, prompts, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Identifier scheme, extractor, merger and backup wrapper
//! - `logging`: tracing subscriber setup

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
