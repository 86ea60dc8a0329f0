//! Propsync - keep .properties translation files in sync with a master file
//!
//! Propsync is a CLI tool and library for synchronizing line-oriented
//! `key=value` resource files against a single master file. The master's
//! keys, comments, blank lines, and ordering dictate the structure of every
//! translation file; existing translated values are preserved, and keys
//! missing from a translation fall back to the master's value.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, orchestration, exit codes)
//! - `parser`: Line classifier for the properties file format
//! - `merge`: Pure merge engine (master structure + translated values)
//! - `sync`: Per-file synchronization (parse, merge, conditional rewrite)
//! - `report`: Console output formatting

pub mod cli;
pub mod merge;
pub mod parser;
pub mod report;
pub mod sync;
