//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Synchronize translation properties files with a master file.
///
/// Every translation file is rewritten to match the master's structure
/// (keys, comments, blank lines, ordering). Existing translated values are
/// preserved; keys missing from a translation are filled with the master's
/// value and reported as warnings.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    after_help = "Warning: keys removed from the master are dropped from every \
                  translation file with no backup. Run under version control."
)]
pub struct Arguments {
    /// Master properties file that defines the required structure
    pub master: PathBuf,

    /// Translation files to synchronize, processed in order
    #[arg(required = true)]
    pub translations: Vec<PathBuf>,
}
